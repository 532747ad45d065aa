//! Asset Selection Guard invariants across category/asset events.

mod common;

use premier_markets_sdk::catalog::Catalogs;
use premier_markets_sdk::markets::{MarketSession, SampleSeriesProvider};
use premier_markets_sdk::Homepage;

// ---------------------------------------------------------------------------
// Guard behavior
// ---------------------------------------------------------------------------

#[test]
fn switching_category_resets_selection_to_first_of_subset() {
    // The documented scenario: btc selected, user switches to commodities,
    // selection lands on gold (first of [gold, oil]).
    let home = Homepage::builder()
        .assets(common::tiny_assets())
        .series_seed(1)
        .build()
        .unwrap();
    let mut session = home.market_session();

    session.select_asset("btc");
    assert_eq!(session.selected_asset_id(), "btc");

    session.select_category("commodities");

    let subset: Vec<&str> = session.filtered_assets().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(subset, ["gold", "oil"]);
    assert_eq!(session.selected_asset_id(), "gold");
}

#[test]
fn selection_survives_category_change_when_still_member() {
    let home = common::sample_homepage();
    let mut session = home.market_session();

    session.select_category("commodities");
    session.select_asset("oil");
    session.select_category("commodities");
    assert_eq!(session.selected_asset_id(), "oil");
}

#[test]
fn empty_subset_leaves_selection_unchanged() {
    // No asset carries the etfs tag in the sample catalog.
    let home = common::sample_homepage();
    let mut session = home.market_session();

    session.select_asset("eth");
    session.select_category("etfs");

    assert!(session.filtered_assets().is_empty());
    assert_eq!(session.selected_asset_id(), "eth");
    // The full record still resolves from the catalog for the header card.
    assert_eq!(session.selected_asset().unwrap().id, "eth");
}

#[test]
fn selecting_asset_outside_subset_snaps_back_to_first() {
    let home = common::sample_homepage();
    let mut session = home.market_session();

    session.select_category("commodities");
    session.select_asset("btc");
    assert_eq!(session.selected_asset_id(), "gold");
}

#[test]
fn selection_invariant_holds_after_any_category_sequence() {
    let home = common::sample_homepage();
    let mut session = home.market_session();

    let sequence = [
        "commodities",
        "etfs",
        "cryptocurrencies",
        "bonds",
        "most-traded",
        "shares",
        "indices",
    ];

    for category in sequence {
        session.select_category(category);
        let subset = session.filtered_assets();
        assert!(
            subset.is_empty() || subset.iter().any(|a| a.id == session.selected_asset_id()),
            "selected '{}' not in '{category}' subset",
            session.selected_asset_id()
        );
    }
}

// ---------------------------------------------------------------------------
// Session defaults
// ---------------------------------------------------------------------------

#[test]
fn fresh_session_starts_on_most_traded_gold_1d() {
    let home = common::sample_homepage();
    let session = home.market_session();

    assert_eq!(session.selected_category(), "most-traded");
    // gold sits in the first three sample assets, so the guard keeps it.
    assert_eq!(session.selected_asset_id(), "gold");
    assert_eq!(session.selected_timeframe(), "1d");
}

#[test]
fn fresh_session_guard_applies_to_custom_catalogs() {
    // No gold here: the default selection is re-pointed at the first
    // most-traded entry immediately.
    let home = Homepage::builder()
        .assets(vec![
            common::asset("sp500", "indices"),
            common::asset("nasdaq", "indices"),
        ])
        .series_seed(1)
        .build()
        .unwrap();
    let session = home.market_session();

    assert_eq!(session.selected_asset_id(), "sp500");
}

#[test]
fn session_can_be_built_directly_from_catalogs_and_a_provider() {
    let catalogs = Catalogs::sample();
    let provider = SampleSeriesProvider::with_seed(1);
    let session = MarketSession::new(&catalogs, &provider);

    assert_eq!(session.selected_category(), "most-traded");
    assert_eq!(session.chart().points.len(), 7);
}

#[test]
fn default_timeframe_falls_back_to_first_when_1d_missing() {
    let home = Homepage::builder()
        .timeframes(vec!["1h".to_string(), "4h".to_string()])
        .series_seed(1)
        .build()
        .unwrap();
    let session = home.market_session();

    assert_eq!(session.selected_timeframe(), "1h");
}
