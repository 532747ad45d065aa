//! End-to-end pass over every widget surface with the sample catalogs.

mod common;

use premier_markets_sdk::nav::{DropdownState, MediaState};

#[test]
fn full_homepage_round_trip() {
    let home = common::sample_homepage();
    assert_eq!(
        home.to_string(),
        "Homepage(assets=8, categories=6, timeframes=8, testimonials=9)"
    );

    // Market widget: select, filter, chart.
    let mut markets = home.market_session();
    markets.select_category("cryptocurrencies");
    markets.select_asset("btc");
    markets.select_timeframe("1h");

    let subset = markets.filtered_assets();
    assert_eq!(subset.len(), 2);
    assert_eq!(markets.selected_asset().unwrap().symbol, "BTC");

    let chart = markets.chart();
    assert_eq!(chart.points.len(), 24);
    assert!(chart.axis_max >= chart.points.iter().map(|p| p.value).fold(0.0, f64::max));
    assert!(chart.ticks.iter().all(|t| *t <= chart.axis_max));

    // Testimonials: one full page on the default config.
    let mut testimonials = home.testimonial_session();
    let page = testimonials.page();
    assert_eq!(page.cards.len(), 9);
    assert_eq!(page.page_count, 1);

    // Nav chrome state.
    let mut dropdowns = DropdownState::new();
    dropdowns.toggle("Trading");
    assert!(dropdowns.is_open("Trading"));
    dropdowns.toggle("Company");
    assert!(dropdowns.is_open("Company"));
    assert!(!dropdowns.is_open("Trading"));
    dropdowns.toggle("Company");
    assert_eq!(dropdowns.open_id(), None);

    let mut media = MediaState::new();
    assert!(!media.is_playing());
    media.toggle();
    assert!(media.is_playing());
    media.set_playing(false);
    assert!(!media.is_playing());
}

#[test]
fn chart_view_serializes_with_the_original_wire_shape() {
    let home = common::sample_homepage();
    let markets = home.market_session();

    let chart = markets.chart();
    let json = serde_json::to_value(&chart).unwrap();

    let first = &json["points"][0];
    assert_eq!(first["month"], "00:00");
    assert_eq!(first["value"], 20.0);
    assert_eq!(first["date"], "28 Okt 2023");
    assert_eq!(first["price"], "$1,425.00");
    assert!(first["secondaryValue"].is_number());

    // Unannotated points omit the optional fields entirely.
    let second = &json["points"][1];
    assert!(second.get("date").is_none());
    assert!(second.get("price").is_none());
}
