//! The market widget session: UI selections plus the transforms that
//! re-derive the widget's outputs from them.

use log::debug;

use crate::catalog::Catalogs;
use crate::config::{DEFAULT_ASSET_ID, DEFAULT_CATEGORY_ID, DEFAULT_TIMEFRAME_ID};
use crate::markets::chart::{build_series, SeriesProvider};
use crate::markets::filter::filter_by_category;
use crate::markets::scale::{axis_ticks, compute_max};
use crate::models::{ChartView, MarketAsset};

// ---------------------------------------------------------------------------
// MarketSession
// ---------------------------------------------------------------------------

/// Per-session selection state for the market widget.
///
/// Holds the selected category/asset/timeframe ids and enforces the
/// invariant that the selected asset is always a member of the filtered
/// subset (or the subset is empty). All outputs are re-derived from the
/// current selections and the borrowed catalogs; nothing is cached.
pub struct MarketSession<'a> {
    catalogs: &'a Catalogs,
    provider: &'a dyn SeriesProvider,
    selected_category: String,
    selected_asset: String,
    selected_timeframe: String,
}

impl<'a> MarketSession<'a> {
    /// Start a session with the default selections (most-traded / gold / 1d),
    /// with the selection guard applied immediately so the invariant holds
    /// for custom catalogs too.
    pub fn new(catalogs: &'a Catalogs, provider: &'a dyn SeriesProvider) -> Self {
        let timeframe = if catalogs.timeframes.iter().any(|t| t == DEFAULT_TIMEFRAME_ID) {
            DEFAULT_TIMEFRAME_ID.to_string()
        } else {
            catalogs.timeframes.first().cloned().unwrap_or_default()
        };

        let mut session = Self {
            catalogs,
            provider,
            selected_category: DEFAULT_CATEGORY_ID.to_string(),
            selected_asset: DEFAULT_ASSET_ID.to_string(),
            selected_timeframe: timeframe,
        };
        session.enforce_selection();
        session
    }

    // -- Events -------------------------------------------------------------

    pub fn select_category(&mut self, category_id: &str) {
        self.selected_category = category_id.to_string();
        self.enforce_selection();
    }

    pub fn select_asset(&mut self, asset_id: &str) {
        self.selected_asset = asset_id.to_string();
        self.enforce_selection();
    }

    pub fn select_timeframe(&mut self, timeframe_id: &str) {
        self.selected_timeframe = timeframe_id.to_string();
    }

    // -- Outputs ------------------------------------------------------------

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn selected_asset_id(&self) -> &str {
        &self.selected_asset
    }

    pub fn selected_timeframe(&self) -> &str {
        &self.selected_timeframe
    }

    /// The visible asset subset for the selected category, in catalog order.
    pub fn filtered_assets(&self) -> Vec<&'a MarketAsset> {
        filter_by_category(&self.catalogs.assets, &self.selected_category)
    }

    /// The full record of the selected asset.
    ///
    /// Falls back to the first catalog asset if the selected id does not
    /// resolve; `None` only when the asset catalog is empty (the defined
    /// empty state).
    pub fn selected_asset(&self) -> Option<&'a MarketAsset> {
        self.catalogs
            .assets
            .get(&self.selected_asset)
            .or_else(|| self.catalogs.assets.first())
    }

    /// The chart for the current asset/timeframe selection: plotted points,
    /// padded axis max, and the tick positions under it.
    pub fn chart(&self) -> ChartView {
        let points = build_series(self.provider, &self.selected_asset, &self.selected_timeframe);
        let axis_max = compute_max(&points);
        ChartView {
            ticks: axis_ticks(axis_max),
            points,
            axis_max,
        }
    }

    // -- Selection guard ----------------------------------------------------

    /// Re-select deterministically when the selected asset falls out of the
    /// filtered subset: first element of a non-empty subset, unchanged when
    /// the subset is empty.
    fn enforce_selection(&mut self) {
        let subset = self.filtered_assets();
        let still_member = subset.iter().any(|asset| asset.id == self.selected_asset);

        if !still_member {
            if let Some(first) = subset.first() {
                debug!(
                    "selected asset '{}' not in '{}' subset; re-selecting '{}'",
                    self.selected_asset, self.selected_category, first.id
                );
                self.selected_asset = first.id.clone();
            }
        }
    }
}
