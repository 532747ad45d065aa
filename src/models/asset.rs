use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MarketAsset -- One tradable instrument in the market widget
// ---------------------------------------------------------------------------

/// A tradable instrument as shown in the "Our Markets" widget.
///
/// Prices, change figures, and the 24h low/high are pre-formatted display
/// strings; the presentation layer renders them as-is. `buyers` / `sellers`
/// are percentages in `[0, 100]` that should sum to 100, but nothing in the
/// catalog enforces that (hand-entered figures -- see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAsset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub price: String,
    pub buy_price: String,
    pub sell_price: String,
    pub change: String,
    pub change_percent: String,
    pub is_positive: bool,
    pub category: String,
    pub buyers: f64,
    pub sellers: f64,
    pub low: String,
    pub high: String,
}

// ---------------------------------------------------------------------------
// MarketCategory -- A filter label for the asset list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCategory {
    pub id: String,
    pub label: String,
}
