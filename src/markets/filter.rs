use crate::catalog::Catalog;
use crate::config::{MOST_TRADED_COUNT, MOST_TRADED_ID};
use crate::models::MarketAsset;

/// The visible asset subset for a category selection.
///
/// `"most-traded"` is a fixed top-picks heuristic: the first 3 catalog
/// entries in catalog order, regardless of their tags. Any other id selects
/// the entries whose category tag equals it, preserving catalog order. No
/// matches is a valid empty subset, not an error.
pub fn filter_by_category<'a>(
    assets: &'a Catalog<MarketAsset>,
    category_id: &str,
) -> Vec<&'a MarketAsset> {
    if category_id == MOST_TRADED_ID {
        return assets.iter().take(MOST_TRADED_COUNT).collect();
    }

    assets
        .iter()
        .filter(|asset| asset.category == category_id)
        .collect()
}
