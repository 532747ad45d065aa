use std::collections::HashMap;

/// Distinguished category id whose subset is the first [`MOST_TRADED_COUNT`]
/// catalog entries rather than a tag match.
pub const MOST_TRADED_ID: &str = "most-traded";
pub const MOST_TRADED_COUNT: usize = 3;

/// Selections a fresh market session starts from (the selection guard runs
/// immediately, so these need not resolve against custom catalogs).
pub const DEFAULT_CATEGORY_ID: &str = "most-traded";
pub const DEFAULT_ASSET_ID: &str = "gold";
pub const DEFAULT_TIMEFRAME_ID: &str = "1d";

/// Axis max returned for an empty series, and the headroom factor applied
/// above the highest sample otherwise.
pub const DEFAULT_AXIS_MAX: f64 = 100.0;
pub const AXIS_HEADROOM: f64 = 1.1;

/// Candidate Y-axis tick positions; consumers render the ones <= axis max.
pub const AXIS_TICKS: [f64; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

/// Point count of the fallback series used for unknown (asset, timeframe) pairs.
pub const FALLBACK_BUCKET_COUNT: usize = 12;

/// Shadow band: `secondary_value = min(value * SHADOW_RATIO, max * SHADOW_CAP)`.
/// The cap keeps the band below 90% of the series peak.
pub const SHADOW_RATIO: f64 = 0.75;
pub const SHADOW_CAP: f64 = 0.9;

/// Value used at both ends of the flat series substituted for degenerate
/// (fewer than 2 points) input.
pub const FLAT_FALLBACK_VALUE: f64 = 50.0;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Expected point count per timeframe id. Every series resolved for a known
/// (asset, timeframe) pair has exactly this many buckets.
pub fn default_bucket_counts() -> HashMap<String, usize> {
    HashMap::from([
        ("1d".to_string(), 7),
        ("1h".to_string(), 24),
        ("4h".to_string(), 6),
        ("1m".to_string(), 60),
        ("5m".to_string(), 12),
        ("15m".to_string(), 4),
        ("30m".to_string(), 2),
        ("1w".to_string(), 7),
    ])
}

// ---------------------------------------------------------------------------
// WidgetConfig
// ---------------------------------------------------------------------------

/// Fixed named options supplied at initialization.
///
/// Defaults mirror the production homepage configuration: 9 testimonials per
/// page, 150-character truncation threshold, and the 8-timeframe bucket table.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Testimonials shown per page.
    pub items_per_page: usize,
    /// Review bodies longer than this many characters are truncated with an
    /// ellipsis until expanded.
    pub max_testimonial_len: usize,
    /// Bucket count keyed by timeframe id.
    pub bucket_counts: HashMap<String, usize>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            items_per_page: 9,
            max_testimonial_len: 150,
            bucket_counts: default_bucket_counts(),
        }
    }
}

impl WidgetConfig {
    /// Bucket count for a timeframe id, if it is a known timeframe.
    pub fn bucket_count(&self, timeframe_id: &str) -> Option<usize> {
        self.bucket_counts.get(timeframe_id).copied()
    }
}
