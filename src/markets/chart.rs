//! Chart series derivation.
//!
//! A [`SeriesProvider`] resolves a precomputed series for an
//! `(asset, timeframe)` pair; [`build_series`] turns the resolved points into
//! chart-ready [`PlottedPoint`]s, applying the unknown-pair and
//! degenerate-input fallbacks so downstream slope/ratio math never divides
//! by zero.

use log::debug;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::collections::HashMap;

use crate::config::{
    default_bucket_counts, FALLBACK_BUCKET_COUNT, FLAT_FALLBACK_VALUE, MONTH_LABELS, SHADOW_CAP,
    SHADOW_RATIO, WEEKDAY_LABELS,
};
use crate::models::{ChartPoint, PlottedPoint};

// ---------------------------------------------------------------------------
// SeriesProvider
// ---------------------------------------------------------------------------

/// Source of chart series keyed by `(asset id, timeframe id)`.
///
/// Implementations must be pure: for a fixed provider value, the same pair
/// always resolves to the same points. The shipped
/// [`SampleSeriesProvider`] generates its tables once at construction;
/// a production implementation would be backed by API data instead.
pub trait SeriesProvider {
    /// The series for a known pair, or `None` if the pair is unknown.
    fn series(&self, asset_id: &str, timeframe_id: &str) -> Option<Vec<ChartPoint>>;

    /// The series substituted for unknown pairs (12 month-labeled buckets).
    fn fallback_series(&self) -> Vec<ChartPoint>;
}

// ---------------------------------------------------------------------------
// SampleSeriesProvider
// ---------------------------------------------------------------------------

/// Placeholder series data for the sample catalogs.
///
/// Mixes a hand-authored gold table (fixed values, a tooltip annotation on
/// the first daily sample) with synthetic jittered series for the remaining
/// gold/btc timeframes, mirroring the original placeholder dataset. All
/// randomness happens in the constructor; lookups afterwards are pure.
pub struct SampleSeriesProvider {
    series: HashMap<(String, String), Vec<ChartPoint>>,
    fallback: Vec<ChartPoint>,
}

const GOLD_TIMEFRAMES: [&str; 8] = ["1d", "1h", "4h", "1m", "5m", "15m", "30m", "1w"];
const BTC_TIMEFRAMES: [&str; 8] = ["1d", "1h", "4h", "1m", "5m", "15m", "30m", "1w"];

impl SampleSeriesProvider {
    pub fn new() -> Self {
        Self::from_rng(&mut thread_rng())
    }

    /// Deterministic construction for tests and reproducible previews.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::with_counts(&default_bucket_counts(), rng)
    }

    /// Like [`with_seed`](Self::with_seed), honoring a custom bucket table.
    pub fn with_counts_seeded(counts: &HashMap<String, usize>, seed: u64) -> Self {
        Self::with_counts(counts, &mut StdRng::seed_from_u64(seed))
    }

    /// Build the tables for a custom bucket-count table.
    ///
    /// The hand-authored gold tables are used only when the configured count
    /// matches their length; otherwise those pairs are generated too, so
    /// every known pair honors the table.
    pub fn with_counts<R: Rng>(counts: &HashMap<String, usize>, rng: &mut R) -> Self {
        let mut series = HashMap::new();

        // Generation order is fixed so a seeded RNG reproduces the tables.
        for tf in GOLD_TIMEFRAMES {
            let n = counts.get(tf).copied().unwrap_or(FALLBACK_BUCKET_COUNT);
            let table = match tf {
                "1d" => Some(gold_daily()),
                "1w" => Some(gold_weekly()),
                _ => None,
            };
            let points = match table {
                Some(t) if t.len() == n => t,
                _ => synthetic_series(tf, n, 20.0, 80.0, rng),
            };
            series.insert(key("gold", tf), points);
        }
        for tf in BTC_TIMEFRAMES {
            let n = counts.get(tf).copied().unwrap_or(FALLBACK_BUCKET_COUNT);
            series.insert(key("btc", tf), synthetic_series(tf, n, 30.0, 70.0, rng));
        }

        let fallback = (0..FALLBACK_BUCKET_COUNT)
            .map(|i| ChartPoint::new(MONTH_LABELS[i], 20.0 + rng.gen_range(0.0..80.0)))
            .collect();

        Self { series, fallback }
    }
}

impl Default for SampleSeriesProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesProvider for SampleSeriesProvider {
    fn series(&self, asset_id: &str, timeframe_id: &str) -> Option<Vec<ChartPoint>> {
        self.series
            .get(&(asset_id.to_string(), timeframe_id.to_string()))
            .cloned()
    }

    fn fallback_series(&self) -> Vec<ChartPoint> {
        self.fallback.clone()
    }
}

// ---------------------------------------------------------------------------
// build_series
// ---------------------------------------------------------------------------

/// Derive the chart-ready series for an `(asset, timeframe)` selection.
///
/// Resolution order:
/// 1. the provider's series for the pair;
/// 2. the provider's 12-bucket fallback when the pair is unknown;
/// 3. a fixed 2-point flat series when the resolved series has fewer than
///    2 points, so every consumer can compute a slope.
///
/// Each point gets a `secondary_value` of
/// `min(value * 0.75, series_max * 0.9)` for the shadow band.
pub fn build_series(
    provider: &dyn SeriesProvider,
    asset_id: &str,
    timeframe_id: &str,
) -> Vec<PlottedPoint> {
    let resolved = match provider.series(asset_id, timeframe_id) {
        Some(points) => points,
        None => {
            debug!("no series for ({asset_id}, {timeframe_id}); using fallback buckets");
            provider.fallback_series()
        }
    };

    let resolved = if resolved.len() < 2 {
        debug!(
            "degenerate series ({} points) for ({asset_id}, {timeframe_id}); substituting flat series",
            resolved.len()
        );
        flat_series()
    } else {
        resolved
    };

    let series_max = resolved.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);

    resolved
        .into_iter()
        .map(|p| PlottedPoint {
            secondary_value: (p.value * SHADOW_RATIO).min(series_max * SHADOW_CAP),
            label: p.label,
            value: p.value,
            date: p.date,
            price: p.price,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sample tables and helpers
// ---------------------------------------------------------------------------

/// The hand-authored gold daily series; the first sample carries the tooltip
/// annotation.
fn gold_daily() -> Vec<ChartPoint> {
    vec![
        ChartPoint::annotated("00:00", 20.0, "28 Okt 2023", "$1,425.00"),
        ChartPoint::new("04:00", 35.0),
        ChartPoint::new("08:00", 45.0),
        ChartPoint::new("12:00", 30.0),
        ChartPoint::new("16:00", 50.0),
        ChartPoint::new("20:00", 60.0),
        ChartPoint::new("24:00", 70.0),
    ]
}

fn gold_weekly() -> Vec<ChartPoint> {
    let values = [20.0, 35.0, 45.0, 30.0, 50.0, 60.0, 70.0];
    WEEKDAY_LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| ChartPoint::new(*label, value))
        .collect()
}

fn synthetic_series<R: Rng>(
    timeframe_id: &str,
    count: usize,
    base: f64,
    span: f64,
    rng: &mut R,
) -> Vec<ChartPoint> {
    (0..count)
        .map(|i| ChartPoint::new(bucket_label(timeframe_id, i), base + rng.gen_range(0.0..span)))
        .collect()
}

fn bucket_label(timeframe_id: &str, i: usize) -> String {
    match timeframe_id {
        "1d" | "4h" => format!("{}:00", i * 4),
        "1h" => format!("{}:00", i),
        "1m" => format!("{}m", i),
        "5m" => format!("{}m", i * 5),
        "15m" => format!("{}m", i * 15),
        "30m" => format!("{}m", i * 30),
        "1w" => WEEKDAY_LABELS[i % WEEKDAY_LABELS.len()].to_string(),
        _ => MONTH_LABELS[i % MONTH_LABELS.len()].to_string(),
    }
}

fn flat_series() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Start", FLAT_FALLBACK_VALUE),
        ChartPoint::new("End", FLAT_FALLBACK_VALUE),
    ]
}

fn key(asset_id: &str, timeframe_id: &str) -> (String, String) {
    (asset_id.to_string(), timeframe_id.to_string())
}
