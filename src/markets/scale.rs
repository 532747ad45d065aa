use crate::config::{AXIS_HEADROOM, AXIS_TICKS, DEFAULT_AXIS_MAX};
use crate::models::PlottedPoint;

/// Padded upper bound for the Y axis: `ceil(series_max * 1.1)`, guaranteeing
/// 10% headroom above the highest sample. An empty series gets the fixed
/// default of 100 rather than NaN.
pub fn compute_max(points: &[PlottedPoint]) -> f64 {
    if points.is_empty() {
        return DEFAULT_AXIS_MAX;
    }

    let series_max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);

    // 100 * 1.1 lands a few ulps above 110.0 in binary; nudge below before
    // ceiling so a peak of 100 yields 110, not 111. The floor keeps the
    // result at or above the peak when every sample is negative, where
    // scaling by 1.1 moves the other way.
    let padded = series_max * AXIS_HEADROOM;
    (padded - padded.abs() * 1e-12).ceil().max(series_max)
}

/// The candidate tick positions at or below the axis max.
pub fn axis_ticks(axis_max: f64) -> Vec<f64> {
    AXIS_TICKS.iter().copied().filter(|t| *t <= axis_max).collect()
}
