use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChartPoint -- One raw sample as resolved by a SeriesProvider
// ---------------------------------------------------------------------------

/// One plotted sample: a time-bucket label and a value.
///
/// `date` and `price` are human-readable annotations present only on
/// designated highlight points (the tooltip shows them instead of the raw
/// value). The field serializes as `month` to match the original wire shape,
/// even though the label may be an hour or weekday bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    #[serde(rename = "month")]
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            date: None,
            price: None,
        }
    }

    /// A highlight point carrying a tooltip date and price string.
    pub fn annotated(
        label: impl Into<String>,
        value: f64,
        date: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            date: Some(date.into()),
            price: Some(price.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// PlottedPoint -- A chart-ready sample with the derived shadow value
// ---------------------------------------------------------------------------

/// A [`ChartPoint`] plus `secondary_value`, the capped shadow-band value
/// derived by the series builder: `min(value * 0.75, series_max * 0.9)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlottedPoint {
    #[serde(rename = "month")]
    pub label: String,
    pub value: f64,
    pub secondary_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

// ---------------------------------------------------------------------------
// ChartView -- Everything the chart renderer needs for one frame
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub points: Vec<PlottedPoint>,
    /// Padded upper bound for the Y axis (10% headroom above the peak).
    pub axis_max: f64,
    /// Tick positions filtered to `<= axis_max`.
    pub ticks: Vec<f64>,
}
