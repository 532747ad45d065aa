//! The market widget core: category filtering, chart series derivation,
//! axis scaling, and the session that ties them to UI selections.

pub mod chart;
pub mod filter;
pub mod scale;
pub mod session;

pub use chart::{build_series, SampleSeriesProvider, SeriesProvider};
pub use filter::filter_by_category;
pub use scale::{axis_ticks, compute_max};
pub use session::MarketSession;
