//! Data-selection core for the Premier Markets homepage.
//!
//! Provides the client-side logic behind the homepage widgets: category
//! filtering over the market asset catalog, chart series derivation per
//! asset/timeframe selection, and the shuffled, paginated testimonial
//! carousel. The presentation layer receives plain data structures from
//! here and renders them; no layout, styling, or delivery concerns live in
//! this crate.
//!
//! # Quick start
//!
//! ```
//! use premier_markets_sdk::Homepage;
//!
//! let home = Homepage::builder().series_seed(7).build().unwrap();
//!
//! // Market widget
//! let mut markets = home.market_session();
//! markets.select_category("commodities");
//! let assets = markets.filtered_assets();
//! let chart = markets.chart();
//! assert!(chart.axis_max >= 0.0 && !assets.is_empty());
//!
//! // Testimonial carousel
//! let mut testimonials = home.testimonial_session();
//! let page = testimonials.page();
//! assert_eq!(page.page, 0);
//! ```

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod markets;
pub mod models;
pub mod nav;
pub mod testimonials;

pub use catalog::{Catalog, CatalogEntry, Catalogs};
pub use config::WidgetConfig;
pub use error::{HomepageError, Result};
pub use markets::{MarketSession, SampleSeriesProvider, SeriesProvider};
pub use testimonials::{FairShuffle, PageDirection, ShuffleStrategy, TestimonialSession};

use log::warn;
use std::collections::HashSet;
use std::fmt;

use crate::models::{MarketAsset, MarketCategory, Testimonial};

// ---------------------------------------------------------------------------
// HomepageBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Homepage`] instance.
///
/// Every catalog defaults to the built-in sample data; the series provider
/// defaults to [`SampleSeriesProvider`]. Use [`Homepage::builder()`] to
/// obtain a builder, chain configuration methods, and call
/// [`build()`](HomepageBuilder::build).
pub struct HomepageBuilder {
    assets: Option<Vec<MarketAsset>>,
    categories: Option<Vec<MarketCategory>>,
    timeframes: Option<Vec<String>>,
    testimonials: Option<Vec<Testimonial>>,
    config: WidgetConfig,
    provider: Option<Box<dyn SeriesProvider>>,
    series_seed: Option<u64>,
}

impl Default for HomepageBuilder {
    fn default() -> Self {
        Self {
            assets: None,
            categories: None,
            timeframes: None,
            testimonials: None,
            config: WidgetConfig::default(),
            provider: None,
            series_seed: None,
        }
    }
}

impl HomepageBuilder {
    /// Replace the market asset catalog.
    pub fn assets(mut self, assets: Vec<MarketAsset>) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Replace the category catalog.
    pub fn categories(mut self, categories: Vec<MarketCategory>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Replace the ordered timeframe list.
    pub fn timeframes(mut self, timeframes: Vec<String>) -> Self {
        self.timeframes = Some(timeframes);
        self
    }

    /// Replace the testimonial catalog.
    pub fn testimonials(mut self, testimonials: Vec<Testimonial>) -> Self {
        self.testimonials = Some(testimonials);
        self
    }

    /// Replace the widget options (items per page, truncation length,
    /// bucket table).
    pub fn config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Plug in a custom chart series source.
    pub fn series_provider(mut self, provider: Box<dyn SeriesProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Use the sample series provider seeded deterministically -- convenient
    /// for tests and reproducible previews. Ignored when a custom provider
    /// is plugged in.
    pub fn series_seed(mut self, seed: u64) -> Self {
        self.series_seed = Some(seed);
        self
    }

    /// Build the homepage, validating catalogs and options.
    ///
    /// Fails on duplicate ids within a catalog or a zero `items_per_page`.
    /// Data-quality gaps in the hand-entered asset figures (buyer/seller
    /// split not summing to 100) are logged as warnings, not errors.
    pub fn build(self) -> Result<Homepage> {
        if self.config.items_per_page == 0 {
            return Err(HomepageError::InvalidConfig(
                "items_per_page must be at least 1".to_string(),
            ));
        }

        let assets = Catalog::new(self.assets.unwrap_or_else(defaults::market_assets))?;
        let categories = Catalog::new(self.categories.unwrap_or_else(defaults::market_categories))?;
        let testimonials = Catalog::new(self.testimonials.unwrap_or_else(defaults::testimonials))?;

        let timeframes = self.timeframes.unwrap_or_else(defaults::timeframes);
        let mut seen = HashSet::new();
        for tf in &timeframes {
            if !seen.insert(tf.as_str()) {
                return Err(HomepageError::InvalidCatalog(format!(
                    "duplicate timeframe '{tf}'"
                )));
            }
        }

        for asset in &assets {
            let split = asset.buyers + asset.sellers;
            if (split - 100.0).abs() > 0.01 {
                warn!(
                    "asset '{}': buyers + sellers = {split:.2}, expected 100",
                    asset.id
                );
            }
        }

        // The sample provider's tables honor the configured bucket counts.
        let provider: Box<dyn SeriesProvider> = match (self.provider, self.series_seed) {
            (Some(provider), _) => provider,
            (None, Some(seed)) => Box::new(SampleSeriesProvider::with_counts_seeded(
                &self.config.bucket_counts,
                seed,
            )),
            (None, None) => Box::new(SampleSeriesProvider::with_counts(
                &self.config.bucket_counts,
                &mut rand::thread_rng(),
            )),
        };

        Ok(Homepage {
            catalogs: Catalogs {
                assets,
                categories,
                timeframes,
                testimonials,
            },
            config: self.config,
            provider,
        })
    }
}

// ---------------------------------------------------------------------------
// Homepage
// ---------------------------------------------------------------------------

/// The homepage data core: immutable catalogs, fixed options, and the chart
/// series source, loaded once at startup.
///
/// Hands out session objects that borrow the catalogs and hold the
/// per-session selection state. Created via [`Homepage::builder()`].
pub struct Homepage {
    catalogs: Catalogs,
    config: WidgetConfig,
    provider: Box<dyn SeriesProvider>,
}

impl Homepage {
    /// Create a new builder for configuring the homepage.
    pub fn builder() -> HomepageBuilder {
        HomepageBuilder::default()
    }

    /// Start a market widget session with the default selections.
    pub fn market_session(&self) -> MarketSession<'_> {
        MarketSession::new(&self.catalogs, self.provider.as_ref())
    }

    /// Start a testimonial session with a fresh fair shuffle.
    pub fn testimonial_session(&self) -> TestimonialSession<'_> {
        self.testimonial_session_with(Box::new(FairShuffle::new()))
    }

    /// Start a testimonial session with an injected permutation strategy.
    pub fn testimonial_session_with(
        &self,
        shuffler: Box<dyn ShuffleStrategy>,
    ) -> TestimonialSession<'_> {
        TestimonialSession::new(
            &self.catalogs.testimonials,
            self.config.items_per_page,
            self.config.max_testimonial_len,
            shuffler,
        )
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn series_provider(&self) -> &dyn SeriesProvider {
        self.provider.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Homepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Homepage(assets={}, categories={}, timeframes={}, testimonials={})",
            self.catalogs.assets.len(),
            self.catalogs.categories.len(),
            self.catalogs.timeframes.len(),
            self.catalogs.testimonials.len()
        )
    }
}
