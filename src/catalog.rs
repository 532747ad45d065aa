//! Fixed, immutable, ordered catalogs.
//!
//! Every entity collection the homepage core consumes is a [`Catalog`]: an
//! ordered list loaded once at startup, indexed by a unique string id, and
//! never mutated afterwards. Sessions borrow catalogs; nothing is created or
//! destroyed at runtime.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;

use crate::defaults;
use crate::error::{HomepageError, Result};
use crate::models::{MarketAsset, MarketCategory, Testimonial};

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// An entity that can live in a [`Catalog`]: it exposes a unique id.
///
/// Id matching throughout the crate is exact string equality.
pub trait CatalogEntry {
    fn id(&self) -> &str;
}

impl CatalogEntry for MarketAsset {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogEntry for MarketCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogEntry for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// An ordered, immutable collection of entities with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog<T: CatalogEntry> {
    entries: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(entries: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id().to_string()) {
                return Err(HomepageError::InvalidCatalog(format!(
                    "duplicate id '{}'",
                    entry.id()
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Look up an entry by id (exact match).
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: CatalogEntry + DeserializeOwned> Catalog<T> {
    /// Load a catalog from a JSON array.
    ///
    /// This is the seam for replacing the built-in sample data with
    /// API-served catalogs.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<T> = serde_json::from_str(json)?;
        Self::new(entries)
    }
}

impl<T: CatalogEntry + Serialize> Catalog<T> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

impl<'a, T: CatalogEntry> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Catalogs -- The four input collections bundled together
// ---------------------------------------------------------------------------

/// The read-only input catalogs supplied at startup.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub assets: Catalog<MarketAsset>,
    pub categories: Catalog<MarketCategory>,
    /// Ordered timeframe ids (e.g. `"1d"`, `"1h"`).
    pub timeframes: Vec<String>,
    pub testimonials: Catalog<Testimonial>,
}

impl Catalogs {
    /// The built-in sample catalogs shipped with the homepage.
    pub fn sample() -> Self {
        Self {
            assets: Catalog::new(defaults::market_assets())
                .expect("sample asset catalog has unique ids"),
            categories: Catalog::new(defaults::market_categories())
                .expect("sample category catalog has unique ids"),
            timeframes: defaults::timeframes(),
            testimonials: Catalog::new(defaults::testimonials())
                .expect("sample testimonial catalog has unique ids"),
        }
    }
}
