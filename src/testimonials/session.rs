//! The testimonial carousel session: one shuffle per session, fixed-size
//! pages with bidirectional navigation, and per-card expand toggles.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::{Testimonial, TestimonialCard, TestimonialPage};
use crate::testimonials::shuffle::ShuffleStrategy;

pub const ELLIPSIS: &str = "...";

/// Direction for page navigation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

// ---------------------------------------------------------------------------
// TestimonialSession
// ---------------------------------------------------------------------------

/// Per-session testimonial state.
///
/// The permutation of the catalog is computed lazily on first access and
/// cached for the session's lifetime; page changes and expand toggles never
/// reshuffle. [`reset_order`](Self::reset_order) is the only way to draw a
/// new permutation.
pub struct TestimonialSession<'a> {
    catalog: &'a Catalog<Testimonial>,
    items_per_page: usize,
    max_len: usize,
    shuffler: Box<dyn ShuffleStrategy>,
    order: Option<Vec<usize>>,
    current_page: usize,
    expanded: HashMap<String, bool>,
}

impl<'a> TestimonialSession<'a> {
    /// `items_per_page` must be non-zero (enforced by the homepage builder).
    pub fn new(
        catalog: &'a Catalog<Testimonial>,
        items_per_page: usize,
        max_len: usize,
        shuffler: Box<dyn ShuffleStrategy>,
    ) -> Self {
        Self {
            catalog,
            items_per_page,
            max_len,
            shuffler,
            order: None,
            current_page: 0,
            expanded: HashMap::new(),
        }
    }

    // -- Events -------------------------------------------------------------

    /// Move one page in `direction`; out-of-range moves are ignored, matching
    /// the disabled nav buttons.
    pub fn go_to_page(&mut self, direction: PageDirection) {
        match direction {
            PageDirection::Next => {
                if self.can_next() {
                    self.current_page += 1;
                }
            }
            PageDirection::Previous => {
                if self.can_prev() {
                    self.current_page -= 1;
                }
            }
        }
    }

    /// Toggle the expanded/collapsed flag for one testimonial, independent of
    /// every other card's state.
    pub fn toggle_expand(&mut self, testimonial_id: &str) {
        let entry = self.expanded.entry(testimonial_id.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Discard the cached permutation; the next page access draws a fresh one.
    pub fn reset_order(&mut self) {
        self.order = None;
    }

    // -- Outputs ------------------------------------------------------------

    pub fn page_count(&self) -> usize {
        self.catalog.len().div_ceil(self.items_per_page)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn can_next(&self) -> bool {
        self.current_page + 1 < self.page_count()
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 0
    }

    /// The current page slice of the session permutation, with truncation and
    /// expand state applied per card.
    pub fn page(&mut self) -> TestimonialPage {
        let page_count = self.page_count();
        // Conceptual clamp; navigation never leaves the range, but a
        // shrunk custom catalog could.
        if page_count > 0 && self.current_page >= page_count {
            self.current_page = page_count - 1;
        }

        self.ensure_order();

        let start = self.current_page * self.items_per_page;
        let end = (start + self.items_per_page).min(self.catalog.len());

        let entries = self.catalog.entries();
        let order = self.order.as_deref().unwrap_or(&[]);

        let cards = order[start..end]
            .iter()
            .map(|&idx| {
                let t = &entries[idx];
                let is_expanded = self.expanded.get(&t.id).copied().unwrap_or(false);
                let (body, truncatable) = display_body(&t.review, self.max_len, is_expanded);
                TestimonialCard {
                    id: t.id.clone(),
                    body,
                    expanded: is_expanded,
                    truncatable,
                    name: t.name.clone(),
                    initials: t.initials.clone(),
                    icon: t.icon,
                }
            })
            .collect();

        TestimonialPage {
            cards,
            page: self.current_page,
            page_count,
            can_next: self.can_next(),
            can_prev: self.can_prev(),
        }
    }

    fn ensure_order(&mut self) {
        if self.order.is_none() {
            self.order = Some(self.shuffler.permutation(self.catalog.len()));
        }
    }
}

// ---------------------------------------------------------------------------
// Truncation
// ---------------------------------------------------------------------------

/// The displayed body and whether the review is long enough to need a
/// read-more toggle. Truncation counts characters, never splitting a
/// multi-byte sequence.
fn display_body(review: &str, max_len: usize, expanded: bool) -> (String, bool) {
    let truncatable = review.chars().count() > max_len;
    if expanded || !truncatable {
        return (review.to_string(), truncatable);
    }

    let mut body: String = review.chars().take(max_len).collect();
    body.push_str(ELLIPSIS);
    (body, truncatable)
}
