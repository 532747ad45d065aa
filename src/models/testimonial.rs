use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Testimonial -- One catalog entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub review: String,
    pub name: String,
    pub initials: String,
    pub icon: TestimonialIcon,
}

/// Icon category rendered next to the author name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialIcon {
    Headphone,
    Email,
    Earth,
}

// ---------------------------------------------------------------------------
// TestimonialCard -- One rendered card on the current page
// ---------------------------------------------------------------------------

/// A testimonial prepared for display: `body` is the review text, truncated
/// with an ellipsis when it exceeds the configured length and the card is not
/// expanded. `truncatable` tells the renderer whether to show a
/// read-more/read-less toggle at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialCard {
    pub id: String,
    pub body: String,
    pub expanded: bool,
    pub truncatable: bool,
    pub name: String,
    pub initials: String,
    pub icon: TestimonialIcon,
}

// ---------------------------------------------------------------------------
// TestimonialPage -- The current page slice plus nav state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPage {
    pub cards: Vec<TestimonialCard>,
    /// Zero-based index of the current page.
    pub page: usize,
    pub page_count: usize,
    pub can_next: bool,
    pub can_prev: bool,
}
