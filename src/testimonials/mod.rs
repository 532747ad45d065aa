//! Testimonial shuffle, pagination, and expand/collapse state.

pub mod session;
pub mod shuffle;

pub use session::{PageDirection, TestimonialSession};
pub use shuffle::{CatalogOrder, FairShuffle, ShuffleStrategy};
