pub mod asset;
pub mod chart;
pub mod testimonial;

pub use asset::*;
pub use chart::*;
pub use testimonial::*;
