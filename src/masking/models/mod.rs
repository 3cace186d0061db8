//! Masking data models

pub mod category;
pub mod classification;

pub use category::PiiCategory;
pub use classification::{Classification, MatchMethod};
