//! Value maskers
//!
//! Shape-preserving transformations, one per primitive value shape. Text
//! maskers are pure and live on [`Masker`]; the date and bucket maskers draw
//! from a caller-supplied random source.
//!
//! Every masker returns the input unchanged when it does not have the shape
//! the masker expects.

pub mod bucket;
pub mod contact;
pub mod date;
pub mod text;

pub use bucket::{bucket_range, format_range, BucketSpec, AGE_BUCKET, SALARY_BUCKET};
pub use date::{mask_date, parse_date, DateKind, DATE_FORMATS};

/// Default character used to hide characters
pub const DEFAULT_MASK_CHAR: char = '*';

/// Pure text maskers sharing one mask character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Masker {
    mask_char: char,
}

impl Masker {
    pub fn new(mask_char: char) -> Self {
        Self { mask_char }
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    fn fill(&self, count: usize) -> String {
        std::iter::repeat(self.mask_char).take(count).collect()
    }
}

impl Default for Masker {
    fn default() -> Self {
        Self::new(DEFAULT_MASK_CHAR)
    }
}
