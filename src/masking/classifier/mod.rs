//! Column classification module
//!
//! Provides a trait-based classification interface and the keyword
//! implementation that maps column headers to PII categories.

pub mod fuzzy;
pub mod keyword;
pub mod keywords;

use crate::masking::models::Classification;

/// Trait for column header classifiers
pub trait ColumnClassifier: Send + Sync {
    /// Classify a single header
    fn classify(&self, header: &str) -> Classification;

    /// Classify several headers, preserving their order
    fn classify_all(&self, headers: &[&str]) -> Vec<Classification> {
        headers.iter().map(|h| self.classify(h)).collect()
    }
}
