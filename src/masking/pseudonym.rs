//! Per-run pseudonym registry
//!
//! Maps a normalized original value to a stable `"<Category><N>"` label. Each
//! category has its own lock, so columns of different categories never
//! contend and lookup-then-insert within a category is atomic.

use crate::domain::CellValue;
use crate::masking::models::PiiCategory;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct LabelMap {
    labels: HashMap<String, String>,
    assigned: usize,
}

impl LabelMap {
    fn label_for(&mut self, category: PiiCategory, key: String) -> String {
        if let Some(label) = self.labels.get(&key) {
            return label.clone();
        }
        self.assigned += 1;
        let label = format!("{}{}", category.label(), self.assigned);
        self.labels.insert(key, label.clone());
        label
    }
}

/// Registry shared by every column of a masking engine
#[derive(Debug)]
pub struct PseudonymRegistry {
    maps: HashMap<PiiCategory, Mutex<LabelMap>>,
}

impl PseudonymRegistry {
    pub fn new() -> Self {
        let maps = PiiCategory::PRIORITY
            .iter()
            .copied()
            .chain(std::iter::once(PiiCategory::Generic))
            .map(|category| (category, Mutex::new(LabelMap::default())))
            .collect();
        Self { maps }
    }

    /// Lock a category map; a poisoned map is still consistent and is reused
    fn lock(&self, category: PiiCategory) -> Option<MutexGuard<'_, LabelMap>> {
        self.maps
            .get(&category)
            .map(|map| map.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    /// Label for a cell, or `None` for missing cells
    pub fn pseudonymize(&self, category: PiiCategory, value: &CellValue) -> Option<String> {
        let key = value.normalized_key()?;
        let mut map = self.lock(category)?;
        Some(map.label_for(category, key))
    }

    /// Label for a raw string (trimmed and lower-cased before lookup)
    pub fn pseudonymize_str(&self, category: PiiCategory, value: &str) -> Option<String> {
        let key = value.trim().to_lowercase();
        let mut map = self.lock(category)?;
        Some(map.label_for(category, key))
    }

    /// Number of distinct values labelled so far in a category
    pub fn assigned(&self, category: PiiCategory) -> usize {
        self.lock(category).map(|map| map.assigned).unwrap_or(0)
    }
}

impl Default for PseudonymRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_labels_in_first_seen_order() {
        let registry = PseudonymRegistry::new();
        let labels: Vec<String> = ["Male", "Female", "Male"]
            .iter()
            .filter_map(|v| registry.pseudonymize_str(PiiCategory::Gender, v))
            .collect();
        assert_eq!(labels, vec!["Gender1", "Gender2", "Gender1"]);
    }

    #[test]
    fn test_normalization_collapses_case_and_whitespace() {
        let registry = PseudonymRegistry::new();
        let a = registry.pseudonymize(PiiCategory::Gender, &CellValue::from("Male"));
        let b = registry.pseudonymize(PiiCategory::Gender, &CellValue::from(" male "));
        assert_eq!(a, b);
        assert_eq!(a.as_deref(), Some("Gender1"));
        assert_eq!(registry.assigned(PiiCategory::Gender), 1);
    }

    #[test]
    fn test_categories_are_independent() {
        let registry = PseudonymRegistry::new();
        assert_eq!(
            registry.pseudonymize_str(PiiCategory::Religion, "Islam").as_deref(),
            Some("Religion1")
        );
        assert_eq!(
            registry.pseudonymize_str(PiiCategory::Race, "Islam").as_deref(),
            Some("Race1")
        );
        assert_eq!(
            registry.pseudonymize_str(PiiCategory::Religion, "Buddhism").as_deref(),
            Some("Religion2")
        );
    }

    #[test]
    fn test_non_text_values_are_coerced() {
        let registry = PseudonymRegistry::new();
        let a = registry.pseudonymize(PiiCategory::Race, &CellValue::Integer(1));
        let b = registry.pseudonymize(PiiCategory::Race, &CellValue::from("1"));
        assert_eq!(a, b);
        assert_eq!(registry.pseudonymize(PiiCategory::Race, &CellValue::Missing), None);
    }

    #[test]
    fn test_concurrent_use_assigns_each_value_once() {
        let registry = Arc::new(PseudonymRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for value in ["a", "b", "c", "d"] {
                        registry.pseudonymize_str(PiiCategory::Religion, value);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.assigned(PiiCategory::Religion), 4);
    }
}
