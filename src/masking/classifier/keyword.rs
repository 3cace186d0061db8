//! Keyword-based column classifier

use super::fuzzy::{partial_ratio, tokens};
use super::keywords::{KeywordRegistry, KeywordSet};
use super::ColumnClassifier;
use crate::masking::models::{Classification, MatchMethod};
use anyhow::Result;
use std::sync::Arc;

/// Keywords this short (and purely alphanumeric) only match whole header words
const SHORT_KEYWORD_LEN: usize = 3;

/// Classifies headers against keyword sets in priority order
///
/// Classification runs two passes over the sets. The literal pass takes the
/// first category with a keyword contained in the normalized header, or a
/// whole-word keyword equal to one of its tokens. Only when no category
/// matches literally does the fuzzy pass take the first category whose best
/// partial similarity is strictly above that set's threshold.
pub struct KeywordClassifier {
    registry: Arc<KeywordRegistry>,
}

impl KeywordClassifier {
    /// Create a classifier over the built-in keyword library
    pub fn new(default_threshold: u8) -> Result<Self> {
        let registry = KeywordRegistry::default_keywords(default_threshold)?;
        Ok(Self::with_registry(registry))
    }

    /// Create a classifier over a custom keyword registry
    pub fn with_registry(registry: KeywordRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    fn is_short(keyword: &str) -> bool {
        keyword.chars().count() <= SHORT_KEYWORD_LEN && keyword.chars().all(char::is_alphanumeric)
    }

    fn literal_match(set: &KeywordSet, header: &str) -> Option<(String, u8, MatchMethod)> {
        let has_token = |word: &str| tokens(header).any(|t| t == word);

        for keyword in &set.keywords {
            if Self::is_short(keyword) {
                if has_token(keyword) {
                    return Some((keyword.clone(), 100, MatchMethod::Token));
                }
            } else if header.contains(keyword.as_str()) {
                return Some((keyword.clone(), 100, MatchMethod::Substring));
            }
        }

        set.whole_words
            .iter()
            .find(|word| has_token(word))
            .map(|word| (word.clone(), 100, MatchMethod::Token))
    }

    fn fuzzy_match(set: &KeywordSet, header: &str) -> Option<(String, u8, MatchMethod)> {
        set.keywords
            .iter()
            .filter(|k| !Self::is_short(k))
            .map(|k| (k, partial_ratio(k, header)))
            .filter(|(_, score)| *score > set.threshold)
            .max_by_key(|(_, score)| *score)
            .map(|(k, score)| (k.clone(), score, MatchMethod::Fuzzy))
    }
}

impl ColumnClassifier for KeywordClassifier {
    fn classify(&self, header: &str) -> Classification {
        let normalized = header.trim().to_lowercase();
        if normalized.is_empty() {
            return Classification::generic(header);
        }

        let sets = self.registry.sets();
        let found = sets
            .iter()
            .find_map(|set| Self::literal_match(set, &normalized).map(|m| (set.category, m)))
            .or_else(|| {
                sets.iter()
                    .find_map(|set| Self::fuzzy_match(set, &normalized).map(|m| (set.category, m)))
            });

        if let Some((category, (keyword, score, method))) = found {
            tracing::trace!(
                header = %header,
                category = %category,
                keyword = %keyword,
                score,
                "Header classified"
            );
            return Classification::matched(header, category, keyword, score, method);
        }

        Classification::generic(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masking::models::PiiCategory;

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::new(80).unwrap()
    }

    #[test]
    fn test_exact_headers() {
        let c = classifier();
        assert_eq!(c.classify("Email").category, PiiCategory::Email);
        assert_eq!(c.classify("Age").category, PiiCategory::Age);
        assert_eq!(c.classify("Gender").category, PiiCategory::Gender);
        assert_eq!(c.classify("Full Name").category, PiiCategory::Name);
        assert_eq!(c.classify("Notes").category, PiiCategory::Generic);
    }

    #[test]
    fn test_substring_method() {
        let result = classifier().classify("Customer Email Address");
        assert_eq!(result.category, PiiCategory::Email);
        assert_eq!(result.method, MatchMethod::Substring);
        assert_eq!(result.matched_keyword.as_deref(), Some("email"));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_short_keyword_needs_whole_word() {
        let c = classifier();
        let age = c.classify("customer_age");
        assert_eq!(age.category, PiiCategory::Age);
        assert_eq!(age.method, MatchMethod::Token);

        assert_eq!(c.classify("Percentage").category, PiiCategory::Generic);
        assert_eq!(c.classify("Payment Method").category, PiiCategory::Generic);
    }

    #[test]
    fn test_fuzzy_match() {
        let result = classifier().classify("Salery");
        assert_eq!(result.category, PiiCategory::Salary);
        assert_eq!(result.method, MatchMethod::Fuzzy);
        assert!(result.score > 80);
    }

    #[test]
    fn test_blank_header_is_generic() {
        let c = classifier();
        assert!(c.classify("").is_generic());
        assert!(c.classify("   \t").is_generic());
    }

    #[test]
    fn test_literal_keyword_beats_earlier_fuzzy_match() {
        // "rd number" is one edit away from the national ID keyword "id number"
        for header in ["Card Number", "Credit Card Number"] {
            let result = classifier().classify(header);
            assert_eq!(result.category, PiiCategory::CreditCard, "{header}");
            assert_eq!(result.method, MatchMethod::Substring);
        }
    }

    #[test]
    fn test_whole_word_keywords() {
        let c = classifier();
        let state = c.classify("Home State");
        assert_eq!(state.category, PiiCategory::PlaceOfBirth);
        assert_eq!(state.method, MatchMethod::Token);

        assert_eq!(c.classify("Statement").category, PiiCategory::Generic);
        assert_eq!(c.classify("Estate").category, PiiCategory::Generic);
        assert_eq!(c.classify("Electricity").category, PiiCategory::Generic);
    }

    #[test]
    fn test_priority_resolves_overlap() {
        // "state" is both a place-of-birth and an address keyword
        assert_eq!(classifier().classify("State").category, PiiCategory::PlaceOfBirth);
        // "place of birth" must not be read as a birth date
        assert_eq!(
            classifier().classify("Place of Birth").category,
            PiiCategory::PlaceOfBirth
        );
        assert_eq!(
            classifier().classify("Date of Birth").category,
            PiiCategory::BirthDate
        );
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let results = classifier().classify_all(&["Phone", "Notes", "Race"]);
        let categories: Vec<PiiCategory> = results.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![PiiCategory::Phone, PiiCategory::Generic, PiiCategory::Race]
        );
        assert_eq!(results[0].header, "Phone");
    }

    #[test]
    fn test_custom_registry() {
        let registry = KeywordRegistry::from_toml(
            "[categories.religion]\nkeywords = [\"kepercayaan\"]\n",
            80,
        )
        .unwrap();
        let c = KeywordClassifier::with_registry(registry);
        assert_eq!(c.classify("Kepercayaan").category, PiiCategory::Religion);
        assert_eq!(c.classify("Email").category, PiiCategory::Generic);
    }
}
