//! Keyword library for column classification

use crate::masking::models::PiiCategory;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Category definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordDefinition {
    /// Header keywords for this category
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Keywords that only match a whole word of the header
    #[serde(default)]
    pub whole_words: Vec<String>,
    /// Fuzzy match threshold (0-100); falls back to the library default
    pub threshold: Option<u8>,
}

/// Keyword library container
#[derive(Debug, Deserialize)]
struct KeywordLibrary {
    categories: HashMap<String, KeywordDefinition>,
}

/// Normalized keywords and threshold for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    pub category: PiiCategory,
    pub keywords: Vec<String>,
    /// Matched against header tokens only, never fuzzily
    pub whole_words: Vec<String>,
    pub threshold: u8,
}

/// Keyword sets held in classification priority order
#[derive(Debug, Clone)]
pub struct KeywordRegistry {
    sets: Vec<KeywordSet>,
}

impl KeywordRegistry {
    /// Load a keyword library from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P, default_threshold: u8) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read keyword library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content, default_threshold)
    }

    /// Build a registry from TOML content
    ///
    /// Fails on unknown categories, the `generic` category, empty keyword
    /// sets, blank keywords, multi-word `whole_words` entries and thresholds
    /// above 100. Categories missing
    /// from the library are never matched.
    pub fn from_toml(content: &str, default_threshold: u8) -> Result<Self> {
        let library: KeywordLibrary =
            toml::from_str(content).context("Failed to parse keyword library TOML")?;

        if default_threshold > 100 {
            anyhow::bail!("Fuzzy threshold must be between 0 and 100, got {default_threshold}");
        }

        let mut by_category: HashMap<PiiCategory, KeywordSet> = HashMap::new();

        for (name, def) in library.categories {
            let category = PiiCategory::from_key(&name)
                .with_context(|| format!("Unknown category in keyword library: {name}"))?;

            if category == PiiCategory::Generic {
                anyhow::bail!("The generic category cannot have keywords");
            }

            let threshold = def.threshold.unwrap_or(default_threshold);
            if threshold > 100 {
                anyhow::bail!(
                    "Threshold for category '{name}' must be between 0 and 100, got {threshold}"
                );
            }

            let keywords = normalize_keywords(&name, &def.keywords)?;
            let whole_words = normalize_keywords(&name, &def.whole_words)?;
            if let Some(word) = whole_words
                .iter()
                .find(|w| !w.chars().all(char::is_alphanumeric))
            {
                anyhow::bail!("Whole-word keyword '{word}' in category '{name}' must be a single word");
            }

            if keywords.is_empty() && whole_words.is_empty() {
                anyhow::bail!("Keyword set for category '{name}' is empty");
            }

            by_category.insert(
                category,
                KeywordSet {
                    category,
                    keywords,
                    whole_words,
                    threshold,
                },
            );
        }

        if by_category.is_empty() {
            anyhow::bail!("Keyword library defines no categories");
        }

        let sets = PiiCategory::PRIORITY
            .iter()
            .filter_map(|category| by_category.remove(category))
            .collect();

        Ok(Self { sets })
    }

    /// Built-in keyword library
    pub fn default_keywords(default_threshold: u8) -> Result<Self> {
        let default_toml = include_str!("../../../keywords/column_keywords.toml");
        Self::from_toml(default_toml, default_threshold)
    }

    /// Keyword sets in classification priority order
    pub fn sets(&self) -> &[KeywordSet] {
        &self.sets
    }

    /// Keyword set for a specific category
    pub fn set_for(&self, category: PiiCategory) -> Option<&KeywordSet> {
        self.sets.iter().find(|s| s.category == category)
    }
}

/// Trim, lower-case and deduplicate, rejecting blank entries
fn normalize_keywords(category: &str, raw: &[String]) -> Result<Vec<String>> {
    let mut keywords: Vec<String> = Vec::with_capacity(raw.len());
    for keyword in raw {
        let normalized = keyword.trim().to_lowercase();
        if normalized.is_empty() {
            anyhow::bail!("Blank keyword in category '{category}'");
        }
        if !keywords.contains(&normalized) {
            keywords.push(normalized);
        }
    }
    Ok(keywords)
}
