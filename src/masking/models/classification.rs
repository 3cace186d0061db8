//! Column classification result

use super::category::PiiCategory;
use serde::{Deserialize, Serialize};

/// How a header matched its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Keyword is a literal substring of the header
    Substring,
    /// Short keyword equals a whole word of the header
    Token,
    /// Keyword scored above the category threshold
    Fuzzy,
    /// Nothing matched; the column is Generic
    Fallback,
}

/// Classification of one column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Header as given (not normalized)
    pub header: String,
    /// Winning category
    pub category: PiiCategory,
    /// Keyword that decided the match
    pub matched_keyword: Option<String>,
    /// Similarity score 0-100 (100 for substring/token matches, 0 for fallback)
    pub score: u8,
    /// How the match was made
    pub method: MatchMethod,
}

impl Classification {
    /// Classification for a header that matched nothing
    pub fn generic(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            category: PiiCategory::Generic,
            matched_keyword: None,
            score: 0,
            method: MatchMethod::Fallback,
        }
    }

    /// Classification for a header that matched a keyword
    pub fn matched(
        header: impl Into<String>,
        category: PiiCategory,
        keyword: impl Into<String>,
        score: u8,
        method: MatchMethod,
    ) -> Self {
        Self {
            header: header.into(),
            category,
            matched_keyword: Some(keyword.into()),
            score: score.min(100),
            method,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.category == PiiCategory::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_classification() {
        let c = Classification::generic("Notes");
        assert!(c.is_generic());
        assert_eq!(c.method, MatchMethod::Fallback);
        assert!(c.matched_keyword.is_none());
    }

    #[test]
    fn test_matched_clamps_score() {
        let c = Classification::matched("Salery", PiiCategory::Salary, "salary", 140, MatchMethod::Fuzzy);
        assert_eq!(c.score, 100);
        assert_eq!(c.matched_keyword.as_deref(), Some("salary"));
    }
}
