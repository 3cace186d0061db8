//! Approximate string scoring for header matching
//!
//! Scores are on a 0-100 scale built on normalized Levenshtein similarity.

use strsim::normalized_levenshtein;

/// Whole-string similarity, 0-100
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Best similarity of `needle` against any window of `haystack`
///
/// Windows are one character shorter, equal to, or one character longer
/// than the needle, so a single dropped or doubled letter still aligns.
/// When the haystack is not longer than the needle the two strings are
/// compared whole, so a short header never scores 100 against a longer
/// keyword just by being contained in it.
pub fn partial_ratio(needle: &str, haystack: &str) -> u8 {
    let needle_chars: Vec<char> = needle.chars().collect();
    let haystack_chars: Vec<char> = haystack.chars().collect();

    if needle_chars.is_empty() || haystack_chars.is_empty() {
        return 0;
    }

    if needle_chars.len() >= haystack_chars.len() {
        return ratio(needle, haystack);
    }

    let shortest = needle_chars.len().saturating_sub(1).max(1);
    let longest = (needle_chars.len() + 1).min(haystack_chars.len());

    let mut best = 0;
    for width in shortest..=longest {
        for window in haystack_chars.windows(width) {
            let candidate: String = window.iter().collect();
            best = best.max(ratio(needle, &candidate));
            if best == 100 {
                return best;
            }
        }
    }
    best
}

/// Alphanumeric words of a header (`"customer_age (yrs)"` → customer, age, yrs)
pub fn tokens(header: &str) -> impl Iterator<Item = &str> {
    header
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}
