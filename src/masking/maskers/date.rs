//! Date masker: parse, then regenerate

use crate::masking::generators;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Accepted input formats, tried in order
pub const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// Which window a regenerated date is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    /// 18 to 100 years before today
    Birth,
    /// After today, within this century
    Expiration,
}

impl DateKind {
    /// Draw a synthetic date of this kind
    pub fn generate<R: Rng>(&self, rng: &mut R, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Birth => generators::birth_date(rng, today),
            Self::Expiration => generators::expiration_date(rng, today),
        }
    }
}

/// Parse with the first matching accepted format
pub fn parse_date(value: &str) -> Option<(NaiveDate, &'static str)> {
    let trimmed = value.trim();
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(trimmed, format)
            .ok()
            .map(|date| (date, *format))
    })
}

/// Replace a parseable date with a synthetic one in the same format
///
/// Unparseable input is returned unchanged.
pub fn mask_date<R: Rng>(value: &str, kind: DateKind, rng: &mut R, today: NaiveDate) -> String {
    match parse_date(value) {
        Some((_, format)) => kind.generate(rng, today).format(format).to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_both_formats() {
        let (date, format) = parse_date("02/04/1990").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 4, 2).unwrap());
        assert_eq!(format, "%d/%m/%Y");

        let (date, format) = parse_date(" 1990-04-02 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 4, 2).unwrap());
        assert_eq!(format, "%Y-%m-%d");
    }

    #[test]
    fn test_unparseable_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        for value in ["", "yesterday", "1990/04/02", "31-12-1999", "13/13/2000"] {
            assert_eq!(mask_date(value, DateKind::Birth, &mut rng, today()), value);
        }
    }

    #[test]
    fn test_birth_date_keeps_format_and_window() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let masked = mask_date("02/04/1990", DateKind::Birth, &mut rng, today());
            let date = NaiveDate::parse_from_str(&masked, "%d/%m/%Y").unwrap();
            assert!(date <= NaiveDate::from_ymd_opt(2007, 6, 15).unwrap());
            assert!(date >= NaiveDate::from_ymd_opt(1925, 6, 15).unwrap());
        }
    }

    #[test]
    fn test_expiration_date_after_today() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let masked = mask_date("2030-01-31", DateKind::Expiration, &mut rng, today());
            let date = NaiveDate::parse_from_str(&masked, "%Y-%m-%d").unwrap();
            assert!(date > today());
            assert!(date <= NaiveDate::from_ymd_opt(2099, 12, 31).unwrap());
        }
    }
}
