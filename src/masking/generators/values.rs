//! Synthetic dates, numbers and free text

use super::pick;
use crate::masking::maskers::{AGE_BUCKET, SALARY_BUCKET};
use chrono::{Days, Months, NaiveDate};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;

const MIN_ADULT_YEARS: u32 = 18;
const MAX_AGE_YEARS: u32 = 100;

/// Fallback span for expiration dates once the century has run out
const EXPIRATION_FALLBACK_DAYS: u64 = 3650;

pub const HEALTH_STATUSES: [&str; 8] = [
    "Healthy",
    "Diabetes",
    "Hypertension",
    "Asthma",
    "Heart Disease",
    "Allergy",
    "Arthritis",
    "Migraine",
];

/// Uniform day in `[start, end]`
fn date_between<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    if end <= start {
        return start;
    }
    let span = (end - start).num_days().unsigned_abs();
    let offset = rng.gen_range(0..=span);
    start.checked_add_days(Days::new(offset)).unwrap_or(start)
}

/// Birth date of someone between 18 and 100 years old on `today`
pub fn birth_date<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let latest = today
        .checked_sub_months(Months::new(MIN_ADULT_YEARS * 12))
        .unwrap_or(today);
    let earliest = today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(latest);
    date_between(rng, earliest, latest)
}

/// A date after `today`, no later than 2099-12-31
pub fn expiration_date<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let start = today.succ_opt().unwrap_or(today);
    let end = NaiveDate::from_ymd_opt(2099, 12, 31)
        .filter(|end| *end > start)
        .or_else(|| start.checked_add_days(Days::new(EXPIRATION_FALLBACK_DAYS)))
        .unwrap_or(start);
    date_between(rng, start, end)
}

pub fn fake_age<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(AGE_BUCKET.min..=AGE_BUCKET.max)
}

pub fn fake_salary<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(SALARY_BUCKET.min..=SALARY_BUCKET.max)
}

pub fn health_status<R: Rng>(rng: &mut R) -> String {
    pick(rng, &HEALTH_STATUSES).to_string()
}

/// Single lorem word
pub fn short_text<R: Rng>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// 1 to 100
pub fn small_integer<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(1..=100)
}

/// 0.00 to 100.00, two decimals
pub fn small_float<R: Rng>(rng: &mut R) -> f64 {
    let hundredths: i64 = rng.gen_range(0..=10_000);
    hundredths as f64 / 100.0
}
