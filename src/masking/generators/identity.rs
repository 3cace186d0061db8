//! Person-level synthetic identities

use super::{pick, values::birth_date};
use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

/// Mobile prefixes used as the `AAA` part of generated phone numbers
pub const PHONE_AREA_CODES: [&str; 9] = [
    "010", "011", "012", "013", "014", "016", "017", "018", "019",
];

/// Highest two-digit region code in a generated national ID
const MAX_REGION_CODE: u32 = 14;

/// "First Last"
pub fn person_name<R: Rng>(rng: &mut R) -> String {
    let first: String = FirstName().fake_with_rng(rng);
    let last: String = LastName().fake_with_rng(rng);
    format!("{first} {last}")
}

/// Address on a reserved example domain
pub fn email_address<R: Rng>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

/// `(AAA)-NNNNNNN`
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let area = pick(rng, &PHONE_AREA_CODES);
    let subscriber: u32 = rng.gen_range(0..=9_999_999);
    format!("({area})-{subscriber:07}")
}

/// `YYMMDD-SS-NNNN` from a random adult birth date, region 01-14 and a
/// four-digit sequence
pub fn national_id<R: Rng>(rng: &mut R, today: NaiveDate) -> String {
    let born = birth_date(rng, today);
    let region: u32 = rng.gen_range(1..=MAX_REGION_CODE);
    let sequence: u32 = rng.gen_range(0..=9999);
    format!("{}-{region:02}-{sequence:04}", born.format("%y%m%d"))
}
