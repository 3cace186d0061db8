//! Synthetic value generators
//!
//! Every generator draws from the random source it is given and has no other
//! side effects. Date generators also take `today` so callers (and tests)
//! control the reference date.

pub mod identity;
pub mod location;
pub mod values;

pub use identity::{email_address, national_id, person_name, phone_number, PHONE_AREA_CODES};
pub use location::{place_of_birth, postal_address, STATES};
pub use values::{
    birth_date, expiration_date, fake_age, fake_salary, health_status, short_text,
    small_float, small_integer, HEALTH_STATUSES,
};

use rand::Rng;

/// Uniform pick from a non-empty constant list
pub(crate) fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}
