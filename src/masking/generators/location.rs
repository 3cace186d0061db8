//! Synthetic places

use super::pick;
use fake::faker::address::en::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::Fake;
use rand::Rng;

/// States and federal territories used for place-of-birth values
pub const STATES: [&str; 16] = [
    "Johor",
    "Kedah",
    "Kelantan",
    "Melaka",
    "Negeri Sembilan",
    "Pahang",
    "Perak",
    "Perlis",
    "Pulau Pinang",
    "Sabah",
    "Sarawak",
    "Selangor",
    "Terengganu",
    "Kuala Lumpur",
    "Labuan",
    "Putrajaya",
];

/// Three-line street address
///
/// The street line carries digits and the city line does not, which is the
/// shape the address masker expects.
pub fn postal_address<R: Rng>(rng: &mut R) -> String {
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    let state: String = StateName().fake_with_rng(rng);
    format!("{building} {street}\n{city}\n{zip} {state}")
}

pub fn place_of_birth<R: Rng>(rng: &mut R) -> String {
    pick(rng, &STATES).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_postal_address_is_multiline() {
        let mut rng = StdRng::seed_from_u64(21);
        let address = postal_address(&mut rng);
        let lines: Vec<&str> = address.lines().collect();
        assert_eq!(lines.len(), 3, "unexpected address {address:?}");
        assert!(lines[0].chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_place_of_birth_from_list() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let place = place_of_birth(&mut rng);
            assert!(STATES.contains(&place.as_str()));
        }
    }
}
