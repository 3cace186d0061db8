//! PII category data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified meaning of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Person names (full, first, last)
    Name,
    /// Postal or residential address
    Address,
    /// Email address
    Email,
    /// Telephone or mobile number
    Phone,
    /// National identity card / passport style identifiers
    NationalId,
    /// Age in years
    Age,
    /// Salary or income
    Salary,
    /// Date of birth
    BirthDate,
    /// Document or card expiry date
    ExpirationDate,
    /// Place of birth, home state or city
    PlaceOfBirth,
    /// Gender or sex
    Gender,
    /// Religion or faith
    Religion,
    /// Race or ethnicity
    Race,
    /// Health or medical condition
    HealthStatus,
    /// Payment card number
    CreditCard,
    /// No category matched
    Generic,
}

impl PiiCategory {
    /// Classification precedence, most specific first. `Generic` is the
    /// fallback and is never tested.
    pub const PRIORITY: [PiiCategory; 15] = [
        PiiCategory::Race,
        PiiCategory::Salary,
        PiiCategory::Religion,
        PiiCategory::HealthStatus,
        PiiCategory::Gender,
        PiiCategory::PlaceOfBirth,
        PiiCategory::BirthDate,
        PiiCategory::ExpirationDate,
        PiiCategory::Phone,
        PiiCategory::Name,
        PiiCategory::NationalId,
        PiiCategory::Email,
        PiiCategory::Address,
        PiiCategory::Age,
        PiiCategory::CreditCard,
    ];

    /// Human-readable label, also used as the pseudonym prefix (`Gender1`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::NationalId => "NationalID",
            Self::Age => "Age",
            Self::Salary => "Salary",
            Self::BirthDate => "BirthDate",
            Self::ExpirationDate => "ExpirationDate",
            Self::PlaceOfBirth => "PlaceOfBirth",
            Self::Gender => "Gender",
            Self::Religion => "Religion",
            Self::Race => "Race",
            Self::HealthStatus => "HealthStatus",
            Self::CreditCard => "CreditCard",
            Self::Generic => "Generic",
        }
    }

    /// Key used in keyword library files
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::NationalId => "national_id",
            Self::Age => "age",
            Self::Salary => "salary",
            Self::BirthDate => "birth_date",
            Self::ExpirationDate => "expiration_date",
            Self::PlaceOfBirth => "place_of_birth",
            Self::Gender => "gender",
            Self::Religion => "religion",
            Self::Race => "race",
            Self::HealthStatus => "health_status",
            Self::CreditCard => "credit_card",
            Self::Generic => "generic",
        }
    }

    /// Parse a keyword library key (case-insensitive, a few aliases accepted)
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Some(Self::Name),
            "address" => Some(Self::Address),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "national_id" | "nationalid" | "ic" => Some(Self::NationalId),
            "age" => Some(Self::Age),
            "salary" => Some(Self::Salary),
            "birth_date" | "birthdate" | "dob" => Some(Self::BirthDate),
            "expiration_date" | "expiry_date" => Some(Self::ExpirationDate),
            "place_of_birth" | "placeofbirth" => Some(Self::PlaceOfBirth),
            "gender" => Some(Self::Gender),
            "religion" => Some(Self::Religion),
            "race" | "ethnicity" => Some(Self::Race),
            "health_status" | "health" => Some(Self::HealthStatus),
            "credit_card" | "creditcard" => Some(Self::CreditCard),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_excludes_generic() {
        assert!(!PiiCategory::PRIORITY.contains(&PiiCategory::Generic));
        assert_eq!(PiiCategory::PRIORITY[0], PiiCategory::Race);
    }

    #[test]
    fn test_key_round_trip_for_every_category() {
        for category in PiiCategory::PRIORITY {
            assert_eq!(PiiCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(PiiCategory::from_key("Birth-Date"), Some(PiiCategory::BirthDate));
        assert_eq!(PiiCategory::from_key("unknown"), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(PiiCategory::NationalId.label(), "NationalID");
        assert_eq!(PiiCategory::Gender.to_string(), "Gender");
    }
}
