//! ABO/Rh blood type enumeration.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of the eight blood types.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid blood type: {0}")]
pub struct BloodTypeError(pub String);

/// Blood type of a donor.
///
/// Serialized and stored using the conventional notation (`"A+"`, `"AB-"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodType {
    /// All blood types, in the order they are offered on the donation form.
    pub const ALL: [Self; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::OPositive,
        Self::ONegative,
        Self::AbPositive,
        Self::AbNegative,
    ];

    /// Returns the conventional notation, e.g. `"AB+"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
        }
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BloodType {
    type Err = BloodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|bt| bt.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BloodTypeError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_all_variants() {
        for bt in BloodType::ALL {
            assert_eq!(bt.as_str().parse::<BloodType>().unwrap(), bt);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("ab-".parse::<BloodType>().unwrap(), BloodType::AbNegative);
        assert_eq!(" o+ ".parse::<BloodType>().unwrap(), BloodType::OPositive);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("C+".parse::<BloodType>().is_err());
        assert!("A".parse::<BloodType>().is_err());
        assert!("".parse::<BloodType>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BloodType::AbPositive.to_string(), "AB+");
    }

    #[test]
    fn test_serde_uses_notation() {
        let json = serde_json::to_string(&BloodType::ONegative).unwrap();
        assert_eq!(json, "\"O-\"");
        let parsed: BloodType = serde_json::from_str("\"B+\"").unwrap();
        assert_eq!(parsed, BloodType::BPositive);
    }
}
