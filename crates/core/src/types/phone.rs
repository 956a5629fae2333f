//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Digits, spaces and hyphens with an optional leading `+`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-]+$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input is empty or whitespace only.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains letters or symbols other than `+`, spaces and hyphens.
    #[error("phone number may only contain digits, spaces, hyphens and a leading +")]
    InvalidCharacters,
    /// The input is well formed but contains no digits.
    #[error("phone number must contain at least one digit")]
    NoDigits,
    /// The normalized number is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed normalized length.
        max: usize,
    },
}

/// A normalized phone number: ASCII digits with an optional leading `+`.
///
/// Raw input is validated first and only then normalized, so malformed
/// input is rejected instead of being coerced into a clean-looking number.
///
/// ## Examples
///
/// ```
/// use blood_donation_core::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+1 555-123-4567").unwrap();
/// assert_eq!(phone.as_str(), "+15551234567");
///
/// assert!(PhoneNumber::parse("555-CALL").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Maximum length of a normalized phone number.
    pub const MAX_LENGTH: usize = 20;

    /// Validate and normalize raw form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, contains characters
    /// other than digits, whitespace, hyphens and a single leading `+`,
    /// has no digits at all, or normalizes to more than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !Self::is_valid(trimmed) {
            return Err(PhoneError::InvalidCharacters);
        }

        let normalized = Self::normalize(trimmed);

        if !normalized.bytes().any(|b| b.is_ascii_digit()) {
            return Err(PhoneError::NoDigits);
        }

        if normalized.len() > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(normalized))
    }

    /// Returns `true` if the trimmed input matches `^\+?[0-9\s\-]+$`.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        PHONE_RE.is_match(s.trim())
    }

    /// Strip everything except ASCII digits and `+`.
    ///
    /// Only meaningful on input that passed [`Self::is_valid`], where the
    /// only `+` left is the leading one.
    #[must_use]
    pub fn normalize(s: &str) -> String {
        s.chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }

    /// Returns the normalized number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_international_format() {
        let phone = PhoneNumber::parse("+1 555-123-4567").unwrap();
        assert_eq!(phone.as_str(), "+15551234567");
    }

    #[test]
    fn test_parse_plain_digits() {
        let phone = PhoneNumber::parse("0612345678").unwrap();
        assert_eq!(phone.as_str(), "0612345678");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let phone = PhoneNumber::parse("  06 12 34 56 78  ").unwrap();
        assert_eq!(phone.as_str(), "0612345678");
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert_eq!(
            PhoneNumber::parse("555-CALL"),
            Err(PhoneError::InvalidCharacters)
        );
    }

    #[test]
    fn test_parse_rejects_symbols() {
        assert!(PhoneNumber::parse("(555) 123").is_err());
        assert!(PhoneNumber::parse("555.123.4567").is_err());
        assert!(PhoneNumber::parse("555#1").is_err());
    }

    #[test]
    fn test_parse_rejects_interior_plus() {
        assert!(PhoneNumber::parse("555+123").is_err());
        assert!(PhoneNumber::parse("++555").is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneError::Empty));
        assert_eq!(PhoneNumber::parse("   "), Err(PhoneError::Empty));
    }

    #[test]
    fn test_parse_rejects_separators_without_digits() {
        assert_eq!(PhoneNumber::parse("+ - -"), Err(PhoneError::NoDigits));
        assert_eq!(PhoneNumber::parse("---"), Err(PhoneError::NoDigits));
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits are not part of the accepted set
        assert!(PhoneNumber::parse("٠٥٥٥").is_err());
    }

    #[test]
    fn test_parse_too_long() {
        let long = "1".repeat(PhoneNumber::MAX_LENGTH + 1);
        assert!(matches!(
            PhoneNumber::parse(&long),
            Err(PhoneError::TooLong { .. })
        ));
        // Separators do not count towards the limit
        let spaced = "1 ".repeat(PhoneNumber::MAX_LENGTH);
        assert!(PhoneNumber::parse(&spaced).is_ok());
    }

    #[test]
    fn test_normalize_output_shape() {
        for raw in ["+1 555-123-4567", "0 1-2 3", "+44 20 7946 0958"] {
            assert!(PhoneNumber::is_valid(raw));
            let normalized = PhoneNumber::normalize(raw);
            let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
            assert!(!digits.is_empty());
            assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
