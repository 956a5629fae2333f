//! Donor name type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Letters from the Arabic block (U+0600-U+06FF), ASCII Latin letters and whitespace.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{0600}-\x{06FF}a-zA-Z\s]+$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`DonorName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The input is empty or whitespace only.
    #[error("name cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains digits, punctuation or symbols.
    #[error("name may only contain Arabic or Latin letters and spaces")]
    InvalidCharacters,
}

/// A donor's display name.
///
/// ## Constraints
///
/// - Leading and trailing whitespace is trimmed before any check
/// - Must not be empty after trimming
/// - At most 100 characters
/// - Only Arabic letters, Latin `a-z`/`A-Z` and whitespace
///
/// ## Examples
///
/// ```
/// use blood_donation_core::DonorName;
///
/// assert!(DonorName::parse("John Smith").is_ok());
/// assert!(DonorName::parse("محمد علي").is_ok());
///
/// assert!(DonorName::parse("John3").is_err());
/// assert!(DonorName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DonorName(String);

impl DonorName {
    /// Maximum length of a name, in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Parse a `DonorName` from raw form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`] characters, or contains anything other than
    /// Arabic/Latin letters and whitespace.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !NAME_RE.is_match(trimmed) {
            return Err(NameError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns `true` if the input would parse as a valid name.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DonorName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DonorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DonorName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DonorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
