//! Donor domain types.

use chrono::{DateTime, Utc};

use blood_donation_core::{BloodType, DonorId, DonorName, PhoneNumber};

/// A registered donor (domain type).
///
/// Records are created once and never updated; an administrator may delete them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    /// Sequential donor ID.
    pub id: DonorId,
    /// Trimmed display name.
    pub name: DonorName,
    /// Normalized phone number, unique across donors.
    pub phone: PhoneNumber,
    /// Donor's blood type.
    pub blood_type: BloodType,
    /// When the donor registered.
    pub created_at: DateTime<Utc>,
}

impl Donor {
    /// Registration time formatted for display, e.g. `2025-03-01 14:05`.
    #[must_use]
    pub fn registered_at(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// A validated donor that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonor {
    pub name: DonorName,
    pub phone: PhoneNumber,
    pub blood_type: BloodType,
}
