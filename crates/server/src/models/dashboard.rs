//! Admin dashboard aggregates.

use blood_donation_core::BloodType;

use super::Donor;

/// Number of donors with one blood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodTypeCount {
    pub blood_type: BloodType,
    pub count: usize,
}

/// Figures shown at the top of the admin dashboard.
///
/// Always computed from the current donor list; nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Number of registered donors.
    pub total_donors: usize,
    /// Number of distinct blood types among the donors.
    pub blood_type_count: usize,
    /// Per-type counts in [`BloodType::ALL`] order, zero counts included.
    pub by_blood_type: Vec<BloodTypeCount>,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_donors(donors: &[Donor]) -> Self {
        let by_blood_type: Vec<BloodTypeCount> = BloodType::ALL
            .into_iter()
            .map(|blood_type| BloodTypeCount {
                blood_type,
                count: donors.iter().filter(|d| d.blood_type == blood_type).count(),
            })
            .collect();

        Self {
            total_donors: donors.len(),
            blood_type_count: by_blood_type.iter().filter(|c| c.count > 0).count(),
            by_blood_type,
        }
    }
}
