//! Admin user domain types.

use chrono::{DateTime, Utc};

use blood_donation_core::AdminUserId;

/// An administrator account (domain type).
///
/// The password hash is deliberately not part of this type; it is only read
/// by the repository method used to verify a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Login name.
    pub username: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
}
