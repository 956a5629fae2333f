//! Domain models for the donor registry.

pub mod admin_user;
pub mod dashboard;
pub mod donor;
pub mod session;

pub use admin_user::AdminUser;
pub use dashboard::{BloodTypeCount, DashboardSummary};
pub use donor::{Donor, NewDonor};
pub use session::{CurrentAdmin, Flash, FlashLevel, keys as session_keys};
