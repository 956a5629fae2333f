//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Admin password authentication and account creation
//! - `donors` - Donor registration, listing and removal

pub mod auth;
pub mod donors;

pub use auth::{AuthError, AuthService};
pub use donors::{DonorError, DonorService};
