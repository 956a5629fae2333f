//! Core types for the blood donation registry.
//!
//! This module provides type-safe wrappers for the donor record fields.

pub mod blood_type;
pub mod id;
pub mod name;
pub mod phone;

pub use blood_type::{BloodType, BloodTypeError};
pub use id::*;
pub use name::{DonorName, NameError};
pub use phone::{PhoneError, PhoneNumber};
