//! Blood Donation Core - Shared types library.
//!
//! This crate provides the validated domain types used by every component
//! of the registry:
//! - `server` - Public donation site and admin panel
//! - `cli` - Command-line tools for migrations and admin accounts
//!
//! # Architecture
//!
//! The core crate contains only types and validation rules - no I/O, no
//! database access, no HTTP. Anything that reaches the donor table has
//! passed through one of these constructors first.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, donor names, phone numbers and blood types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
