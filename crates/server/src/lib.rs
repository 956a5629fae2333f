//! Blood donation registry web server.
//!
//! Visitors register as donors through a public form and can browse the donor
//! list; an administrator signs in to view aggregates and remove records.
//!
//! The binary in `main.rs` wires configuration, logging and Sentry around
//! [`app::build_router`]; everything else lives in this library so the
//! integration tests can drive the same router in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod messages;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
