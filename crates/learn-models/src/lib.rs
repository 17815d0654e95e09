//! # learn-models
//!
//! Data models for the Learn public REST API.
//!
//! Resource types mirror the JSON the server returns. Request bodies
//! (`Create*Body`, `Update*Body`, ...) are separate types whose fields are all
//! optional: only what a caller sets is serialized, and validation is left to
//! the server.
//!
//! ## Usage
//!
//! ```ignore
//! use learn_models::terms::{CreateTermBody, Term};
//! use learn_models::common::Paged;
//!
//! let body = CreateTermBody::new().external_id("FA25").name("Fall 2025");
//! let page: Paged<Term> = serde_json::from_str(&response_json)?;
//! ```

#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod announcements;
pub mod attendance;
pub mod common;
pub mod courses;
pub mod data_sources;
pub mod grading_periods;
pub mod groups;
pub mod hierarchy;
pub mod memberships;
pub mod oauth;
pub mod roles;
pub mod system;
pub mod terms;
pub mod uploads;
pub mod users;

// Re-export common types for convenience
pub use common::*;
