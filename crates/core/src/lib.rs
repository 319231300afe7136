//! Domain logic for the Velour nail-studio platform.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API server, and any future CLI tooling. It holds
//! the shared id/timestamp types, the domain error type, and per-domain
//! constants plus validation functions.

pub mod booking;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod roles;
pub mod site;
pub mod types;
