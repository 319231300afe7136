//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod banner;
pub mod booking;
pub mod business_info;
pub mod contact;
pub mod gallery_item;
pub mod hero_settings;
pub mod option_item;
pub mod service;
pub mod session;
pub mod user;
