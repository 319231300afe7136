//! HTTP handlers, one module per resource.

pub mod auth;
pub mod banners;
pub mod bookings;
pub mod contacts;
pub mod gallery;
pub mod options;
pub mod services;
pub mod site;
