//! Role name constants shared by auth, RBAC extractors, and seeds.

/// Full access: manage bookings, catalog, content, and staff accounts.
pub const ROLE_ADMIN: &str = "admin";

/// Day-to-day access: manage bookings and contact inquiries only.
pub const ROLE_STAFF: &str = "staff";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_STAFF];
