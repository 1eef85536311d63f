//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260701000001_create_users_table.sql`.

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";
