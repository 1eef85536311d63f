//! Row models and DTOs, one module per entity.
//!
//! Blob columns (avatars, dog photos) are deliberately kept off the default
//! row structs so list queries never drag image bytes across the wire; the
//! dedicated `*Image`/`*Avatar` structs exist for the binary endpoints.

pub mod adoption_request;
pub mod dog;
pub mod favorite;
pub mod user;
