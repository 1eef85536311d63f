//! Request handlers, one module per resource.
//!
//! Handlers own the request/response DTOs and the service logic (existence
//! checks, password verification, the status-transition rule) and delegate
//! row access to the repositories in `pawhome_db`, mapping errors via
//! [`crate::error::AppError`].

pub mod adoption_requests;
pub mod auth;
pub mod avatars;
pub mod dogs;
pub mod favorites;
pub mod users;
