//! User entity model and DTOs.

use pawhome_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// User row from the `users` table, without the avatar bytes.
///
/// Contains the password hash -- never serialize this to API responses
/// directly. Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// Role name, one of the constants in `pawhome_core::roles`.
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Computed in SQL; true when a non-empty avatar blob is stored.
    pub has_avatar: bool,
    pub created_at: Timestamp,
}

/// Stored avatar blob for `GET /avatars/{user_id}`.
#[derive(Debug, FromRow)]
pub struct UserAvatar {
    pub avatar: Option<Vec<u8>>,
    pub avatar_content_type: Option<String>,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Link to the avatar binary endpoint, present only when one is stored.
    pub avatar_url: Option<String>,
    pub role: String,
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// DTO for the profile update write. All fields overwrite the stored row.
#[derive(Debug)]
pub struct UpdateProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}
