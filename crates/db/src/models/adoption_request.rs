//! Adoption request entity model and DTOs.

use pawhome_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Adoption request row from the `adoption_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdoptionRequest {
    pub id: DbId,
    pub dog_id: DbId,
    pub user_id: DbId,
    /// `PENDING`, `APPROVED`, or `REJECTED`.
    pub status: String,
    pub message: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub household_members: Option<i32>,
    pub has_other_pets: Option<bool>,
    pub pet_experience: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Adoption request joined with dog and applicant-user summaries.
///
/// Result row of the detail JOIN in `AdoptionRequestRepo`; shaped into the
/// API response DTO by the handler layer.
#[derive(Debug, Clone, FromRow)]
pub struct AdoptionRequestDetail {
    pub id: DbId,
    pub dog_id: DbId,
    pub dog_name: String,
    pub dog_breed: String,
    pub dog_has_image: bool,
    /// External image URL from the dog row (not the binary endpoint link).
    pub dog_image_url: Option<String>,
    pub user_id: DbId,
    pub username: String,
    pub user_email: String,
    pub status: String,
    pub message: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub household_members: Option<i32>,
    pub has_other_pets: Option<bool>,
    pub pet_experience: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new adoption request. Status always starts PENDING.
#[derive(Debug)]
pub struct CreateAdoptionRequest {
    pub dog_id: DbId,
    pub user_id: DbId,
    pub message: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub occupation: String,
    pub household_members: i32,
    pub has_other_pets: Option<bool>,
    pub pet_experience: String,
}
