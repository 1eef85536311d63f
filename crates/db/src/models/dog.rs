//! Dog entity model and DTOs.

use pawhome_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Dog row from the `dogs` table, without the image bytes.
///
/// Serialized directly in API responses; `has_image` tells clients to fetch
/// `GET /dogs/{id}/image` instead of shipping the blob inline.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub age: i32,
    /// `MALE` or `FEMALE`, see `pawhome_core::adoption::Gender`.
    pub gender: String,
    pub description: Option<String>,
    pub health_status: String,
    /// External image URL fallback, used when no blob is stored.
    pub image_url: Option<String>,
    /// Computed in SQL; true when a non-empty image blob is stored.
    pub has_image: bool,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Stored photo blob for `GET /dogs/{id}/image`.
#[derive(Debug, FromRow)]
pub struct DogImage {
    pub image: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
}

/// DTO for creating a new dog listing.
#[derive(Debug)]
pub struct CreateDog {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub description: Option<String>,
    pub health_status: String,
    pub available: bool,
    pub image_url: Option<String>,
    pub image: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
}

/// DTO for updating a dog listing. The image is only replaced when new
/// bytes are provided; everything else overwrites the stored row.
#[derive(Debug)]
pub struct UpdateDog {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub description: Option<String>,
    pub health_status: String,
    pub available: bool,
    pub image_url: Option<String>,
    pub image: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
}
