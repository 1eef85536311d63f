//! Handlers for the `/adoption-requests` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pawhome_core::adoption::AdoptionStatus;
use pawhome_core::error::CoreError;
use pawhome_core::roles::ROLE_ADMIN;
use pawhome_core::types::{DbId, Timestamp};
use pawhome_db::models::adoption_request::{
    AdoptionRequest, AdoptionRequestDetail, CreateAdoptionRequest,
};
use pawhome_db::repositories::{AdoptionRequestRepo, DogRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /adoption-requests`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestBody {
    pub dog_id: DbId,
    pub message: Option<String>,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Occupation is required"))]
    pub occupation: String,
    #[validate(range(min = 1, message = "At least 1 household member required"))]
    pub household_members: i32,
    pub has_other_pets: Option<bool>,
    #[validate(length(min = 1, message = "Pet experience is required"))]
    pub pet_experience: String,
}

/// Request body for the status update endpoints.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: AdoptionStatus,
}

/// Adoption request with dog and applicant summaries, as returned by the
/// list and status-update endpoints.
#[derive(Debug, Serialize)]
pub struct AdoptionResponse {
    pub id: DbId,
    pub dog_id: DbId,
    pub dog_name: String,
    pub dog_breed: String,
    /// Binary endpoint link when a photo blob is stored, otherwise the
    /// dog's external image URL (if any).
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

impl AdoptionResponse {
    fn from_detail(detail: AdoptionRequestDetail) -> Self {
        let dog_image_url = if detail.dog_has_image {
            Some(format!("/api/v1/dogs/{}/image", detail.dog_id))
        } else {
            detail.dog_image_url
        };

        AdoptionResponse {
            id: detail.id,
            dog_id: detail.dog_id,
            dog_name: detail.dog_name,
            dog_breed: detail.dog_breed,
            dog_image_url,
            user_id: detail.user_id,
            username: detail.username,
            user_email: detail.user_email,
            status: detail.status,
            message: detail.message,
            full_name: detail.full_name,
            email: detail.email,
            phone: detail.phone,
            address: detail.address,
            occupation: detail.occupation,
            household_members: detail.household_members,
            has_other_pets: detail.has_other_pets,
            pet_experience: detail.pet_experience,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/adoption-requests
///
/// File an adoption application for a dog. The dog must exist and be
/// available; the request starts PENDING. Returns 201.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateRequestBody>,
) -> AppResult<(StatusCode, Json<AdoptionRequest>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let dog = DogRepo::find_by_id(&state.pool, input.dog_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dog",
            id: input.dog_id,
        }))?;

    if !dog.available {
        return Err(AppError::Core(CoreError::Validation(
            "Dog is not available for adoption".into(),
        )));
    }

    let create_dto = CreateAdoptionRequest {
        dog_id: input.dog_id,
        user_id: auth_user.user_id,
        message: input.message,
        full_name: input.full_name,
        email: input.email,
        phone: input.phone,
        address: input.address,
        occupation: input.occupation,
        household_members: input.household_members,
        has_other_pets: input.has_other_pets,
        pet_experience: input.pet_experience,
    };

    let request = AdoptionRequestRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/v1/adoption-requests
///
/// List every application with dog and applicant summaries (admin only).
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<AdoptionResponse>>> {
    let details = AdoptionRequestRepo::list_detailed(&state.pool).await?;
    Ok(Json(
        details.into_iter().map(AdoptionResponse::from_detail).collect(),
    ))
}

/// GET /api/v1/adoption-requests/user/{user_id}
///
/// List one user's applications (admin only).
pub async fn list_by_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<AdoptionResponse>>> {
    let details = AdoptionRequestRepo::list_detailed_by_user(&state.pool, user_id).await?;
    Ok(Json(
        details.into_iter().map(AdoptionResponse::from_detail).collect(),
    ))
}

/// GET /api/v1/adoption-requests/my-requests
///
/// List the authenticated user's own applications.
pub async fn my_requests(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<AdoptionResponse>>> {
    let details =
        AdoptionRequestRepo::list_detailed_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(
        details.into_iter().map(AdoptionResponse::from_detail).collect(),
    ))
}

/// GET /api/v1/adoption-requests/{id}
///
/// Fetch a single application. Non-admins may only read their own.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdoptionRequest>> {
    let request = AdoptionRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdoptionRequest",
            id,
        }))?;

    if auth_user.role != ROLE_ADMIN && request.user_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot view another user's adoption request".into(),
        )));
    }

    Ok(Json(request))
}

/// PUT /api/v1/adoption-requests/{id}
///
/// Set an application's status (admin only). Approval marks the dog
/// unavailable in the same transaction.
pub async fn update_status(
    state: State<AppState>,
    admin: RequireAdmin,
    path: Path<DbId>,
    body: Json<StatusUpdateRequest>,
) -> AppResult<Json<AdoptionResponse>> {
    apply_status_update(state, admin, path, body).await
}

/// PATCH /api/v1/adoption-requests/{id}/status
///
/// Same semantics as the PUT endpoint; kept for clients that patch the
/// status sub-resource.
pub async fn patch_status(
    state: State<AppState>,
    admin: RequireAdmin,
    path: Path<DbId>,
    body: Json<StatusUpdateRequest>,
) -> AppResult<Json<AdoptionResponse>> {
    apply_status_update(state, admin, path, body).await
}

/// DELETE /api/v1/adoption-requests/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AdoptionRequestRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AdoptionRequest",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shared body of the PUT and PATCH status endpoints.
async fn apply_status_update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<StatusUpdateRequest>,
) -> AppResult<Json<AdoptionResponse>> {
    let updated = AdoptionRequestRepo::set_status(
        &state.pool,
        id,
        input.status.as_str(),
        input.status.closes_dog(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "AdoptionRequest",
        id,
    }))?;

    let detail = AdoptionRequestRepo::find_detail_by_id(&state.pool, updated.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdoptionRequest",
            id,
        }))?;

    Ok(Json(AdoptionResponse::from_detail(detail)))
}
