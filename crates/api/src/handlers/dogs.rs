//! Handlers for the `/dogs` resource.
//!
//! Create and update accept `multipart/form-data` so listings and their
//! photo can be submitted in one request; the photo is stored as a row blob
//! and served back by [`get_image`].

use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use pawhome_core::adoption::Gender;
use pawhome_core::error::CoreError;
use pawhome_core::types::DbId;
use pawhome_db::models::dog::{CreateDog, Dog, UpdateDog};
use pawhome_db::repositories::DogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{AvailableParams, BreedSearchParams};
use crate::state::AppState;

/// Content type served when an image was stored without one.
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/png";

/// Cache header for binary responses (1 hour).
const IMAGE_CACHE_CONTROL: &str = "max-age=3600";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dogs
///
/// List all dogs; `?available=true` narrows to dogs open for adoption.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AvailableParams>,
) -> AppResult<Json<Vec<Dog>>> {
    let dogs = if params.available == Some(true) {
        DogRepo::list_available(&state.pool).await?
    } else {
        DogRepo::list(&state.pool).await?
    };
    Ok(Json(dogs))
}

/// GET /api/v1/dogs/search?breed=
pub async fn search_by_breed(
    State(state): State<AppState>,
    Query(params): Query<BreedSearchParams>,
) -> AppResult<Json<Vec<Dog>>> {
    let dogs = DogRepo::search_by_breed(&state.pool, &params.breed).await?;
    Ok(Json(dogs))
}

/// GET /api/v1/dogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Dog>> {
    let dog = DogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Dog", id }))?;
    Ok(Json(dog))
}

/// POST /api/v1/dogs
///
/// Create a dog listing from a multipart form (admin only). Returns 201.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Dog>)> {
    let form = DogForm::parse(multipart).await?;

    let input = CreateDog {
        name: form.require("name")?,
        breed: form.require("breed")?,
        age: form.require_age()?,
        gender: form.require_gender()?,
        description: form.description.clone(),
        health_status: form.require("health_status")?,
        available: form.require_available()?,
        image_url: form.image_url.clone(),
        image: form.image.as_ref().map(|(bytes, _)| bytes.clone()),
        image_content_type: form.image.as_ref().map(|(_, ct)| ct.clone()),
    };

    let dog = DogRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(dog)))
}

/// PUT /api/v1/dogs/{id}
///
/// Overwrite a dog listing from a multipart form (admin only). The stored
/// photo is kept unless the form carries a new image file.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Dog>> {
    let form = DogForm::parse(multipart).await?;

    let input = UpdateDog {
        name: form.require("name")?,
        breed: form.require("breed")?,
        age: form.require_age()?,
        gender: form.require_gender()?,
        description: form.description.clone(),
        health_status: form.require("health_status")?,
        available: form.require_available()?,
        image_url: form.image_url.clone(),
        image: form.image.as_ref().map(|(bytes, _)| bytes.clone()),
        image_content_type: form.image.as_ref().map(|(_, ct)| ct.clone()),
    };

    let dog = DogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Dog", id }))?;
    Ok(Json(dog))
}

/// DELETE /api/v1/dogs/{id}
///
/// Remove a listing (admin only); favorites and adoption requests cascade.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DogRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Dog", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/dogs/{id}/image
///
/// Serve the stored photo blob with its content type and a 1-hour cache
/// header. 404 when the dog does not exist or has no stored photo.
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let stored = DogRepo::find_image(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Dog", id }))?;

    let bytes = match stored.image {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Dog image",
                id,
            }))
        }
    };

    let content_type = stored
        .image_content_type
        .unwrap_or_else(|| DEFAULT_IMAGE_CONTENT_TYPE.to_string());

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, IMAGE_CACHE_CONTROL)
        .body(Body::from(bytes))
        .unwrap())
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// Accumulated fields of the dog create/update multipart form.
#[derive(Default)]
struct DogForm {
    name: Option<String>,
    breed: Option<String>,
    age: Option<String>,
    gender: Option<String>,
    description: Option<String>,
    health_status: Option<String>,
    available: Option<String>,
    image_url: Option<String>,
    /// Uploaded photo bytes plus the declared content type.
    image: Option<(Vec<u8>, String)>,
}

impl DogForm {
    /// Drain a multipart stream into the form. Unknown fields are ignored;
    /// an empty image upload counts as "no image sent".
    async fn parse(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = DogForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "image" => {
                    let content_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
                        .to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    if !data.is_empty() {
                        form.image = Some((data.to_vec(), content_type));
                    }
                }
                other => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    match other {
                        "name" => form.name = Some(text),
                        "breed" => form.breed = Some(text),
                        "age" => form.age = Some(text),
                        "gender" => form.gender = Some(text),
                        "description" => form.description = Some(text),
                        "health_status" => form.health_status = Some(text),
                        "available" => form.available = Some(text),
                        "image_url" => {
                            if !text.is_empty() {
                                form.image_url = Some(text);
                            }
                        }
                        _ => {} // ignore unknown fields
                    }
                }
            }
        }

        Ok(form)
    }

    /// Fetch a required text field by name.
    fn require(&self, name: &str) -> Result<String, AppError> {
        let value = match name {
            "name" => &self.name,
            "breed" => &self.breed,
            "health_status" => &self.health_status,
            _ => &None,
        };
        value
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("Missing required '{name}' field")))
    }

    fn require_age(&self) -> Result<i32, AppError> {
        let raw = self
            .age
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Missing required 'age' field".into()))?;
        let age: i32 = raw
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid age: {raw}")))?;
        if age < 0 {
            return Err(AppError::BadRequest("Age must be a positive number".into()));
        }
        Ok(age)
    }

    fn require_gender(&self) -> Result<String, AppError> {
        let raw = self
            .gender
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Missing required 'gender' field".into()))?;
        let gender: Gender = raw
            .parse()
            .map_err(|e: String| AppError::BadRequest(e))?;
        Ok(gender.as_str().to_string())
    }

    fn require_available(&self) -> Result<bool, AppError> {
        let raw = self
            .available
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Missing required 'available' field".into()))?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid available flag: {raw}")))
    }
}
