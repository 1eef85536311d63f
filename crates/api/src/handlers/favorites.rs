//! Handlers for the `/favorites` resource.
//!
//! Favorites are keyed by the authenticated user; the dog id comes from the
//! path. The (user, dog) pair is unique.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pawhome_core::error::CoreError;
use pawhome_core::types::DbId;
use pawhome_db::repositories::{DogRepo, FavoriteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/favorites
///
/// The authenticated user's favorited dog IDs, newest bookmark first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<DbId>>> {
    let dog_ids = FavoriteRepo::list_dog_ids_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(dog_ids))
}

/// POST /api/v1/favorites/{dog_id}
///
/// Bookmark a dog. 409 when the pair already exists, 404 for unknown dogs.
/// Returns 201 with no body.
pub async fn add(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(dog_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FavoriteRepo::exists(&state.pool, auth_user.user_id, dog_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Dog is already in favorites".into(),
        )));
    }

    if DogRepo::find_by_id(&state.pool, dog_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Dog",
            id: dog_id,
        }));
    }

    FavoriteRepo::create(&state.pool, auth_user.user_id, dog_id).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/v1/favorites/{dog_id}
///
/// Remove a bookmark. 404 when the pair does not exist.
pub async fn remove(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(dog_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FavoriteRepo::delete(&state.pool, auth_user.user_id, dog_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: dog_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/favorites/check/{dog_id}
///
/// Whether the authenticated user has favorited the dog.
pub async fn check(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(dog_id): Path<DbId>,
) -> AppResult<Json<bool>> {
    let favorited = FavoriteRepo::exists(&state.pool, auth_user.user_id, dog_id).await?;
    Ok(Json(favorited))
}

/// GET /api/v1/favorites/count/{dog_id}
///
/// How many users have favorited the dog.
pub async fn count(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(dog_id): Path<DbId>,
) -> AppResult<Json<i64>> {
    let count = FavoriteRepo::count_by_dog(&state.pool, dog_id).await?;
    Ok(Json(count))
}
