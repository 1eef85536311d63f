//! Handler for the `/avatars` resource (stored avatar blobs).

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use pawhome_core::error::CoreError;
use pawhome_core::types::DbId;
use pawhome_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Content type served when an avatar was stored without one.
const DEFAULT_AVATAR_CONTENT_TYPE: &str = "image/png";

/// Cache header for binary responses (1 hour).
const AVATAR_CACHE_CONTROL: &str = "max-age=3600";

/// GET /api/v1/avatars/{user_id}
///
/// Serve the stored avatar blob with its content type and a 1-hour cache
/// header. 404 when the user does not exist or has no stored avatar.
pub async fn get_avatar(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Response> {
    let stored = UserRepo::find_avatar(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let bytes = match stored.avatar {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Avatar",
                id: user_id,
            }))
        }
    };

    let content_type = stored
        .avatar_content_type
        .unwrap_or_else(|| DEFAULT_AVATAR_CONTENT_TYPE.to_string());

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, AVATAR_CACHE_CONTROL)
        .body(Body::from(bytes))
        .unwrap())
}
