//! Route definitions for the `/favorites` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`. All routes require authentication.
///
/// ```text
/// GET    /               -> list (current user's dog IDs)
/// POST   /{dog_id}       -> add
/// DELETE /{dog_id}       -> remove
/// GET    /check/{dog_id} -> check
/// GET    /count/{dog_id} -> count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list))
        .route(
            "/{dog_id}",
            post(favorites::add).delete(favorites::remove),
        )
        .route("/check/{dog_id}", get(favorites::check))
        .route("/count/{dog_id}", get(favorites::count))
}
