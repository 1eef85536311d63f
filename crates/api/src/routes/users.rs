//! Route definitions for the `/users` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`. All routes require authentication.
///
/// ```text
/// GET /profile  -> get_profile
/// PUT /profile  -> update_profile (multipart, optional avatar)
/// PUT /password -> update_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/password", put(users::update_password))
}
