//! Route definitions for the `/avatars` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::avatars;
use crate::state::AppState;

/// Routes mounted at `/avatars`.
///
/// ```text
/// GET /{user_id} -> get_avatar (public, binary)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{user_id}", get(avatars::get_avatar))
}
