//! Route definitions for the `/adoption-requests` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::adoption_requests;
use crate::state::AppState;

/// Routes mounted at `/adoption-requests`.
///
/// ```text
/// POST   /               -> create (auth)
/// GET    /               -> list_all (admin)
/// GET    /my-requests    -> my_requests (auth)
/// GET    /user/{user_id} -> list_by_user (admin)
/// GET    /{id}           -> get_by_id (auth; own request or admin)
/// PUT    /{id}           -> update_status (admin)
/// PATCH  /{id}/status    -> update_status (admin)
/// DELETE /{id}           -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(adoption_requests::list_all).post(adoption_requests::create),
        )
        .route("/my-requests", get(adoption_requests::my_requests))
        .route("/user/{user_id}", get(adoption_requests::list_by_user))
        .route(
            "/{id}",
            get(adoption_requests::get_by_id)
                .put(adoption_requests::update_status)
                .delete(adoption_requests::delete),
        )
        .route("/{id}/status", patch(adoption_requests::patch_status))
}
