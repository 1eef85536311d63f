//! Route definitions for the `/dogs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dogs;
use crate::state::AppState;

/// Routes mounted at `/dogs`.
///
/// ```text
/// GET    /             -> list (public; ?available=true filters)
/// POST   /             -> create (admin, multipart)
/// GET    /search       -> search_by_breed (public)
/// GET    /{id}         -> get_by_id (public)
/// PUT    /{id}         -> update (admin, multipart)
/// DELETE /{id}         -> delete (admin)
/// GET    /{id}/image   -> get_image (public, binary)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dogs::list).post(dogs::create))
        .route("/search", get(dogs::search_by_breed))
        .route(
            "/{id}",
            get(dogs::get_by_id).put(dogs::update).delete(dogs::delete),
        )
        .route("/{id}/image", get(dogs::get_image))
}
