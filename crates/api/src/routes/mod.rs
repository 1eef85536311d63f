pub mod adoption_requests;
pub mod auth;
pub mod avatars;
pub mod dogs;
pub mod favorites;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
///
/// /dogs                                list (public), create (admin)
/// /dogs/search                         search by breed (public)
/// /dogs/{id}                           get (public), update, delete (admin)
/// /dogs/{id}/image                     stored photo (public)
///
/// /avatars/{user_id}                   stored avatar (public)
///
/// /adoption-requests                   create (auth), list all (admin)
/// /adoption-requests/my-requests       current user's requests (auth)
/// /adoption-requests/user/{user_id}    one user's requests (admin)
/// /adoption-requests/{id}              get (auth), set status, delete (admin)
/// /adoption-requests/{id}/status       set status (admin, PATCH)
///
/// /favorites                           current user's dog IDs (auth)
/// /favorites/{dog_id}                  add, remove (auth)
/// /favorites/check/{dog_id}            is favorited (auth)
/// /favorites/count/{dog_id}            favorite count (auth)
///
/// /users/profile                       get, update (auth)
/// /users/password                      change password (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dogs", dogs::router())
        .nest("/avatars", avatars::router())
        .nest("/adoption-requests", adoption_requests::router())
        .nest("/favorites", favorites::router())
        .nest("/users", users::router())
}
