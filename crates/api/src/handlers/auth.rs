//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pawhome_core::error::CoreError;
use pawhome_core::roles::ROLE_USER;
use pawhome_core::types::DbId;
use pawhome_db::models::user::{CreateUser, User};
use pawhome_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length enforced on registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: &'static str,
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Link to the avatar binary endpoint, present only when one is stored.
    pub avatar_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a new USER account and return a bearer token. Duplicate usernames
/// and emails are rejected with 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::exists_by_username(&state.pool, &input.username).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }

    if UserRepo::exists_by_email(&state.pool, &input.email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        role: ROLE_USER.to_string(),
        first_name: input.first_name,
        last_name: input.last_name,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    let response = build_auth_response(&state, &user)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = build_auth_response(&state, &user)?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate an access token and assemble the response payload.
fn build_auth_response(state: &AppState, user: &User) -> Result<AuthResponse, AppError> {
    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let avatar_url = user
        .has_avatar
        .then(|| format!("/api/v1/avatars/{}", user.id));

    Ok(AuthResponse {
        token,
        token_type: "Bearer",
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        avatar_url,
    })
}
