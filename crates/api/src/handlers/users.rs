//! Handlers for the `/users` resource (own profile and password).

use axum::extract::{Multipart, State};
use axum::Json;
use pawhome_core::error::CoreError;
use pawhome_db::models::user::{UpdateProfile, User, UserProfile};
use pawhome_db::repositories::UserRepo;
use serde::Deserialize;
use serde_json::json;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Minimum password length enforced on password change.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /users/password`.
#[derive(Debug, Deserialize)]
pub struct PasswordUpdateRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserProfile>> {
    let user = find_current_user(&state, &auth_user).await?;
    Ok(Json(to_profile(&user)))
}

/// PUT /api/v1/users/profile
///
/// Overwrite the profile fields from a multipart form; an `avatar` file part
/// replaces the stored avatar blob. Changing email to one already registered
/// by another account is a 409.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    multipart: Multipart,
) -> AppResult<Json<UserProfile>> {
    let user = find_current_user(&state, &auth_user).await?;
    let form = ProfileForm::parse(multipart).await?;
    let input = form.to_update()?;

    if input.email != user.email && UserRepo::exists_by_email(&state.pool, &input.email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already in use".into(),
        )));
    }

    let updated = UserRepo::update_profile(&state.pool, user.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.id,
        }))?;

    // Store the new avatar after the field write; blob failure aborts the
    // request before any response is produced.
    let updated = if let Some((bytes, content_type)) = form.avatar {
        UserRepo::update_avatar(&state.pool, updated.id, &bytes, &content_type).await?;
        find_current_user(&state, &auth_user).await?
    } else {
        updated
    };

    Ok(Json(to_profile(&updated)))
}

/// PUT /api/v1/users/password
///
/// Change the password. The supplied current password must match.
pub async fn update_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<PasswordUpdateRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = find_current_user(&state, &auth_user).await?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !current_valid {
        return Err(AppError::Core(CoreError::Validation(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, user.id, &hashed).await?;

    Ok(Json(json!({ "message": "Password updated successfully" })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the authenticated user's row; a valid token for a since-deleted
/// account maps to 401.
async fn find_current_user(state: &AppState, auth_user: &AuthUser) -> Result<User, AppError> {
    UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))
}

/// Shape a user row into the external profile representation.
fn to_profile(user: &User) -> UserProfile {
    let avatar_url = user
        .has_avatar
        .then(|| format!("/api/v1/avatars/{}", user.id));

    UserProfile {
        id: user.id,
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.clone(),
        phone_number: user.phone_number.clone(),
        address: user.address.clone(),
        avatar_url,
        role: user.role.clone(),
    }
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// Accumulated fields of the profile update multipart form.
#[derive(Default)]
struct ProfileForm {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    address: Option<String>,
    /// Uploaded avatar bytes plus the declared content type.
    avatar: Option<(Vec<u8>, String)>,
}

impl ProfileForm {
    /// Drain a multipart stream into the form. Unknown fields are ignored;
    /// an empty avatar upload counts as "no avatar sent".
    async fn parse(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ProfileForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "avatar" => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("image/png")
                        .to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    if !data.is_empty() {
                        form.avatar = Some((data.to_vec(), content_type));
                    }
                }
                other => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    match other {
                        "first_name" => form.first_name = Some(text),
                        "last_name" => form.last_name = Some(text),
                        "email" => form.email = Some(text),
                        "phone_number" => form.phone_number = Some(text),
                        "address" => form.address = Some(text),
                        _ => {} // ignore unknown fields
                    }
                }
            }
        }

        Ok(form)
    }

    /// All profile text fields are required on update; the avatar is not.
    fn to_update(&self) -> Result<UpdateProfile, AppError> {
        let require = |value: &Option<String>, name: &str| {
            value
                .clone()
                .ok_or_else(|| AppError::BadRequest(format!("Missing required '{name}' field")))
        };

        Ok(UpdateProfile {
            first_name: require(&self.first_name, "first_name")?,
            last_name: require(&self.last_name, "last_name")?,
            email: require(&self.email, "email")?,
            phone_number: require(&self.phone_number, "phone_number")?,
            address: require(&self.address, "address")?,
        })
    }
}
