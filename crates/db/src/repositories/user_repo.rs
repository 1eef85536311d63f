//! Repository for the `users` table.

use pawhome_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateProfile, User, UserAvatar};

/// Column list shared across queries. The avatar blob is never part of it;
/// `has_avatar` is computed so profile responses can link to the binary
/// endpoint without loading the bytes.
const COLUMNS: &str = "id, username, email, password_hash, role, first_name, last_name, \
                        phone_number, address, \
                        (avatar IS NOT NULL AND length(avatar) > 0) AS has_avatar, \
                        created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive; login identifies by email).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a username is already taken.
    pub async fn exists_by_username(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(pool)
            .await
    }

    /// Check whether an email is already registered.
    pub async fn exists_by_email(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Check whether any admin account exists (used by startup bootstrap).
    pub async fn exists_admin(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE role = 'ADMIN')")
            .fetch_one(pool)
            .await
    }

    /// Overwrite the profile fields, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                first_name = $2,
                last_name = $3,
                email = $4,
                phone_number = $5,
                address = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the stored avatar blob and content type.
    pub async fn update_avatar(
        pool: &PgPool,
        id: DbId,
        avatar: &[u8],
        content_type: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET avatar = $2, avatar_content_type = $3 WHERE id = $1")
                .bind(id)
                .bind(avatar)
                .bind(content_type)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the stored avatar blob for the binary endpoint.
    ///
    /// Returns `None` when the user does not exist; an existing user with no
    /// avatar yields `Some` with a `None` blob.
    pub async fn find_avatar(pool: &PgPool, id: DbId) -> Result<Option<UserAvatar>, sqlx::Error> {
        sqlx::query_as::<_, UserAvatar>(
            "SELECT avatar, avatar_content_type FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
