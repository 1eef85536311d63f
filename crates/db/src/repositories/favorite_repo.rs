//! Repository for the `favorites` table.

use pawhome_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::Favorite;

/// Provides operations for a user's bookmarked dogs.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite pair, returning the created row.
    ///
    /// A duplicate (user, dog) pair violates `uq_favorites_user_dog`; the
    /// caller pre-checks with [`FavoriteRepo::exists`] and the API layer
    /// classifies the constraint violation to 409 should a race slip past.
    pub async fn create(pool: &PgPool, user_id: DbId, dog_id: DbId) -> Result<Favorite, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (user_id, dog_id)
             VALUES ($1, $2)
             RETURNING id, user_id, dog_id, created_at",
        )
        .bind(user_id)
        .bind(dog_id)
        .fetch_one(pool)
        .await
    }

    /// Check whether the user has already favorited the dog.
    pub async fn exists(pool: &PgPool, user_id: DbId, dog_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND dog_id = $2)",
        )
        .bind(user_id)
        .bind(dog_id)
        .fetch_one(pool)
        .await
    }

    /// All dog IDs favorited by a user, newest bookmark first.
    pub async fn list_dog_ids_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT dog_id FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Remove a favorite pair. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, dog_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND dog_id = $2")
            .bind(user_id)
            .bind(dog_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// How many users have favorited the given dog.
    pub async fn count_by_dog(pool: &PgPool, dog_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE dog_id = $1")
            .bind(dog_id)
            .fetch_one(pool)
            .await
    }
}
