//! Repository for the `dogs` table.

use pawhome_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::{CreateDog, Dog, DogImage, UpdateDog};

/// Column list shared across queries. The image blob is never part of it;
/// `has_image` is computed so listings can link to the binary endpoint.
const COLUMNS: &str = "id, name, breed, age, gender, description, health_status, image_url, \
                        (image IS NOT NULL AND length(image) > 0) AS has_image, \
                        available, created_at, updated_at";

/// Provides CRUD operations for dog listings.
pub struct DogRepo;

impl DogRepo {
    /// Insert a new dog, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDog) -> Result<Dog, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs (name, breed, age, gender, description, health_status,
                               available, image_url, image, image_content_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.description)
            .bind(&input.health_status)
            .bind(input.available)
            .bind(&input.image_url)
            .bind(&input.image)
            .bind(&input.image_content_type)
            .fetch_one(pool)
            .await
    }

    /// Find a dog by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all dogs, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs ORDER BY created_at DESC");
        sqlx::query_as::<_, Dog>(&query).fetch_all(pool).await
    }

    /// List dogs that are currently available for adoption, newest first.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<Dog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM dogs WHERE available = TRUE ORDER BY created_at DESC");
        sqlx::query_as::<_, Dog>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search on breed.
    pub async fn search_by_breed(pool: &PgPool, breed: &str) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dogs WHERE breed ILIKE '%' || $1 || '%'
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(breed)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a dog's listing fields. The image is only replaced when new
    /// bytes are provided (COALESCE keeps the stored blob otherwise).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDog,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!(
            "UPDATE dogs SET
                name = $2,
                breed = $3,
                age = $4,
                gender = $5,
                description = $6,
                health_status = $7,
                available = $8,
                image_url = COALESCE($9, image_url),
                image = COALESCE($10, image),
                image_content_type = COALESCE($11, image_content_type),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.description)
            .bind(&input.health_status)
            .bind(input.available)
            .bind(&input.image_url)
            .bind(&input.image)
            .bind(&input.image_content_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dog. Favorites and adoption requests cascade in the schema.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the stored photo blob for the binary endpoint.
    ///
    /// Returns `None` when the dog does not exist; an existing dog with no
    /// photo yields `Some` with a `None` blob.
    pub async fn find_image(pool: &PgPool, id: DbId) -> Result<Option<DogImage>, sqlx::Error> {
        sqlx::query_as::<_, DogImage>("SELECT image, image_content_type FROM dogs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
