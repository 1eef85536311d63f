//! Repository for the `adoption_requests` table.

use pawhome_core::types::DbId;
use sqlx::PgPool;

use crate::models::adoption_request::{
    AdoptionRequest, AdoptionRequestDetail, CreateAdoptionRequest,
};

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, dog_id, user_id, status, message, full_name, email, phone, address, \
                        occupation, household_members, has_other_pets, pet_experience, \
                        created_at, updated_at";

/// Detail JOIN shared by the list endpoints: the request plus dog and
/// applicant-user summaries, replacing the lazy relations of an ORM.
const DETAIL_SELECT: &str = "SELECT r.id, r.dog_id, d.name AS dog_name, d.breed AS dog_breed,
            (d.image IS NOT NULL AND length(d.image) > 0) AS dog_has_image,
            d.image_url AS dog_image_url,
            r.user_id, u.username, u.email AS user_email,
            r.status, r.message, r.full_name, r.email, r.phone, r.address,
            r.occupation, r.household_members, r.has_other_pets, r.pet_experience,
            r.created_at, r.updated_at
     FROM adoption_requests r
     JOIN dogs d ON d.id = r.dog_id
     JOIN users u ON u.id = r.user_id";

/// Provides CRUD operations for adoption requests.
pub struct AdoptionRequestRepo;

impl AdoptionRequestRepo {
    /// Insert a new request with status PENDING, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdoptionRequest,
    ) -> Result<AdoptionRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO adoption_requests
                (dog_id, user_id, message, full_name, email, phone, address,
                 occupation, household_members, has_other_pets, pet_experience)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(input.dog_id)
            .bind(input.user_id)
            .bind(&input.message)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.occupation)
            .bind(input.household_members)
            .bind(input.has_other_pets)
            .bind(&input.pet_experience)
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adoption_requests WHERE id = $1");
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a request by ID with dog and user summaries joined in.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AdoptionRequestDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE r.id = $1");
        sqlx::query_as::<_, AdoptionRequestDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all requests with summaries, newest first.
    pub async fn list_detailed(pool: &PgPool) -> Result<Vec<AdoptionRequestDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY r.created_at DESC");
        sqlx::query_as::<_, AdoptionRequestDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List one user's requests with summaries, newest first.
    pub async fn list_detailed_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AdoptionRequestDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE r.user_id = $1 ORDER BY r.created_at DESC");
        sqlx::query_as::<_, AdoptionRequestDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set a request's status; when `close_dog` is true the referenced dog is
    /// marked unavailable in the same transaction (an approval takes the dog
    /// off the market atomically).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
        close_dog: bool,
    ) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE adoption_requests SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(request) = &updated {
            if close_dog {
                sqlx::query("UPDATE dogs SET available = FALSE, updated_at = NOW() WHERE id = $1")
                    .bind(request.dog_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a request. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM adoption_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
