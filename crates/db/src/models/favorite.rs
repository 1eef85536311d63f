//! Favorite (user bookmark of a dog) model.

use pawhome_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Favorite row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub dog_id: DbId,
    pub created_at: Timestamp,
}
