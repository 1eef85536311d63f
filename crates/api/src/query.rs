//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /dogs` (`?available=true` narrows the listing
/// to dogs currently open for adoption).
#[derive(Debug, Deserialize)]
pub struct AvailableParams {
    pub available: Option<bool>,
}

/// Query parameters for `GET /dogs/search` (`?breed=` is required).
#[derive(Debug, Deserialize)]
pub struct BreedSearchParams {
    pub breed: String,
}
