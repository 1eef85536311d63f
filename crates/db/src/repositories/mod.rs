//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod adoption_request_repo;
pub mod dog_repo;
pub mod favorite_repo;
pub mod user_repo;

pub use adoption_request_repo::AdoptionRequestRepo;
pub use dog_repo::DogRepo;
pub use favorite_repo::FavoriteRepo;
pub use user_repo::UserRepo;
