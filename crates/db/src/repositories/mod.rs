//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument.

pub mod filmwork_repo;
pub mod genre_repo;
pub mod person_repo;

pub use filmwork_repo::FilmworkRepo;
pub use genre_repo::GenreRepo;
pub use person_repo::PersonRepo;
