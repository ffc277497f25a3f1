//! Row structs and DTOs for the `content` schema.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A `Deserialize` create DTO used to insert fixtures and imports

pub mod filmwork;
pub mod genre;
pub mod person;
