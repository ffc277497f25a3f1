//! Domain types shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O, so it can be unit-tested in isolation
//! and reused by any future CLI or loader tooling.

pub mod error;
pub mod film;
pub mod pagination;
pub mod types;
