//! Storage layer
//!
//! SQLite schema management and the typed errors returned by the store.
//!
//! ## Tables
//!
//! - `books` - one row per inventory entry, keyed by the caller's id

pub mod error;
pub mod schema;

pub use error::{StoreError, StoreResult};
pub use schema::{book_count, init_schema, seed};
