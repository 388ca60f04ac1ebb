//! Bookstock Core Library
//!
//! This crate provides the core functionality for Bookstock, a single-user
//! inventory tracker for books backed by a local SQLite file.
//!
//! # Architecture
//!
//! - **SQLite**: one `books` table, opened per operation
//!
//! Every store operation runs in its own transaction on its own connection.
//! Nothing is held open between calls.
//!
//! # Quick Start
//!
//! ```text
//! let store = BookStore::initialize("./books.db")?;
//!
//! // Add stock
//! store.upsert(&Book::new(9001, "dune", "Frank Herbert", 5), false)?;
//!
//! // Query books
//! let books = store.list_all()?;
//! ```
//!
//! # Modules
//!
//! - `store`: CRUD over the books table (main entry point)
//! - `book`: The book record and demonstration seed data
//! - `storage`: Schema and error types
//! - `config`: Application configuration

pub mod book;
pub mod config;
pub mod storage;
pub mod store;

pub use book::{seed_books, Book, SEED_BOOKS};
pub use config::Config;
pub use storage::{StoreError, StoreResult};
pub use store::{BookStore, SeedPolicy, UpsertOutcome};
