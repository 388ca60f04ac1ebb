//! Book store
//!
//! The `BookStore` owns the path to the SQLite file and exposes CRUD over the
//! `books` table. It never holds a connection between calls:
//!
//! open connection -> begin -> run statements -> commit (or rollback) -> close
//!
//! so the file is not locked while the user sits at a prompt.
//!
//! ## Keys
//!
//! - `upsert` identifies "the same book" by **title** (restocking)
//! - `delete` identifies a row by **id**
//!
//! ## Usage
//!
//! ```ignore
//! let store = BookStore::initialize("./books.db")?;  // Creates and seeds if empty
//!
//! store.upsert(&Book::new(9001, "dune", "Frank Herbert", 5), false)?;
//! let dune = store.find_by_title("dune")?;
//! ```

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use tracing::{debug, info, warn};

use crate::book::{seed_books, Book};
use crate::storage::{book_count, init_schema, seed, StoreError, StoreResult};

const SELECT_BOOKS: &str = "SELECT id, title, author, quantity FROM books";

/// Whether `initialize` fills an empty table with the demonstration books
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Seed when the table has no rows
    #[default]
    WhenEmpty,
    /// Never seed
    Never,
}

/// Which branch an upsert took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No book had the title; the full row was written
    Inserted,
    /// Forced write of the full row, replacing any row with the same id
    Replaced,
    /// A book with the title existed; its quantity was increased
    Restocked { id: i64, quantity: i64 },
}

/// Transactional CRUD over the books table
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Open or create the database, create the table and seed it if empty
    pub fn initialize(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::initialize_with(path, SeedPolicy::default())
    }

    /// Like [`BookStore::initialize`], with explicit control over seeding
    pub fn initialize_with(path: impl AsRef<Path>, policy: SeedPolicy) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let store = Self { path };
        store.with_transaction("initialize", |tx| {
            init_schema(tx)?;

            let count = book_count(tx)?;
            if count == 0 && policy == SeedPolicy::WhenEmpty {
                let books = seed_books();
                seed(tx, &books)?;
                info!(count = books.len(), "seeded empty books table");
            } else {
                debug!(count, "books table ready");
            }
            Ok(())
        })?;

        Ok(store)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All books in storage order
    pub fn list_all(&self) -> StoreResult<Vec<Book>> {
        self.with_transaction("list_all", |tx| {
            let mut stmt = tx.prepare(SELECT_BOOKS)?;
            let books = stmt
                .query_map([], book_from_row)?
                .collect::<Result<Vec<Book>, _>>()?;
            debug!(count = books.len(), "listed books");
            Ok(books)
        })
    }

    /// Add stock for a title, or write the full record
    ///
    /// If a book with the same title exists and `force_replace` is false, the
    /// given quantity is added to that row and nothing else changes. Otherwise
    /// the whole record is written with insert-or-replace on the id, which
    /// covers both new books and explicit edits.
    pub fn upsert(&self, book: &Book, force_replace: bool) -> StoreResult<UpsertOutcome> {
        self.with_transaction("upsert", |tx| {
            let existing = tx
                .query_row(
                    &format!("{} WHERE title = ?", SELECT_BOOKS),
                    params![book.title],
                    book_from_row,
                )
                .optional()?;

            match existing {
                Some(current) if !force_replace => {
                    let quantity = current.quantity.checked_add(book.quantity).ok_or_else(|| {
                        StoreError::QuantityOverflow {
                            title: current.title.clone(),
                            current: current.quantity,
                            added: book.quantity,
                        }
                    })?;
                    tx.execute(
                        "UPDATE books SET quantity = ? WHERE id = ?",
                        params![quantity, current.id],
                    )?;
                    info!(id = current.id, quantity, "restocked book");
                    Ok(UpsertOutcome::Restocked {
                        id: current.id,
                        quantity,
                    })
                }
                _ => {
                    tx.execute(
                        "INSERT OR REPLACE INTO books (id, title, author, quantity) VALUES (?, ?, ?, ?)",
                        params![book.id, book.title, book.author, book.quantity],
                    )?;
                    if force_replace {
                        info!(id = book.id, "replaced book");
                        Ok(UpsertOutcome::Replaced)
                    } else {
                        info!(id = book.id, "inserted book");
                        Ok(UpsertOutcome::Inserted)
                    }
                }
            }
        })
    }

    /// Insert a new row, failing with a constraint error if the id is taken
    pub fn insert(&self, book: &Book) -> StoreResult<()> {
        self.with_transaction("insert", |tx| {
            tx.execute(
                "INSERT INTO books (id, title, author, quantity) VALUES (?, ?, ?, ?)",
                params![book.id, book.title, book.author, book.quantity],
            )?;
            info!(id = book.id, "inserted book");
            Ok(())
        })
    }

    /// First book whose title matches exactly (case-sensitive)
    pub fn find_by_title(&self, title: &str) -> StoreResult<Option<Book>> {
        let found = self.list_all()?.into_iter().find(|book| book.title == title);
        debug!(title, found = found.is_some(), "title lookup");
        Ok(found)
    }

    /// Remove the row with the book's id
    ///
    /// Returns `false` without touching the table when no such row exists.
    pub fn delete(&self, book: &Book) -> StoreResult<bool> {
        self.with_transaction("delete", |tx| {
            let exists = tx
                .prepare("SELECT 1 FROM books WHERE id = ?")?
                .exists(params![book.id])?;

            if !exists {
                debug!(id = book.id, "delete skipped, no such book");
                return Ok(false);
            }

            tx.execute("DELETE FROM books WHERE id = ?", params![book.id])?;
            info!(id = book.id, "deleted book");
            Ok(true)
        })
    }

    // ==================== Private helpers ====================

    fn connect(&self) -> StoreResult<Connection> {
        debug!(path = %self.path.display(), "opening database");
        Ok(Connection::open(&self.path)?)
    }

    /// Run `work` in a transaction on a fresh connection
    ///
    /// Commits on `Ok`, rolls back explicitly on `Err` and returns the original
    /// error. The connection is closed when it drops at the end of this call.
    fn with_transaction<T>(
        &self,
        op: &'static str,
        work: impl FnOnce(&Transaction) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        match work(&tx) {
            Ok(value) => {
                tx.commit()?;
                debug!(op, "committed");
                Ok(value)
            }
            Err(err) => {
                warn!(op, error = %err, "rolling back");
                if let Err(rollback_err) = tx.rollback() {
                    warn!(op, error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

/// Build a book from a row; NULL title/author read as empty, NULL quantity as 0
fn book_from_row(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        author: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        quantity: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
    })
}
