//! SQLite schema for the books table
//!
//! There is no migration system: the table is created if absent and
//! otherwise left as found.

use rusqlite::{params, Connection, Result};

use crate::book::Book;

/// Create the books table if it does not exist
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY UNIQUE NOT NULL,
            title TEXT,
            author TEXT,
            quantity INTEGER
        );
        "#,
    )
}

/// Number of rows in the books table
pub fn book_count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
}

/// Insert the given books, replacing any row with the same id
pub fn seed(conn: &Connection, books: &[Book]) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO books (id, title, author, quantity) VALUES (?, ?, ?, ?)",
    )?;
    for book in books {
        stmt.execute(params![book.id, book.title, book.author, book.quantity])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::seed_books;

    #[test]
    fn test_init_schema() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('books') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(columns, vec!["id", "title", "author", "quantity"]);
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        seed(&conn, &seed_books()).unwrap();

        init_schema(&conn).unwrap();
        assert_eq!(book_count(&conn).unwrap(), 5);
    }

    #[test]
    fn test_seed_replaces_same_id() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        assert_eq!(book_count(&conn).unwrap(), 0);

        seed(&conn, &seed_books()).unwrap();
        seed(&conn, &seed_books()).unwrap();
        assert_eq!(book_count(&conn).unwrap(), 5);
    }

    #[test]
    fn test_primary_key_rejects_duplicates() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO books (id, title, author, quantity) VALUES (1, 'a', 'b', 1)",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO books (id, title, author, quantity) VALUES (1, 'c', 'd', 2)",
            [],
        );
        assert!(result.is_err());
    }
}
