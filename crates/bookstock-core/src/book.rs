//! Book record
//!
//! A plain value describing one inventory entry. No validation happens here;
//! callers decide what an acceptable id or quantity is.

use std::fmt;

/// One book in the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Caller-assigned primary identifier
    pub id: i64,
    /// Lookup key for restocking (stored as given, case-sensitive)
    pub title: String,
    pub author: String,
    /// Units in stock
    pub quantity: i64,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book")?;
        writeln!(f, "---------------------------------------------")?;
        writeln!(f, "ID:         {}", self.id)?;
        writeln!(f, "Title:      {}", self.title)?;
        writeln!(f, "Author:     {}", self.author)?;
        writeln!(f, "QTY:        {}", self.quantity)?;
        write!(f, "---------------------------------------------")
    }
}

/// Demonstration records inserted into an empty table on initialization
pub const SEED_BOOKS: [(i64, &str, &str, i64); 5] = [
    (3001, "a tale of two cities", "Charles Dickens", 30),
    (3002, "harry potter and the philosopher's stone", "J.K. Rowling", 40),
    (3003, "the lion the witch and the wardrobe", "C.S. Lewis", 25),
    (3004, "the lord of the rings", "J.R.R. Tolkien", 37),
    (3005, "alice in wonderland", "Lewis Carrol", 12),
];

/// The seed data as owned records
pub fn seed_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(id, title, author, quantity)| Book::new(id, title, author, quantity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields_verbatim() {
        let book = Book::new(-1, "Dune", "Frank Herbert", -4);
        assert_eq!(book.id, -1);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.quantity, -4);
    }

    #[test]
    fn test_display() {
        let book = Book::new(9001, "dune", "Frank Herbert", 5);
        let text = book.to_string();
        assert!(text.contains("ID:         9001"));
        assert!(text.contains("Title:      dune"));
        assert!(text.contains("Author:     Frank Herbert"));
        assert!(text.contains("QTY:        5"));
    }

    #[test]
    fn test_seed_books() {
        let books = seed_books();
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3001, 3002, 3003, 3004, 3005]);
        assert_eq!(books[3].title, "the lord of the rings");
        assert_eq!(books[4].quantity, 12);
    }
}
