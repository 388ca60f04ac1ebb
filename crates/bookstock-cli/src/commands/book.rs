//! Book command handlers
//!
//! One handler per menu entry. Titles are lowercased on the way in so that
//! lookups stay predictable; the store itself compares titles exactly.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use bookstock_core::{Book, BookStore, UpsertOutcome};

use crate::console::{parse_id, parse_quantity, Console, NumberError};
use crate::output::books_table;

/// Result of the interactive update flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Updated,
    NotFound,
    /// Invalid answer; nothing was written
    Failed,
}

const FIELDS: [&str; 3] = ["Title", "Author", "Quantity"];

/// Enter a new book, or add stock to an existing title
pub fn enter<R: BufRead, W: Write>(store: &BookStore, console: &mut Console<R, W>) -> Result<()> {
    let id = match parse_id(&console.ask("\nEnter the book ID:- ")?) {
        Ok(id) => id,
        Err(_) => return numbers_required(console),
    };
    let title = console.ask_lowercase("\nEnter the book title:- ")?;
    let author = console.ask("\nEnter the book author:- ")?;
    let quantity = match parse_quantity(&console.ask("\nEnter the book quantity:- ")?) {
        Ok(quantity) => quantity,
        Err(NumberError::Negative) => {
            return console.say("\nQuantity cannot be negative!");
        }
        Err(NumberError::NotANumber) => return numbers_required(console),
    };

    let book = Book::new(id, title, author, quantity);
    let outcome = store.upsert(&book, false).context("Failed to save book")?;

    match outcome {
        UpsertOutcome::Restocked { quantity, .. } => console.say(&format!(
            "\n'{}' is already in the database, stock is now {}",
            book.title, quantity
        )),
        UpsertOutcome::Inserted | UpsertOutcome::Replaced => {
            console.say(&format!("\n'{}' has been added to the database!", book.title))
        }
    }
}

/// Edit the title, author and/or quantity of an existing book
pub fn update<R: BufRead, W: Write>(
    store: &BookStore,
    console: &mut Console<R, W>,
) -> Result<UpdateStatus> {
    let (title, found) = lookup(store, console)?;
    let Some(mut book) = found else {
        not_found(console, &title)?;
        return Ok(UpdateStatus::NotFound);
    };

    let mut wanted = Vec::with_capacity(FIELDS.len());
    for field in FIELDS {
        let choice =
            console.ask_lowercase(&format!("Would like to update the {}? (y/n):- ", field))?;
        match choice.as_str() {
            "y" => wanted.push(field),
            "n" => {}
            _ => {
                console.say(&format!("'{}' is not a valid option", choice))?;
                return Ok(UpdateStatus::Failed);
            }
        }
    }

    for field in wanted {
        match field {
            "Title" => book.title = console.ask_lowercase("\nEnter the new book title:- ")?,
            "Author" => book.author = console.ask("\nEnter the new author name:- ")?,
            _ => match parse_quantity(&console.ask("\nEnter the new quantity:- ")?) {
                Ok(quantity) => book.quantity = quantity,
                Err(_) => {
                    console.say("\nPlease make sure you enter a non-negative number for the quantity!")?;
                    return Ok(UpdateStatus::Failed);
                }
            },
        }
    }

    store.upsert(&book, true).context("Failed to update book")?;
    console.say(&format!("\n'{}' has been updated!", book.title))?;
    Ok(UpdateStatus::Updated)
}

/// Delete the book with the given title
pub fn delete<R: BufRead, W: Write>(store: &BookStore, console: &mut Console<R, W>) -> Result<()> {
    let (title, found) = lookup(store, console)?;
    let Some(book) = found else {
        return not_found(console, &title);
    };

    store.delete(&book).context("Failed to delete book")?;
    console.say(&format!(
        "\n'{}' has been\nsuccessfully deleted from the database!\n",
        title
    ))
}

/// Show the book with the given title
pub fn search<R: BufRead, W: Write>(store: &BookStore, console: &mut Console<R, W>) -> Result<()> {
    let (title, found) = lookup(store, console)?;
    match found {
        Some(book) => console.say(&books_table(&[book])),
        None => not_found(console, &title),
    }
}

/// Show every book
pub fn view<R: BufRead, W: Write>(store: &BookStore, console: &mut Console<R, W>) -> Result<()> {
    let books = store.list_all().context("Failed to list books")?;
    console.say(&books_table(&books))
}

/// Ask for a title and look it up
fn lookup<R: BufRead, W: Write>(
    store: &BookStore,
    console: &mut Console<R, W>,
) -> Result<(String, Option<Book>)> {
    let title = console.ask_lowercase("\nEnter the book title:- ")?;
    let found = store
        .find_by_title(&title)
        .with_context(|| format!("Failed to search for '{}'", title))?;
    Ok((title, found))
}

fn not_found<R: BufRead, W: Write>(console: &mut Console<R, W>, title: &str) -> Result<()> {
    console.say(&format!("\n'{}' is not in the database!\n", title))
}

fn numbers_required<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("\nPlease make sure you enter numbers for ID and quantity!")
}
