//! Interactive menu loop
//!
//! Reads a choice (0-5), runs the matching action and repeats until the user
//! picks 0 or the input ends. An error inside an action is reported and the
//! loop carries on.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info, warn};

use bookstock_core::{BookStore, StoreError};

use crate::commands::book::{self, UpdateStatus};
use crate::console::Console;

const MENU: &str = "
--------------------------------------
            BOOK MANAGER
--------------------------------------
Welcome! Please choose what you want
to do (enter a number).
--------------------------------------
1. Enter book
2. Update book
3. Delete book
4. Search books
5. View books
0. Exit
--------------------------------------
> ";

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Enter,
    Update,
    Delete,
    Search,
    View,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Choice::Enter),
            "2" => Some(Choice::Update),
            "3" => Some(Choice::Delete),
            "4" => Some(Choice::Search),
            "5" => Some(Choice::View),
            "0" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits
pub fn run<R: BufRead, W: Write>(store: &BookStore, console: &mut Console<R, W>) -> Result<()> {
    loop {
        let Some(input) = console.read_line(MENU)? else {
            info!("input closed, leaving menu");
            console.say("")?;
            return Ok(());
        };

        let Some(choice) = Choice::parse(&input) else {
            console.say(&format!(
                "\n'{}' is not a valid option\nplease enter a number (0-5)\n",
                input
            ))?;
            continue;
        };
        debug!(?choice, "menu choice");

        let result = match choice {
            Choice::Enter => book::enter(store, console),
            Choice::Update => match book::update(store, console) {
                Ok(UpdateStatus::Failed) => console.say("Please try again!\n"),
                Ok(_) => Ok(()),
                Err(err) => Err(err),
            },
            Choice::Delete => book::delete(store, console),
            Choice::Search => book::search(store, console),
            Choice::View => book::view(store, console),
            Choice::Exit => {
                console.say("\nGoodbye!\n")?;
                return Ok(());
            }
        };

        if let Err(err) = result {
            let message = format!("{:#}", err);
            warn!(?choice, error = %message, "menu action failed");
            console.say(&format!("\nError: {}", message))?;
            if let Some(hint) = err
                .downcast_ref::<StoreError>()
                .and_then(StoreError::recovery_suggestion)
            {
                console.say(hint)?;
            }
            console.say("")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstock_core::Book;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(store: &BookStore, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        run(store, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("1"), Some(Choice::Enter));
        assert_eq!(Choice::parse("5"), Some(Choice::View));
        assert_eq!(Choice::parse("0"), Some(Choice::Exit));
        assert_eq!(Choice::parse("6"), None);
        assert_eq!(Choice::parse("view"), None);
    }

    #[test]
    fn test_view_then_exit() {
        let dir = tempdir().unwrap();
        let store = BookStore::initialize(dir.path().join("books.db")).unwrap();

        let text = run_script(&store, "5\n0\n");

        assert!(text.contains("BOOK MANAGER"));
        assert!(text.contains("alice in wonderland"));
        assert!(text.ends_with("Goodbye!\n\n"));
    }

    #[test]
    fn test_invalid_option_keeps_looping() {
        let dir = tempdir().unwrap();
        let store = BookStore::initialize(dir.path().join("books.db")).unwrap();

        let text = run_script(&store, "9\n0\n");

        assert!(text.contains("'9' is not a valid option"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = tempdir().unwrap();
        let store = BookStore::initialize(dir.path().join("books.db")).unwrap();

        let text = run_script(&store, "");
        assert!(text.contains("BOOK MANAGER"));
        assert!(!text.contains("Goodbye!"));
    }

    #[test]
    fn test_enter_search_delete_session() {
        let dir = tempdir().unwrap();
        let store = BookStore::initialize(dir.path().join("books.db")).unwrap();

        let text = run_script(
            &store,
            "1\n9001\nDune\nFrank Herbert\n5\n4\ndune\n3\ndune\n4\ndune\n0\n",
        );

        assert!(text.contains("'dune' has been added"));
        assert!(text.contains("9001"));
        assert!(text.contains("successfully deleted"));
        assert!(text.contains("'dune' is not in the database!"));
        assert!(store.find_by_title("dune").unwrap().is_none());
    }

    #[test]
    fn test_failed_update_asks_to_try_again() {
        let dir = tempdir().unwrap();
        let store = BookStore::initialize(dir.path().join("books.db")).unwrap();

        let text = run_script(&store, "2\nalice in wonderland\nx\n0\n");

        assert!(text.contains("Please try again!"));
        assert_eq!(
            store.find_by_title("alice in wonderland").unwrap(),
            Some(Book::new(3005, "alice in wonderland", "Lewis Carrol", 12))
        );
    }

    #[test]
    fn test_action_error_is_reported_and_loop_continues() {
        let dir = tempdir().unwrap();
        let store = BookStore::initialize(dir.path().join("books.db")).unwrap();

        // Input ends in the middle of entering a book
        let text = run_script(&store, "1\n9001\n");

        assert!(text.contains("Error: Input closed"));
        assert_eq!(store.list_all().unwrap().len(), 5);
    }

    #[test]
    fn test_store_error_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");
        let store = BookStore::initialize(&path).unwrap();

        // Clobber the database so every read fails
        std::fs::write(&path, "this is not a sqlite database, only some plain text").unwrap();

        let text = run_script(&store, "5\n0\n");
        assert!(text.contains("Error: Failed to list books"));
        assert!(text.contains("Goodbye!"));
    }
}
