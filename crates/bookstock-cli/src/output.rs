//! Output formatting for the menu
//!
//! Renders books as a boxed table with centered columns:
//!
//! ```text
//!                 Books Table
//! ┌──────┬──────────────────────┬─────────────────┬──────────┐
//! │  ID  │        Title         │     Author      │ Quantity │
//! ├──────┼──────────────────────┼─────────────────┼──────────┤
//! │ 3001 │ a tale of two cities │ Charles Dickens │    30    │
//! └──────┴──────────────────────┴─────────────────┴──────────┘
//! ```

use bookstock_core::Book;

const TABLE_TITLE: &str = "Books Table";
const HEADERS: [&str; 4] = ["ID", "Title", "Author", "Quantity"];

/// Longest title or author shown before truncation
const MAX_CELL_WIDTH: usize = 48;

/// Render books as a table (headers only when `books` is empty)
pub fn books_table(books: &[Book]) -> String {
    let rows: Vec<[String; 4]> = books
        .iter()
        .map(|book| {
            [
                book.id.to_string(),
                truncate(&book.title, MAX_CELL_WIDTH),
                truncate(&book.author, MAX_CELL_WIDTH),
                book.quantity.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: [String; 4] = HEADERS.map(str::to_string);
    // Each column is padded by one space on both sides, plus one border per column and the last edge
    let total_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(format!("{:^width$}", TABLE_TITLE, width = total_width).trim_end().to_string());
    lines.push(rule(&widths, '┌', '┬', '┐'));
    lines.push(row_line(&header, &widths));
    lines.push(rule(&widths, '├', '┼', '┤'));
    for row in &rows {
        lines.push(row_line(row, &widths));
    }
    lines.push(rule(&widths, '└', '┴', '┘'));

    lines.join("\n")
}

fn rule(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {:^width$} ", cell, width = width))
        .collect();
    format!("│{}│", cells.join("│"))
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
