//! Menu action handlers

pub mod book;
