//! The catalog: the only invariant-bearing state in the system.
//!
//! Maps normalized titles to [`Book`] records. Invariant: every key equals
//! `normalize_title(book.title)`, and there is exactly one record per
//! normalized title. The map is ordered so that saves and listings are
//! deterministic.
//!
//! Per-record state machine:
//!
//! ```text
//! Available --lend--> Borrowed        (guard: must be Available)
//! Borrowed --mark_returned--> Available   (no guard)
//! ```
//!
//! `mark_returned` intentionally has no Borrowed guard and ignores absent
//! titles; `add_book` is an upsert that resets even a Borrowed record to
//! Available. Both are long-standing behaviors callers rely on.

use std::collections::BTreeMap;

use crate::error::{Result, StacksError};
use crate::model::{normalize_title, Book, BookStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    books: BTreeMap<String, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its normalized key, replacing any existing one.
    /// Used when populating from storage.
    pub fn insert(&mut self, book: Book) {
        self.books.insert(normalize_title(&book.title), book);
    }

    /// Idempotent upsert: the record at `normalize_title(title)` becomes an
    /// available book with the trimmed display form of `title`.
    pub fn add_book(&mut self, title: &str) -> &Book {
        let key = normalize_title(title);
        self.books.insert(key.clone(), Book::new(title));
        &self.books[&key]
    }

    /// Delete the record for `title`. The catalog is unchanged on failure.
    pub fn remove_book(&mut self, title: &str) -> Result<Book> {
        self.books
            .remove(&normalize_title(title))
            .ok_or_else(|| StacksError::BookNotFound(title.to_string()))
    }

    /// Transition `title` to Borrowed and hand back the stored display
    /// title, so the caller can record what the patron actually holds.
    pub fn lend(&mut self, title: &str) -> Result<String> {
        match self.books.get_mut(&normalize_title(title)) {
            Some(book) if book.status == BookStatus::Available => {
                book.status = BookStatus::Borrowed;
                Ok(book.title.clone())
            }
            _ => Err(StacksError::NotAvailable(title.to_string())),
        }
    }

    /// Transition `title` to Available. No Borrowed guard; absent titles
    /// are ignored.
    pub fn mark_returned(&mut self, title: &str) {
        if let Some(book) = self.books.get_mut(&normalize_title(title)) {
            book.status = BookStatus::Available;
        }
    }

    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.get(&normalize_title(title))
    }

    /// Records in the catalog's stable iteration order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
