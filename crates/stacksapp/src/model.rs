//! # Domain Model: Titles, Patrons, and the Return Ledger
//!
//! The central problem this module solves is title identity. Operators type
//! titles free-form: sometimes with stray spaces, sometimes in the wrong
//! case. If `"The  Hobbit"` and `"the hobbit"` produced two catalog entries,
//! every lookup downstream would be a coin flip.
//!
//! ## Normalized vs display titles
//!
//! Every title therefore has two forms:
//!
//! - **Display title**: what the operator typed, trimmed, case preserved.
//!   Stored inside [`Book`] and shown everywhere.
//! - **Normalized title**: [`normalize_title`]'s whitespace-collapsed,
//!   lowercased form. Used only as the catalog lookup key and never stored
//!   inside the record.
//!
//! A patron's held list keeps display titles verbatim (duplicates allowed);
//! returning matches on the exact display string, not the normalized key.
//!
//! ## Roles
//!
//! [`Patron`] and [`Librarian`] are independent record types. A librarian is
//! not a kind of patron; librarian-only operations simply take a
//! `&Librarian` as a capability argument.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StacksError};

/// Canonical lookup key for a title: whitespace runs collapsed to single
/// spaces (which also trims), then Unicode-lowercased. Idempotent.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl BookStatus {
    /// Parse a status field from storage. Anything that is not recognizably
    /// "borrowed" (case-insensitive) repairs to `Available`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "borrowed" => Self::Borrowed,
            _ => Self::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Borrowed => "borrowed",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog record: the display title plus its lending status.
/// The normalized key lives in the catalog map, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub status: BookStatus,
}

impl Book {
    /// New record with the trimmed display title, available for lending.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            status: BookStatus::Available,
        }
    }
}

/// A borrower and the display titles they currently hold.
#[derive(Debug, Clone)]
pub struct Patron {
    pub id: String,
    pub name: String,
    held: Vec<String>,
}

impl Patron {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            held: Vec::new(),
        }
    }

    /// Append a title to the held list. No dedup, no capacity limit.
    pub fn borrow_title(&mut self, title: impl Into<String>) {
        self.held.push(title.into());
    }

    /// Remove the first exact-string occurrence of `title`.
    pub fn return_title(&mut self, title: &str) -> Result<()> {
        match self.held.iter().position(|held| held == title) {
            Some(at) => {
                self.held.remove(at);
                Ok(())
            }
            None => Err(StacksError::NotBorrowed(title.to_string())),
        }
    }

    pub fn held_titles(&self) -> &[String] {
        &self.held
    }
}

/// Identity of the staff role. Holding a value of this type is what
/// authorizes catalog edits; there is no patron subtyping.
#[derive(Debug, Clone)]
pub struct Librarian {
    pub id: String,
    pub name: String,
}

impl Librarian {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Last return timestamp per patron. Written on every successful return and
/// never read back by the application; kept in memory only.
#[derive(Debug, Default)]
pub struct ReturnLedger {
    returns: HashMap<String, DateTime<Utc>>,
}

impl ReturnLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_return(&mut self, patron_id: &str, when: DateTime<Utc>) {
        self.returns.insert(patron_id.to_string(), when);
    }

    pub fn last_return(&self, patron_id: &str) -> Option<DateTime<Utc>> {
        self.returns.get(patron_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize_title("The  Hobbit"), "the hobbit");
        assert_eq!(normalize_title("  DUNE "), "dune");
        assert_eq!(normalize_title("war\tand\npeace"), "war and peace");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["", "  ", "The  Hobbit", "ÜBER  Alles", "a b c"] {
            let once = normalize_title(raw);
            assert_eq!(normalize_title(&once), once);
        }
    }

    #[test]
    fn status_parse_is_lenient() {
        assert_eq!(BookStatus::parse_lenient("borrowed"), BookStatus::Borrowed);
        assert_eq!(BookStatus::parse_lenient(" BORROWED "), BookStatus::Borrowed);
        assert_eq!(BookStatus::parse_lenient("available"), BookStatus::Available);
        assert_eq!(BookStatus::parse_lenient("lost!"), BookStatus::Available);
        assert_eq!(BookStatus::parse_lenient(""), BookStatus::Available);
    }

    #[test]
    fn book_new_trims_but_preserves_inner_spacing() {
        let book = Book::new("  The  Hobbit  ");
        assert_eq!(book.title, "The  Hobbit");
        assert_eq!(book.status, BookStatus::Available);
    }

    #[test]
    fn patron_return_removes_first_occurrence_only() {
        let mut patron = Patron::new("U001", "Alice");
        patron.borrow_title("Dune");
        patron.borrow_title("Dune");
        patron.return_title("Dune").unwrap();
        assert_eq!(patron.held_titles(), ["Dune"]);
    }

    #[test]
    fn patron_return_is_exact_match() {
        let mut patron = Patron::new("U001", "Alice");
        patron.borrow_title("Dune");
        match patron.return_title("dune") {
            Err(StacksError::NotBorrowed(title)) => assert_eq!(title, "dune"),
            other => panic!("expected NotBorrowed, got {:?}", other),
        }
        assert_eq!(patron.held_titles(), ["Dune"]);
    }

    #[test]
    fn ledger_keeps_latest_return_per_patron() {
        let mut ledger = ReturnLedger::new();
        let first = Utc::now();
        let second = first + chrono::Duration::days(1);
        ledger.record_return("U001", first);
        ledger.record_return("U001", second);
        assert_eq!(ledger.last_return("U001"), Some(second));
        assert_eq!(ledger.last_return("U002"), None);
    }
}
