//! # Command Layer
//!
//! One module per shell action. Commands hold the orchestration logic —
//! which entity mutates first, which errors propagate and which become
//! operator-facing messages — and are completely UI-agnostic: no stdout, no
//! prompts, no exit codes. They return a structured [`CmdResult`] and the
//! shell decides how to render it.
//!
//! Error handling is deliberately split:
//!
//! - `borrow` and `remove` raise their domain errors (`NotAvailable`,
//!   `BookNotFound`) to the caller, which prints them.
//! - `returns` catches the patron-side `NotBorrowed` itself and converts it
//!   into an error *message*, leaving the catalog untouched.
//! - Save failures never raise at all: [`persist`] downgrades them to a
//!   warning and the in-memory catalog stays authoritative.
//!
//! Testing lives here too: every command module carries `#[cfg(test)]`
//! tests against [`MemBackend`](crate::store::MemBackend).

use crate::catalog::Catalog;
use crate::model::Book;
use crate::store::CatalogBackend;

pub mod add;
pub mod borrow;
pub mod held;
pub mod list;
pub mod remove;
pub mod returns;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured command output: records touched, records to display, and
/// messages for the operator.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub held_titles: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Persist the catalog after a mutation. A failed save becomes a warning on
/// `result`; the in-memory catalog remains the source of truth for the rest
/// of the process lifetime.
pub(crate) fn persist<B: CatalogBackend>(
    backend: &mut B,
    catalog: &Catalog,
    result: &mut CmdResult,
) {
    if let Err(err) = backend.save(catalog) {
        result.add_message(CmdMessage::warning(format!("Error saving books: {}", err)));
    }
}
