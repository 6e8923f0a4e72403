//! # stacksapp: library-lending core
//!
//! The UI-agnostic engine behind the `stacks` shell: a catalog of book
//! titles keyed by normalized name, single-patron lending state, a flat
//! overdue fee, and plain-file persistence.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  API Layer (api.rs)                         │
//! │  - Library facade: one method per action    │
//! └─────────────────────┬───────────────────────┘
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                 │
//! │  - Orchestration + error policy             │
//! │  - Structured CmdResult, no terminal I/O    │
//! └─────────────────────┬───────────────────────┘
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │  Catalog + Model + Store                    │
//! │  - State transitions and invariants         │
//! │  - CatalogBackend: file or memory           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything here takes normal Rust values and returns normal Rust types;
//! rendering, prompts, and exit codes belong to the shell.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
pub mod penalty;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use api::Library;
pub use catalog::Catalog;
pub use error::{Result, StacksError};
pub use model::{normalize_title, Book, BookStatus, Librarian, Patron, ReturnLedger};
pub use penalty::overdue_penalty;
