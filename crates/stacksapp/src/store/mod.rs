//! # Storage Layer
//!
//! The [`CatalogBackend`] trait separates the "how" of persistence from the
//! catalog's business rules. The in-memory [`Catalog`](crate::catalog::Catalog)
//! is the source of truth for the whole process lifetime; the backend is a
//! best-effort mirror that is fully rewritten after every mutation.
//!
//! ## Backing file format
//!
//! ```text
//! title,status
//! The Hobbit,available
//! "Dune, Messiah",borrowed
//! ```
//!
//! A header row, then one row per record in catalog iteration order. Titles
//! containing the delimiter are quoted. The reader is deliberately tolerant:
//! rows with fewer than two fields are skipped, a `title,status` header is
//! skipped wherever it appears, and unrecognized status values repair to
//! `available`. A missing file is an empty catalog, not an error.
//!
//! ## Durability
//!
//! Saves overwrite the file in place, with no tmp-and-rename step and no
//! write-ahead log. A crash mid-write can truncate the file; the contract is
//! only "last successful save wins", and a failed save never rolls back the
//! in-memory mutation that triggered it.
//!
//! ## Implementations
//!
//! - [`FsBackend`]: the production file-backed store.
//! - [`MemBackend`]: test double; can be primed with a catalog and flipped
//!   into a failing mode to exercise save-failure handling.

use crate::catalog::Catalog;
use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;

pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

/// Abstract interface for loading and persisting the catalog.
pub trait CatalogBackend {
    /// Read the full catalog. Absent backing storage yields an empty
    /// catalog; only real I/O or parse failures are errors.
    fn load(&self) -> Result<Catalog>;

    /// Fully overwrite the backing storage with `catalog`'s records.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;

    /// Whether backing storage already exists (drives the first-run notice).
    fn exists(&self) -> bool;
}
