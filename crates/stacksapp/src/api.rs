//! Facade between a UI and the command layer.
//!
//! [`Library`] owns the catalog, its storage backend, and the return
//! ledger. It exposes one method per shell action, each a thin dispatch to
//! the matching command module. Patron and librarian are explicit
//! parameters everywhere: there is no module-level user, and the facade
//! never prints.

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Librarian, Patron, ReturnLedger};
use crate::store::CatalogBackend;

pub struct Library<B: CatalogBackend> {
    backend: B,
    catalog: Catalog,
    ledger: ReturnLedger,
}

impl<B: CatalogBackend> Library<B> {
    /// Load the catalog from `backend`. A missing backing store is an empty
    /// catalog plus an informational note, not an error.
    pub fn open(backend: B) -> Result<(Self, Vec<CmdMessage>)> {
        let mut notes = Vec::new();
        if !backend.exists() {
            notes.push(CmdMessage::info(
                "No existing books file found. Creating a new one.",
            ));
        }
        let catalog = backend.load()?;
        Ok((
            Self {
                backend,
                catalog,
                ledger: ReturnLedger::new(),
            },
            notes,
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ReturnLedger {
        &self.ledger
    }

    pub fn list_books(&self) -> CmdResult {
        commands::list::run(&self.catalog)
    }

    pub fn borrow_book(&mut self, patron: &mut Patron, title: &str) -> Result<CmdResult> {
        commands::borrow::run(&mut self.catalog, &mut self.backend, patron, title)
    }

    pub fn return_book(
        &mut self,
        patron: &mut Patron,
        title: &str,
        borrowed_at: DateTime<Utc>,
    ) -> CmdResult {
        commands::returns::run(
            &mut self.catalog,
            &mut self.backend,
            patron,
            &mut self.ledger,
            title,
            borrowed_at,
        )
    }

    pub fn held_books(&self, patron: &Patron) -> CmdResult {
        commands::held::run(patron)
    }

    pub fn add_book(&mut self, librarian: &Librarian, title: &str) -> CmdResult {
        commands::add::run(&mut self.catalog, &mut self.backend, librarian, title)
    }

    pub fn remove_book(&mut self, librarian: &Librarian, title: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.catalog, &mut self.backend, librarian, title)
    }
}
