use std::io;

use super::CatalogBackend;
use crate::catalog::Catalog;
use crate::error::{Result, StacksError};

/// In-memory backend for testing logic without filesystem I/O.
#[derive(Debug, Default)]
pub struct MemBackend {
    stored: Option<Catalog>,
    fail_saves: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that behaves as if `catalog` had been saved previously.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            stored: Some(catalog),
            fail_saves: false,
        }
    }

    /// Make every subsequent save fail, to exercise the best-effort
    /// persistence path.
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The last successfully saved catalog, if any.
    pub fn stored(&self) -> Option<&Catalog> {
        self.stored.as_ref()
    }
}

impl CatalogBackend for MemBackend {
    fn load(&self) -> Result<Catalog> {
        Ok(self.stored.clone().unwrap_or_default())
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        if self.fail_saves {
            return Err(StacksError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "saving disabled",
            )));
        }
        self.stored = Some(catalog.clone());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.stored.is_some()
    }
}
