use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use super::CatalogBackend;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Book, BookStatus};

/// File-backed catalog storage (`books.csv` by default, path supplied by
/// the caller).
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_header(title: &str, status: &str) -> bool {
    title.trim().eq_ignore_ascii_case("title") && status.trim().eq_ignore_ascii_case("status")
}

impl CatalogBackend for FsBackend {
    fn load(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        if !self.path.exists() {
            return Ok(catalog);
        }

        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        for record in reader.records() {
            let record = record?;
            let (title, status) = match (record.get(0), record.get(1)) {
                (Some(title), Some(status)) => (title, status),
                // fewer than two fields: nothing usable in the row
                _ => continue,
            };
            if is_header(title, status) {
                continue;
            }
            let mut book = Book::new(title);
            book.status = BookStatus::parse_lenient(status);
            catalog.insert(book);
        }
        Ok(catalog)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        // In-place full rewrite; durability is "last successful save wins"
        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(["title", "status"])?;
        for book in catalog.books() {
            writer.serialize(book)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
