use thiserror::Error;

/// Failures surfaced by the lending core.
///
/// The `Display` strings for the domain variants are the exact messages the
/// shell shows the operator, so the variants carry the offending title for
/// callers and tests rather than for formatting.
#[derive(Error, Debug)]
pub enum StacksError {
    #[error("Book not found in the system.")]
    BookNotFound(String),

    #[error("Book is not available.")]
    NotAvailable(String),

    #[error("Book not found in borrowed list.")]
    NotBorrowed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, StacksError>;
