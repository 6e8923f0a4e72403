//! Interactive shell: wiring, menu loop, and rendering.

mod print;
mod shell;

use anyhow::Result;
use stacksapp::store::FsBackend;
use stacksapp::{Librarian, Library, Patron};

/// Backing store, relative to the working directory.
const BOOKS_FILE: &str = "books.csv";

pub fn run() -> Result<()> {
    let backend = FsBackend::new(BOOKS_FILE);
    let (mut library, notes) = Library::open(backend)?;
    print::print_messages(&notes);

    let mut patron = Patron::new("U001", "Alice");
    let librarian = Librarian::new("L001", "Admin");

    let stdin = std::io::stdin();
    shell::run_loop(&mut library, &mut patron, &librarian, &mut stdin.lock())
}
