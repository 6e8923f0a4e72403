use crate::catalog::Catalog;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::model::Librarian;
use crate::store::CatalogBackend;

/// Upsert a title into the catalog as available. Requires a librarian
/// capability; the value itself is the authorization. Re-adding an existing
/// title resets it to available, borrowed or not.
pub fn run<B: CatalogBackend>(
    catalog: &mut Catalog,
    backend: &mut B,
    _librarian: &Librarian,
    title: &str,
) -> CmdResult {
    let book = catalog.add_book(title).clone();
    let mut result = CmdResult::default();
    persist(backend, catalog, &mut result);
    result.add_message(CmdMessage::success(format!("Book '{}' added", book.title)));
    result.affected_books.push(book);
    result
}
