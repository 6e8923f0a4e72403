use crate::catalog::Catalog;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Librarian;
use crate::store::CatalogBackend;

/// Delete a title from the catalog. Requires a librarian capability.
/// `BookNotFound` propagates to the caller; nothing is persisted on failure.
pub fn run<B: CatalogBackend>(
    catalog: &mut Catalog,
    backend: &mut B,
    _librarian: &Librarian,
    title: &str,
) -> Result<CmdResult> {
    let book = catalog.remove_book(title)?;
    let mut result = CmdResult::default();
    persist(backend, catalog, &mut result);
    result.add_message(CmdMessage::success(format!("Book '{}' removed", title)));
    result.affected_books.push(book);
    Ok(result)
}
