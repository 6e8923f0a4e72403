use crate::catalog::Catalog;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Patron;
use crate::store::CatalogBackend;

/// Lend a title to the patron. The catalog transition happens first and its
/// `NotAvailable` propagates without touching the patron; on success the
/// patron records the catalog's display form of the title, preserving the
/// original casing regardless of what was typed.
pub fn run<B: CatalogBackend>(
    catalog: &mut Catalog,
    backend: &mut B,
    patron: &mut Patron,
    title: &str,
) -> Result<CmdResult> {
    let display_title = catalog.lend(title)?;
    patron.borrow_title(display_title.clone());

    let mut result = CmdResult::default();
    persist(backend, catalog, &mut result);
    result.add_message(CmdMessage::success(format!("You borrowed '{}'", title)));
    if let Some(book) = catalog.get(&display_title) {
        result.affected_books.push(book.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StacksError;
    use crate::model::BookStatus;
    use crate::store::MemBackend;

    #[test]
    fn borrow_transitions_the_record_and_updates_the_patron() {
        let mut catalog = Catalog::new();
        catalog.add_book("Dune");
        let mut backend = MemBackend::new();
        let mut patron = Patron::new("U001", "Alice");

        let result = run(&mut catalog, &mut backend, &mut patron, "dune").unwrap();

        assert_eq!(result.messages[0].content, "You borrowed 'dune'");
        assert_eq!(catalog.get("dune").unwrap().status, BookStatus::Borrowed);
        // held list carries the display title, not what was typed
        assert_eq!(patron.held_titles(), ["Dune"]);
        assert_eq!(
            backend.stored().unwrap().get("dune").unwrap().status,
            BookStatus::Borrowed
        );
    }

    #[test]
    fn borrowing_an_unavailable_title_leaves_the_patron_alone() {
        let mut catalog = Catalog::new();
        catalog.add_book("Dune");
        catalog.lend("Dune").unwrap();
        let mut backend = MemBackend::new();
        let mut patron = Patron::new("U001", "Alice");

        let result = run(&mut catalog, &mut backend, &mut patron, "Dune");

        assert!(matches!(result, Err(StacksError::NotAvailable(_))));
        assert!(patron.held_titles().is_empty());
        assert!(backend.stored().is_none());
    }

    #[test]
    fn borrowing_an_unknown_title_fails_the_same_way() {
        let mut catalog = Catalog::new();
        let mut backend = MemBackend::new();
        let mut patron = Patron::new("U001", "Alice");

        let result = run(&mut catalog, &mut backend, &mut patron, "Ghost");

        assert!(matches!(result, Err(StacksError::NotAvailable(_))));
    }
}
