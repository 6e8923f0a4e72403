use crate::catalog::Catalog;
use crate::commands::CmdResult;

/// All books with their status, in catalog order. Read-only.
pub fn run(catalog: &Catalog) -> CmdResult {
    let mut result = CmdResult::default();
    result.listed_books = catalog.books().cloned().collect();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookStatus;

    #[test]
    fn lists_every_record_with_status() {
        let mut catalog = Catalog::new();
        catalog.add_book("Dune");
        catalog.add_book("The Hobbit");
        catalog.lend("Dune").unwrap();

        let result = run(&catalog);
        assert_eq!(result.listed_books.len(), 2);
        let dune = result
            .listed_books
            .iter()
            .find(|b| b.title == "Dune")
            .unwrap();
        assert_eq!(dune.status, BookStatus::Borrowed);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let result = run(&Catalog::new());
        assert!(result.listed_books.is_empty());
        assert!(result.messages.is_empty());
    }
}
