use crate::commands::CmdResult;
use crate::model::Patron;

/// The patron's held titles, in borrow order. Read-only.
pub fn run(patron: &Patron) -> CmdResult {
    let mut result = CmdResult::default();
    result.held_titles = patron.held_titles().to_vec();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_borrow_order_and_duplicates() {
        let mut patron = Patron::new("U001", "Alice");
        patron.borrow_title("Dune");
        patron.borrow_title("The Hobbit");
        patron.borrow_title("Dune");

        let result = run(&patron);
        assert_eq!(result.held_titles, ["Dune", "The Hobbit", "Dune"]);
    }
}
