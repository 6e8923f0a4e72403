use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::model::{Patron, ReturnLedger};
use crate::penalty::overdue_penalty;
use crate::store::CatalogBackend;

/// Return a title and settle the overdue fee.
///
/// The patron side runs first and its `NotBorrowed` is handled here, as an
/// error message on the result, so a typo never aborts the shell and never
/// touches the catalog. On success the catalog is marked returned, the
/// ledger records the return time for the patron, and the fee is computed
/// from the caller-supplied borrow time.
///
/// There is no per-book borrow record to look `borrowed_at` up from, so the
/// caller attributes the loan period; with more than one patron this could
/// not charge the right person. Known limitation, kept as-is.
pub fn run<B: CatalogBackend>(
    catalog: &mut Catalog,
    backend: &mut B,
    patron: &mut Patron,
    ledger: &mut ReturnLedger,
    title: &str,
    borrowed_at: DateTime<Utc>,
) -> CmdResult {
    let mut result = CmdResult::default();

    if let Err(err) = patron.return_title(title) {
        result.add_message(CmdMessage::error(format!("Error: {}", err)));
        return result;
    }

    catalog.mark_returned(title);
    persist(backend, catalog, &mut result);

    let now = Utc::now();
    ledger.record_return(&patron.id, now);

    let penalty = overdue_penalty(borrowed_at, now);
    if penalty > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Overdue penalty for '{}': ${}",
            title, penalty
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Book '{}' returned successfully.",
            title
        )));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::commands::MessageLevel;
    use crate::model::BookStatus;
    use crate::store::MemBackend;

    fn lent_out() -> (Catalog, MemBackend, Patron, ReturnLedger) {
        let mut catalog = Catalog::new();
        catalog.add_book("Dune");
        let display = catalog.lend("Dune").unwrap();
        let mut patron = Patron::new("U001", "Alice");
        patron.borrow_title(display);
        (catalog, MemBackend::new(), patron, ReturnLedger::new())
    }

    #[test]
    fn on_time_return_reports_success_and_records_the_ledger() {
        let (mut catalog, mut backend, mut patron, mut ledger) = lent_out();

        let result = run(
            &mut catalog,
            &mut backend,
            &mut patron,
            &mut ledger,
            "Dune",
            Utc::now() - Duration::days(5),
        );

        assert_eq!(
            result.messages.last().unwrap().content,
            "Book 'Dune' returned successfully."
        );
        assert_eq!(catalog.get("Dune").unwrap().status, BookStatus::Available);
        assert!(patron.held_titles().is_empty());
        assert!(ledger.last_return("U001").is_some());
        assert_eq!(
            backend.stored().unwrap().get("Dune").unwrap().status,
            BookStatus::Available
        );
    }

    #[test]
    fn overdue_return_charges_a_flat_daily_fee() {
        let (mut catalog, mut backend, mut patron, mut ledger) = lent_out();

        let result = run(
            &mut catalog,
            &mut backend,
            &mut patron,
            &mut ledger,
            "Dune",
            Utc::now() - Duration::days(20),
        );

        let message = result.messages.last().unwrap();
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(message.content, "Overdue penalty for 'Dune': $6");
    }

    #[test]
    fn returning_a_title_not_held_leaves_everything_untouched() {
        let (mut catalog, mut backend, mut patron, mut ledger) = lent_out();

        // exact-string match: the held title is "Dune", not "dune"
        let result = run(
            &mut catalog,
            &mut backend,
            &mut patron,
            &mut ledger,
            "dune",
            Utc::now(),
        );

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(
            result.messages[0].content,
            "Error: Book not found in borrowed list."
        );
        assert_eq!(catalog.get("Dune").unwrap().status, BookStatus::Borrowed);
        assert_eq!(patron.held_titles(), ["Dune"]);
        assert!(ledger.last_return("U001").is_none());
        assert!(backend.stored().is_none());
    }
}
