//! The menu loop. Reads one choice per iteration, prompts for whatever the
//! action needs, dispatches to the library facade, and renders the result.
//! Domain errors are printed and the loop continues; only EOF or the exit
//! option ends it.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Utc;
use stacksapp::store::CatalogBackend;
use stacksapp::{Librarian, Library, Patron};

use super::print;

fn print_menu() {
    println!();
    println!("Library Management System");
    println!("1. View Available Books");
    println!("2. Borrow Book");
    println!("3. Return Book");
    println!("4. View Borrowed Books");
    println!("5. Add Book (Librarian)");
    println!("6. Remove Book (Librarian)");
    println!("7. Exit");
}

/// Prompt for one trimmed line. `None` means stdin hit EOF.
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    std::io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn run_loop<B: CatalogBackend>(
    library: &mut Library<B>,
    patron: &mut Patron,
    librarian: &Librarian,
    input: &mut impl BufRead,
) -> Result<()> {
    loop {
        print_menu();
        let choice = match prompt(input, "Enter your choice: ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                println!();
                println!("Available Books:");
                let result = library.list_books();
                print::print_books(&result.listed_books);
            }
            "2" => {
                let title = match prompt(input, "Enter the book title to borrow: ")? {
                    Some(title) => title,
                    None => break,
                };
                match library.borrow_book(patron, &title) {
                    Ok(result) => print::print_messages(&result.messages),
                    Err(err) => print::print_error(&err),
                }
            }
            "3" => {
                let title = match prompt(input, "Enter the book title to return: ")? {
                    Some(title) => title,
                    None => break,
                };
                // No per-book borrow record exists to look the real date up
                // from, so the current time stands in for it.
                let borrowed_at = Utc::now();
                let result = library.return_book(patron, &title, borrowed_at);
                print::print_messages(&result.messages);
            }
            "4" => {
                println!();
                println!("Borrowed Books:");
                let result = library.held_books(patron);
                print::print_held(&result.held_titles);
            }
            "5" => {
                let title = match prompt(input, "Enter the book title to add: ")? {
                    Some(title) => title,
                    None => break,
                };
                if title.is_empty() {
                    println!("Title cannot be empty.");
                    continue;
                }
                let result = library.add_book(librarian, &title);
                print::print_messages(&result.messages);
            }
            "6" => {
                let title = match prompt(input, "Enter the book title to remove: ")? {
                    Some(title) => title,
                    None => break,
                };
                match library.remove_book(librarian, &title) {
                    Ok(result) => print::print_messages(&result.messages),
                    Err(err) => print::print_error(&err),
                }
            }
            "7" => {
                println!("Exiting the Library Management System.");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}
