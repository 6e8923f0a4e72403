use colored::Colorize;
use stacksapp::commands::{CmdMessage, MessageLevel};
use stacksapp::{Book, StacksError};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: &StacksError) {
    println!("{}", format!("Error: {}", err).red());
}

pub(super) fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books available");
        return;
    }
    for book in books {
        println!("- {} ({})", book.title, book.status);
    }
}

pub(super) fn print_held(titles: &[String]) {
    if titles.is_empty() {
        println!("No books borrowed");
        return;
    }
    for title in titles {
        println!("- {}", title);
    }
}
