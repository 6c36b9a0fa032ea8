//! OPAC page rendering.

use crate::models::Book;
use crate::search::OpacSession;
use crate::utils::console;

/// Display template for one catalog row.
pub const BOOK_TEMPLATE: &str = "{title} by {author} | {department} | {language} | {year} | {location}";

/// Status line for the current result set.
pub fn status_line(session: &OpacSession) -> String {
    if let Some(error) = session.error() {
        return error.to_string();
    }
    if session.books().is_empty() {
        return if session.query().is_empty() {
            "No books available".to_string()
        } else {
            format!("No books found for \"{}\"", session.query())
        };
    }
    format!(
        "Showing {} of {} books",
        session.books().len(),
        session.total()
    )
}

/// Render one book row with the language code expanded.
pub fn book_line(book: &Book) -> String {
    let mut display = book.clone();
    display.language = book.language_name().to_string();
    display.format(BOOK_TEMPLATE)
}

pub fn render(session: &OpacSession) {
    console::header("OPAC Search");
    if !session.query().is_empty() {
        console::line(&format!(
            "Query: \"{}\" ({})",
            session.query(),
            session.search_type()
        ));
    }
    console::section(&status_line(session));
    for book in session.books() {
        let marker = if book.available { "Available" } else { "Issued" };
        console::sub_item(&format!("{} [{}]", book_line(book), marker));
    }
    if session.has_more() {
        console::line("More results available (use --pages to load more)");
    }
}
