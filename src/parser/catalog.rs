//! Catalog (OPAC) sheet parser.

use super::{Row, non_blank_lines, parse_line};
use crate::models::{Book, UNKNOWN_TITLE};

/// Zero-based index of the header line; lines before it are sheet titles.
pub const CATALOG_HEADER_LINE: usize = 3;

/// Literal header texts of the catalog sheet.
pub struct CatalogColumns;

impl CatalogColumns {
    pub const ACCESSION_NO: &'static str = "ACCESSION_NO (M)";
    pub const TITLE: &'static str = "TITLE (M)";
    pub const AUTHOR: &'static str = "FIRST AUTHOR (personal Author only)- M";
    pub const SUBJECT: &'static str = "SUBJECT ( M)";
    pub const LANGUAGE: &'static str = "LANGUAGE CODE (M)";
    pub const YEAR: &'static str = "YEAR (yyyy)(M)";
    pub const COST: &'static str = "COST (M)";
}

/// Parse the catalog CSV export into books.
///
/// Rows whose title is empty (or the `Unknown Title` placeholder) are
/// dropped. Documents with no data line after the header yield nothing.
pub fn parse_books(csv_text: &str) -> Vec<Book> {
    let lines = non_blank_lines(csv_text);
    if lines.len() <= CATALOG_HEADER_LINE + 1 {
        return Vec::new();
    }

    let headers = parse_line(lines[CATALOG_HEADER_LINE]);

    lines[CATALOG_HEADER_LINE + 1..]
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let row = Row::new(&headers, parse_line(line));
            book_from_row(&row, index)
        })
        .filter(Book::has_title)
        .collect()
}

fn book_from_row(row: &Row, index: usize) -> Book {
    Book {
        id: row.get_or(CatalogColumns::ACCESSION_NO, &format!("book-{index}")),
        title: row.get_or(CatalogColumns::TITLE, UNKNOWN_TITLE),
        author: row.get_or(CatalogColumns::AUTHOR, "Unknown Author"),
        isbn: row.get_or(CatalogColumns::ACCESSION_NO, ""),
        department: row.get_or(CatalogColumns::SUBJECT, "General"),
        available: true,
        location: "Library".to_string(),
        language: row.get_or(CatalogColumns::LANGUAGE, "Unknown"),
        year: row.get_or(CatalogColumns::YEAR, ""),
        cost: row.get_or(CatalogColumns::COST, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ACCESSION_NO (M),TITLE (M),FIRST AUTHOR (personal Author only)- M,SUBJECT ( M),LANGUAGE CODE (M),YEAR (yyyy)(M),COST (M)";

    fn sheet(rows: &[&str]) -> String {
        let mut text = String::from("College Library\nBook Register\nExported 2024\n");
        text.push_str(HEADER);
        text.push('\n');
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_discards_row_with_empty_title() {
        let text = sheet(&[
            r#"A101,"Physics, Vol 1",Resnick,Physics,ENG,2001,550"#,
            "A102,,Halliday,Physics,ENG,2003,400",
        ]);
        let books = parse_books(&text);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "A101");
        assert_eq!(books[0].title, "Physics, Vol 1");
        assert_eq!(books[0].author, "Resnick");
        assert_eq!(books[0].isbn, "A101");
        assert_eq!(books[0].location, "Library");
        assert!(books[0].available);
    }

    #[test]
    fn test_defaults_for_missing_columns() {
        let text = sheet(&[",Botany Basics"]);
        let books = parse_books(&text);

        assert_eq!(books.len(), 1);
        let book = &books[0];
        assert_eq!(book.id, "book-0");
        assert_eq!(book.isbn, "");
        assert_eq!(book.author, "Unknown Author");
        assert_eq!(book.department, "General");
        assert_eq!(book.language, "Unknown");
        assert_eq!(book.year, "");
    }

    #[test]
    fn test_synthetic_id_uses_data_row_index() {
        let text = sheet(&["A1,First", ",Second", ",Third"]);
        let ids: Vec<_> = parse_books(&text).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["A1", "book-1", "book-2"]);
    }

    #[test]
    fn test_short_document_is_empty() {
        assert!(parse_books("").is_empty());
        assert!(parse_books(&sheet(&[])).is_empty());
        assert!(parse_books("a\nb\nc\nd").is_empty());
    }

    #[test]
    fn test_blank_lines_do_not_shift_offset() {
        let text = format!("Title\n\nSub\n\nInfo\n{HEADER}\n\nA9,Zoology,Kotpal,Zoology,KAN,2010,300\n");
        let books = parse_books(&text);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].language, "KAN");
    }

    #[test]
    fn test_header_text_must_match_exactly() {
        let text = "t\nt\nt\nACCESSION_NO,TITLE (M)\nA1,Genetics\n";
        let books = parse_books(text);
        assert_eq!(books[0].id, "book-0");
        assert_eq!(books[0].title, "Genetics");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let text = sheet(&["A1,One,X,Y,ENG,2000,1", "A2,Two,X,Y,HIN,2001,2"]);
        assert_eq!(parse_books(&text), parse_books(&text));
    }
}
