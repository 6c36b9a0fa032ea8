//! Catalog record for the OPAC.

use serde::{Deserialize, Serialize};

/// Placeholder title assigned when the sheet has no title for a row.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// A book row from the published catalog sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Accession number, or a synthetic `book-{n}` id
    pub id: String,

    /// Book title
    pub title: String,

    /// First (personal) author
    pub author: String,

    /// Accession code
    pub isbn: String,

    /// Subject / department
    pub department: String,

    /// Always true; the sheet carries no circulation data
    pub available: bool,

    /// Shelf location
    pub location: String,

    /// Language code (e.g. `ENG`, `KAN`)
    pub language: String,

    /// Publication year
    pub year: String,

    /// Acquisition cost
    pub cost: String,
}

impl Book {
    /// Whether this record carries a usable title.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty() && self.title != UNKNOWN_TITLE
    }

    /// Full language name for the record's language code.
    pub fn language_name(&self) -> &str {
        language_name(&self.language)
    }

    /// Format the book for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{author}`, `{department}`
    /// - `{language}`, `{year}`, `{location}`, `{cost}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id)
            .replace("{title}", &self.title)
            .replace("{author}", &self.author)
            .replace("{department}", &self.department)
            .replace("{language}", self.language_name())
            .replace("{year}", &self.year)
            .replace("{location}", &self.location)
            .replace("{cost}", &self.cost)
    }
}

/// Expand a catalog language code to its full name.
///
/// Unknown codes are returned unchanged.
pub fn language_name(code: &str) -> &str {
    match code {
        "KAN" => "Kannada",
        "HIN" => "Hindi",
        "ENG" => "English",
        "SAN" => "Sanskrit",
        "TAM" => "Tamil",
        "TEL" => "Telugu",
        "MAL" => "Malayalam",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: "A1024".to_string(),
            title: "Organic Chemistry".to_string(),
            author: "Morrison".to_string(),
            isbn: "A1024".to_string(),
            department: "Chemistry".to_string(),
            available: true,
            location: "Library".to_string(),
            language: "ENG".to_string(),
            year: "1998".to_string(),
            cost: "450".to_string(),
        }
    }

    #[test]
    fn test_format() {
        let book = sample_book();
        let result = book.format("{title} by {author} ({language}, {year})");
        assert_eq!(result, "Organic Chemistry by Morrison (English, 1998)");
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("KAN"), "Kannada");
        assert_eq!(language_name("FRE"), "FRE");
    }

    #[test]
    fn test_has_title() {
        let mut book = sample_book();
        assert!(book.has_title());
        book.title = UNKNOWN_TITLE.to_string();
        assert!(!book.has_title());
        book.title.clear();
        assert!(!book.has_title());
    }
}
