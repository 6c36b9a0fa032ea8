//! Query matching against catalog fields.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::{Book, language_name};

/// Which fields a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    /// Title, author, language, department, location, year and id
    #[default]
    All,
    Title,
    Author,
    /// Language code or its expanded name
    Language,
    Department,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Title => "title",
            Self::Author => "author",
            Self::Language => "language",
            Self::Department => "department",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "language" => Ok(Self::Language),
            "department" => Ok(Self::Department),
            other => Err(AppError::validation(format!("Unknown search type: {other}"))),
        }
    }
}

/// Primary catalog match used by [`super::search`]. `needle` must already be
/// lower-cased.
pub fn matches_catalog(book: &Book, needle: &str) -> bool {
    [&book.title, &book.author, &book.language, &book.department]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Post-fetch match for a search type. A blank query matches everything.
pub fn matches(book: &Book, query: &str, search_type: SearchType) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    let has = |field: &str| field.to_lowercase().contains(&q);

    match search_type {
        SearchType::Title => has(&book.title),
        SearchType::Author => has(&book.author),
        SearchType::Language => has(&book.language) || has(language_name(&book.language)),
        SearchType::Department => has(&book.department),
        SearchType::All => {
            has(&book.title)
                || has(&book.author)
                || has(&book.language)
                || has(&book.department)
                || has(&book.location)
                || has(&book.year)
                || has(&book.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: "A77".to_string(),
            title: "Kannada Kavya".to_string(),
            author: "Kuvempu".to_string(),
            isbn: "A77".to_string(),
            department: "Literature".to_string(),
            available: true,
            location: "Library".to_string(),
            language: "KAN".to_string(),
            year: "1967".to_string(),
            cost: "120".to_string(),
        }
    }

    #[test]
    fn test_all_widens_to_location_year_and_id() {
        let book = sample_book();
        assert!(matches(&book, "1967", SearchType::All));
        assert!(matches(&book, "a77", SearchType::All));
        assert!(matches(&book, "library", SearchType::All));
        assert!(!matches(&book, "1967", SearchType::Title));
    }

    #[test]
    fn test_language_matches_expanded_name() {
        let book = sample_book();
        assert!(matches(&book, "kannada", SearchType::Language));
        assert!(matches(&book, "kan", SearchType::Language));
        assert!(!matches(&book, "kuvempu", SearchType::Language));
    }

    #[test]
    fn test_blank_query_matches() {
        assert!(matches(&sample_book(), "  ", SearchType::Author));
    }

    #[test]
    fn test_search_type_from_str() {
        assert_eq!("Author".parse::<SearchType>().unwrap(), SearchType::Author);
        assert!("isbn".parse::<SearchType>().is_err());
    }
}
