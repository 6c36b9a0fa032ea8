//! Parsers for published spreadsheet CSV exports.
//!
//! - `parse_line`: quote-aware single-line splitter shared by every sheet
//! - `parse_books`: catalog sheet (headers on line 4, data from line 5)
//! - `parse_question_papers`: archive sheet (headers on line 1)
//! - `parse_eresources`: resource sheet, columns resolved via `ColumnMap`
//!
//! Parsing never fails on malformed rows; missing values fall back to
//! per-field defaults. Only the e-resource parser reports an error, when
//! no header resolves to a required field.

mod aliases;
mod catalog;
mod eresources;
mod line;
mod question_papers;

use std::collections::HashMap;

pub use aliases::{ColumnMap, ResourceField};
pub use catalog::{CATALOG_HEADER_LINE, CatalogColumns, parse_books};
pub use eresources::parse_eresources;
pub use line::{non_blank_lines, parse_line};
pub use question_papers::parse_question_papers;

/// One data row keyed by header text.
///
/// Values missing from a short row read as empty strings. When a header is
/// repeated, the rightmost column wins.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Zip headers with the values of a parsed line.
    pub fn new(headers: &[String], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let cells = headers
            .iter()
            .map(|header| (header.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { cells }
    }

    /// Raw value for a header, if the header exists.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    /// Value for a header, or `default` when absent or empty.
    pub fn get_or(&self, header: &str, default: &str) -> String {
        match self.get(header) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => default.to_string(),
        }
    }
}
