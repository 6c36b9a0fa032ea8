//! Header alias table for the e-resources sheet.
//!
//! Editors spell the same column several ways (`url`, `URL`, `Link`, ...).
//! Each logical field lists its accepted spellings in priority order; the
//! first spelling present in the header row wins.

use std::collections::HashMap;

use crate::error::{AppError, Result};

/// Logical columns of an e-resource row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceField {
    Title,
    Description,
    Category,
    Url,
    Thumbnail,
    Icon,
    AccessType,
}

impl ResourceField {
    pub const ALL: [ResourceField; 7] = [
        Self::Title,
        Self::Description,
        Self::Category,
        Self::Url,
        Self::Thumbnail,
        Self::Icon,
        Self::AccessType,
    ];

    /// Accepted header spellings, highest priority first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Title => &["title", "Title"],
            Self::Description => &["description", "Description", "desc"],
            Self::Category => &["category", "Category", "cat"],
            Self::Url => &[
                "url", "URL", "link", "Link", "LinkURL", "LinkUrl", "linkUrl",
            ],
            Self::Thumbnail => &["thumbnail", "Thumbnail", "image"],
            Self::Icon => &["icon", "Icon"],
            Self::AccessType => &["accessType"],
        }
    }

    /// Whether a sheet without this column is rejected.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Title)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Category => "category",
            Self::Url => "url",
            Self::Thumbnail => "thumbnail",
            Self::Icon => "icon",
            Self::AccessType => "access_type",
        }
    }
}

/// Column positions resolved from a header row.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: HashMap<ResourceField, usize>,
}

impl ColumnMap {
    /// Resolve every field against the header row.
    ///
    /// Fails with [`AppError::MissingFields`] naming each required field
    /// that no header matches.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let mut columns = HashMap::new();
        let mut missing = Vec::new();

        for field in ResourceField::ALL {
            let position = field
                .aliases()
                .iter()
                .find_map(|alias| headers.iter().position(|h| h == alias));

            match position {
                Some(index) => {
                    columns.insert(field, index);
                }
                None if field.is_required() => missing.push(field.name().to_string()),
                None => {}
            }
        }

        if !missing.is_empty() {
            return Err(AppError::MissingFields { fields: missing });
        }
        Ok(Self { columns })
    }

    /// Whether the header row has a column for `field`.
    pub fn has(&self, field: ResourceField) -> bool {
        self.columns.contains_key(&field)
    }

    /// Trimmed value of `field` in a parsed row; empty when the row is short.
    pub fn value<'a>(&self, field: ResourceField, values: &'a [String]) -> Option<&'a str> {
        let index = *self.columns.get(&field)?;
        Some(values.get(index).map_or("", |v| v.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_alias_variants() {
        let map = ColumnMap::resolve(&headers(&["Title", "Desc", "LinkURL", "cat"])).unwrap();
        let row = headers(&["JSTOR", "ignored", "https://jstor.org", "Journals"]);

        assert_eq!(map.value(ResourceField::Title, &row), Some("JSTOR"));
        assert_eq!(map.value(ResourceField::Url, &row), Some("https://jstor.org"));
        assert_eq!(map.value(ResourceField::Category, &row), Some("Journals"));
        // "Desc" is not an accepted spelling
        assert_eq!(map.value(ResourceField::Description, &row), None);
    }

    #[test]
    fn test_alias_priority_order() {
        let map = ColumnMap::resolve(&headers(&["Link", "title", "url"])).unwrap();
        let row = headers(&["second", "T", "first"]);
        assert_eq!(map.value(ResourceField::Url, &row), Some("first"));
    }

    #[test]
    fn test_missing_required_field() {
        let err = ColumnMap::resolve(&headers(&["name", "url"])).unwrap_err();
        match err {
            AppError::MissingFields { fields } => assert_eq!(fields, vec!["title"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_reads_empty() {
        let map = ColumnMap::resolve(&headers(&["title", "url"])).unwrap();
        let row = headers(&["Only title"]);
        assert_eq!(map.value(ResourceField::Url, &row), Some(""));
        assert!(map.has(ResourceField::Url));
        assert!(!map.has(ResourceField::Icon));
    }
}
