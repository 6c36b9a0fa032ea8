//! Page loaders and renderers.
//!
//! Each page gathers its data (CMS content, sheets) into a view model and
//! renders it to the console. CMS sections load independently: a section
//! that fails to load logs the failure and shows its configured fallback,
//! without affecting its siblings.

pub mod about;
pub mod catalog;
pub mod contact;
pub mod eresources;
pub mod home;
pub mod papers;
pub mod staff;

use serde::de::DeserializeOwned;

use crate::models::ContentKind;
use crate::services::ContentRepository;
use crate::services::content::load_typed;

/// Where a rendered section's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Loaded,
    Fallback,
}

/// A page section together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub content: T,
    pub source: ContentSource,
}

impl<T> Section<T> {
    pub fn loaded(content: T) -> Self {
        Self {
            content,
            source: ContentSource::Loaded,
        }
    }

    pub fn fallback(content: T) -> Self {
        Self {
            content,
            source: ContentSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }
}

/// Load one named CMS item, or fall back to `fallback`.
pub async fn load_section<T>(
    repo: &dyn ContentRepository,
    kind: ContentKind,
    name: &str,
    fallback: &T,
) -> Section<T>
where
    T: DeserializeOwned + Clone,
{
    match load_typed::<T>(repo, kind, name).await {
        Ok(Some(content)) => Section::loaded(content),
        Ok(None) => {
            log::info!("{}/{} not found, using fallback", kind.dir_name(), name);
            Section::fallback(fallback.clone())
        }
        Err(e) => {
            log::warn!("Error loading {}/{}: {}", kind.dir_name(), name, e);
            Section::fallback(fallback.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageContent;
    use crate::services::ManifestRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_section_loaded_and_fallback() {
        let repo = ManifestRepository::new().with_entry(
            ContentKind::Pages,
            "about-library",
            json!({"heading": "Our Library", "paragraphs": ["Open to all."]}),
        );
        let fallback = PageContent::new("Fallback", &["Fallback body."]);

        let loaded = load_section(&repo, ContentKind::Pages, "about-library", &fallback).await;
        assert_eq!(loaded.source, ContentSource::Loaded);
        assert_eq!(loaded.content.heading, "Our Library");

        let missing = load_section(&repo, ContentKind::Pages, "about-college", &fallback).await;
        assert!(missing.is_fallback());
        assert_eq!(missing.content, fallback);
    }
}
