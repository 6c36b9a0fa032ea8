// src/services/content.rs

//! CMS content repository.
//!
//! Content is authored out-of-band as one JSON file per item:
//!
//! ```text
//! content/
//! ├── staff/            # one file per staff member
//! ├── announcements/    # one file per announcement
//! ├── pages/            # about-college.json, about-library.json
//! └── settings/         # contact.json, hours.json
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::ContentKind;

/// One content item: its name (file stem) and raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub name: String,
    pub value: Value,
}

/// Read access to CMS content, grouped by kind.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All items of a kind, ordered by name.
    async fn list_content_of_kind(&self, kind: ContentKind) -> Result<Vec<ContentEntry>>;

    /// A single named item, or `None` when it does not exist.
    async fn load(&self, kind: ContentKind, name: &str) -> Result<Option<Value>>;
}

/// Deserialize every item of a kind, skipping items that do not fit `T`.
pub async fn list_typed<T: DeserializeOwned>(
    repo: &dyn ContentRepository,
    kind: ContentKind,
) -> Result<Vec<T>> {
    let entries = repo.list_content_of_kind(kind).await?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry.value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Skipping {}/{}: {}", kind.dir_name(), entry.name, e);
                None
            }
        })
        .collect())
}

/// Load and deserialize a single named item.
pub async fn load_typed<T: DeserializeOwned>(
    repo: &dyn ContentRepository,
    kind: ContentKind,
    name: &str,
) -> Result<Option<T>> {
    match repo.load(kind, name).await? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AppError::content(format!("{}/{}", kind.dir_name(), name), e)),
        None => Ok(None),
    }
}

/// Content stored as `<root>/<kind>/<name>.json` files.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    root: PathBuf,
}

impl DirectoryRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn kind_dir(&self, kind: ContentKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    async fn read_json(path: &Path) -> Result<Option<Value>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| AppError::content(path.display().to_string(), e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl ContentRepository for DirectoryRepository {
    async fn list_content_of_kind(&self, kind: ContentKind) -> Result<Vec<ContentEntry>> {
        let dir = self.kind_dir(kind);
        let mut reader = match tokio::fs::read_dir(&dir).await {
            Ok(reader) => reader,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No content directory at {}", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let mut paths = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            match Self::read_json(&path).await {
                Ok(Some(value)) => entries.push(ContentEntry { name, value }),
                Ok(None) => {}
                Err(e) => log::warn!("Skipping unreadable content file: {}", e),
            }
        }
        Ok(entries)
    }

    async fn load(&self, kind: ContentKind, name: &str) -> Result<Option<Value>> {
        let path = self.kind_dir(kind).join(format!("{name}.json"));
        Self::read_json(&path).await
    }
}

/// Content bundled in memory.
#[derive(Debug, Clone, Default)]
pub struct ManifestRepository {
    entries: HashMap<ContentKind, Vec<ContentEntry>>,
}

impl ManifestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item; items of a kind are kept sorted by name.
    pub fn with_entry(mut self, kind: ContentKind, name: impl Into<String>, value: Value) -> Self {
        let list = self.entries.entry(kind).or_default();
        list.push(ContentEntry {
            name: name.into(),
            value,
        });
        list.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }
}

#[async_trait]
impl ContentRepository for ManifestRepository {
    async fn list_content_of_kind(&self, kind: ContentKind) -> Result<Vec<ContentEntry>> {
        Ok(self.entries.get(&kind).cloned().unwrap_or_default())
    }

    async fn load(&self, kind: ContentKind, name: &str) -> Result<Option<Value>> {
        Ok(self
            .entries
            .get(&kind)
            .and_then(|list| list.iter().find(|e| e.name == name))
            .map(|e| e.value.clone()))
    }
}
