// src/services/eresources.rs

//! E-resources directory service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::models::EResource;
use crate::parser::parse_eresources;
use crate::services::{ALL, SheetSource};

/// Loads the e-resources directory with a fallback sheet.
#[derive(Clone)]
pub struct EResourceService {
    source: Arc<dyn SheetSource>,
    primary_url: String,
    fallback_url: String,
}

impl EResourceService {
    pub fn new(
        source: Arc<dyn SheetSource>,
        primary_url: impl Into<String>,
        fallback_url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            primary_url: primary_url.into(),
            fallback_url: fallback_url.into(),
        }
    }

    async fn fetch_from(&self, url: &str) -> Result<Vec<EResource>> {
        let csv = self.source.fetch_csv(url).await?;
        parse_eresources(&csv)
    }

    /// Load resources from the primary sheet, then the fallback sheet.
    ///
    /// The fallback is tried when the primary fails or has no resources.
    /// When both fail the directory is empty.
    pub async fn load(&self) -> ResourceDirectory {
        match self.fetch_from(&self.primary_url).await {
            Ok(resources) if !resources.is_empty() => {
                log::info!("Loaded {} e-resources", resources.len());
                return ResourceDirectory::new(resources);
            }
            Ok(_) => log::warn!("Primary e-resources sheet is empty, using fallback sheet"),
            Err(e) => log::warn!("Primary e-resources sheet failed, using fallback sheet: {}", e),
        }

        match self.fetch_from(&self.fallback_url).await {
            Ok(resources) => {
                log::info!("Loaded {} e-resources from fallback sheet", resources.len());
                ResourceDirectory::new(resources)
            }
            Err(e) => {
                log::error!("Failed to load e-resources (fallback): {}", e);
                ResourceDirectory::default()
            }
        }
    }
}

/// Loaded e-resources with category helpers.
#[derive(Debug, Clone, Default)]
pub struct ResourceDirectory {
    resources: Vec<EResource>,
}

impl ResourceDirectory {
    pub fn new(resources: Vec<EResource>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[EResource] {
        &self.resources
    }

    /// `All` followed by each category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(ALL.to_string())
            .chain(
                self.resources
                    .iter()
                    .filter(|r| seen.insert(r.category.as_str()))
                    .map(|r| r.category.clone()),
            )
            .collect()
    }

    /// Resources in `category`; `all` (any case) selects everything.
    pub fn by_category(&self, category: &str) -> Vec<&EResource> {
        let any = category.eq_ignore_ascii_case(ALL);
        self.resources
            .iter()
            .filter(|r| any || r.category == category)
            .collect()
    }
}
