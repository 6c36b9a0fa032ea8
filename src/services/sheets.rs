// src/services/sheets.rs

//! Sources of published spreadsheet CSV exports.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;
use crate::utils::http;

/// Something that can hand back the CSV text behind a sheet URL.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the raw CSV export for `url`.
    async fn fetch_csv(&self, url: &str) -> Result<String>;
}

/// Fetches sheets over HTTP.
#[derive(Clone)]
pub struct HttpSheetSource {
    client: reqwest::Client,
}

impl HttpSheetSource {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_async_client(config)?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        http::fetch_text(&self.client, url).await
    }
}

/// Canned responses keyed by URL, for offline use and tests.
///
/// Unknown URLs answer with a 404 status error.
#[derive(Debug, Clone, Default)]
pub struct StaticSheetSource {
    responses: HashMap<String, std::result::Result<String, u16>>,
}

impl StaticSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `csv` for `url`.
    pub fn with_sheet(mut self, url: impl Into<String>, csv: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(csv.into()));
        self
    }

    /// Answer `url` with an HTTP error status.
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), Err(status));
        self
    }
}

#[async_trait]
impl SheetSource for StaticSheetSource {
    async fn fetch_csv(&self, url: &str) -> Result<String> {
        match self.responses.get(url) {
            Some(Ok(csv)) => Ok(csv.clone()),
            Some(Err(status)) => Err(AppError::status(url, status)),
            None => Err(AppError::status(url, 404)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSheetSource::new()
            .with_sheet("https://a/csv", "x,y\n1,2")
            .with_status("https://b/csv", 500);

        assert_eq!(source.fetch_csv("https://a/csv").await.unwrap(), "x,y\n1,2");
        let err = source.fetch_csv("https://b/csv").await.unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(source.fetch_csv("https://c/csv").await.is_err());
    }

    #[test]
    fn test_http_source_builds() {
        assert!(HttpSheetSource::new(&HttpConfig::default()).is_ok());
    }
}
