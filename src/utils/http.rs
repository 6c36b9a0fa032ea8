// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a URL and return its body as text.
///
/// Non-success statuses are reported as [`AppError::Status`].
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::status(url, status));
    }
    Ok(response.text().await?)
}

/// Fetch a URL and decode its JSON body.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<serde_json::Value> {
    let text = fetch_text(client, url).await?;
    Ok(serde_json::from_str(&text)?)
}
