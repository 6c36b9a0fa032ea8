// src/services/visitors.rs

//! Site visit counter.

use crate::utils::http;

/// Bump the visit counter and return the new total.
///
/// Best-effort: any failure is logged and yields `None`.
pub async fn record_visit(client: &reqwest::Client, url: &str) -> Option<u64> {
    match http::fetch_json(client, url).await {
        Ok(body) => {
            let value = parse_count(&body);
            if value.is_none() {
                log::warn!("Visit counter response has no numeric value");
            }
            value
        }
        Err(e) => {
            log::error!("Error fetching total views: {}", e);
            None
        }
    }
}

fn parse_count(body: &serde_json::Value) -> Option<u64> {
    body.get("value").and_then(serde_json::Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(&json!({"value": 1234})), Some(1234));
        assert_eq!(parse_count(&json!({"value": "n/a"})), None);
        assert_eq!(parse_count(&json!({})), None);
    }
}
