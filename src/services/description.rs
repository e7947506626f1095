//! Description proxy service
//!
//! Forwards an entity name to an external text-generation API and relays
//! the first candidate's text back. The upstream call is a single bounded
//! request; there is no retry and no circuit breaker.

use std::time::Duration;

use serde_json::{json, Value};

use crate::{
    config::GenAiConfig,
    error::{AppError, AppResult},
};

/// Upstream request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback when the response envelope is missing any expected field.
const NO_DESCRIPTION: &str = "No description available.";

#[derive(Clone)]
pub struct DescriptionService {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl DescriptionService {
    pub fn new(config: GenAiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Fetch a description for an entity name from the upstream API.
    pub async fn describe(&self, entity_name: &str) -> AppResult<String> {
        if entity_name.trim().is_empty() {
            return Err(AppError::BadRequest("Missing entity name".to_string()));
        }

        let (api_url, api_key) = match (&self.config.api_url, &self.config.api_key) {
            (Some(url), Some(key)) => (url, key),
            _ => {
                return Err(AppError::Config(
                    "Generative API configuration missing".to_string(),
                ))
            }
        };

        let payload = json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": format!(
                                "Provide a detailed description of '{}'. \
                                 If it is a book include information about the setting, \
                                 characters, themes, key concepts, and its influence. \
                                 Do not include any concluding remarks or questions.",
                                entity_name
                            )
                        }
                    ]
                }
            ]
        });

        tracing::debug!(entity = entity_name, "Requesting description from upstream");

        let response = self
            .client
            .post(format!("{}?key={}", api_url, api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::Upstream(format!("Failed to connect to generative API: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::Upstream(format!("Failed to read generative API response: {}", e))
        })?;

        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Generative API returned status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let envelope: Value = serde_json::from_str(&body).map_err(|e| {
            AppError::Upstream(format!("Invalid JSON response from generative API: {}", e))
        })?;

        Ok(extract_description(&envelope))
    }
}

/// Pull the first candidate's first text part out of the response
/// envelope, falling back when any layer is missing.
fn extract_description(envelope: &Value) -> String {
    envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .unwrap_or(NO_DESCRIPTION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_envelope() {
        let envelope = json!({
            "candidates": [
                {"content": {"parts": [{"text": "A classic novel."}]}}
            ]
        });
        assert_eq!(extract_description(&envelope), "A classic novel.");
    }

    #[test]
    fn test_extract_empty_envelope() {
        assert_eq!(extract_description(&json!({})), NO_DESCRIPTION);
    }

    #[test]
    fn test_extract_missing_parts() {
        let envelope = json!({"candidates": [{"content": {}}]});
        assert_eq!(extract_description(&envelope), NO_DESCRIPTION);
    }

    #[test]
    fn test_extract_non_string_text() {
        let envelope = json!({
            "candidates": [{"content": {"parts": [{"text": 42}]}}]
        });
        assert_eq!(extract_description(&envelope), NO_DESCRIPTION);
    }

    #[test]
    fn test_describe_without_config_is_config_error() {
        let service = DescriptionService::new(GenAiConfig::default()).unwrap();
        let err = tokio_test::block_on(service.describe("Dune")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_describe_empty_name_is_bad_request() {
        let service = DescriptionService::new(GenAiConfig::default()).unwrap();
        let err = tokio_test::block_on(service.describe("  ")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
