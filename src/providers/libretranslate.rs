use std::time::Duration;

use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest};
use async_trait::async_trait;

/// Client for a LibreTranslate server
///
/// Works against the public instances as well as a self-hosted one. An API
/// key is only required when the server demands it.
#[derive(Debug)]
pub struct LibreTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the server
    endpoint: String,
    /// API key for authentication, empty when the server is open
    api_key: String,
}

/// LibreTranslate translate request body
#[derive(Debug, Serialize)]
pub struct LibreTranslateRequest {
    /// Text to translate
    q: String,
    /// Source language code
    source: String,
    /// Target language code
    target: String,
    /// Input format, always plain text for catalog strings
    format: String,
    /// API key, omitted when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl LibreTranslateRequest {
    /// Create a new request body for the given text and language pair
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            q: text.into(),
            source: source.into(),
            target: target.into(),
            format: "text".to_string(),
            api_key,
        }
    }
}

/// LibreTranslate translate response body
#[derive(Debug, Deserialize)]
pub struct LibreTranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl LibreTranslate {
    /// Create a new LibreTranslate client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn request_url(&self) -> String {
        format!("{}/translate", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let api_key = if self.api_key.is_empty() {
            None
        } else {
            Some(self.api_key.clone())
        };

        let body = LibreTranslateRequest::new(
            request.text.clone(),
            request.source_language.clone(),
            request.target_language.clone(),
            api_key,
        );

        let response = self
            .client
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            // LibreTranslate reports failures as {"error": "..."}
            let message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
                .unwrap_or(response_text);
            error!("LibreTranslate API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: LibreTranslateResponse = serde_json::from_str(&response_text)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.translated_text)
    }
}
