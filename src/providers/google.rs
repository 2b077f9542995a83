use std::time::Duration;

use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest};
use async_trait::async_trait;

/// Default public endpoint for the Google Translate web API
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Client for the free Google Translate web endpoint
///
/// This talks to the same `translate_a/single` endpoint the web widget uses
/// (`client=gtx`). No API key is required. The response is an untyped nested
/// array, so parsing is done leniently over `serde_json::Value`.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the translate endpoint
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client against the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client against the default public endpoint
    pub fn with_default_endpoint(timeout_secs: u64) -> Self {
        Self::new(DEFAULT_ENDPOINT, timeout_secs)
    }

    fn request_url(&self) -> String {
        format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'))
    }

    /// Extract the translated text from a `translate_a/single` response body
    ///
    /// The body looks like `[[["Hola","Hello",...],["…"]],null,"en",...]`:
    /// the first element is a list of segments whose first element is the
    /// translated chunk. Segments are concatenated in order.
    pub fn extract_translation(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ProviderError::ParseError("response did not contain a segment list".to_string())
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(text);
            }
        }

        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "response contained no translated segments".to_string(),
            ));
        }

        Ok(translated)
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(self.request_url())
            .query(&[
                ("client", "gtx"),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&body)
    }
}
