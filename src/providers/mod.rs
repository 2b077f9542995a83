/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the supported machine
 * translation backends:
 * - Google: Google Translate web endpoint (default)
 * - LibreTranslate: self-hosted or public LibreTranslate server
 * - Mock: deterministic in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single translation request handed to a provider.
///
/// The language pair is carried on every request even though it is fixed for
/// a whole run, so providers stay stateless and interchangeable.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// The text to translate
    pub text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Common trait for all translation providers
///
/// This is the single seam between the catalog traversal and the outside
/// world: one string in, one string out, or an error. Providers perform no
/// retries, batching, or caching behind this interface.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate one piece of text for the request's language pair
    ///
    /// # Arguments
    /// * `request` - The text and language pair to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;
}

pub mod google;
pub mod libretranslate;
/// Deterministic provider used by tests and external consumers
#[allow(dead_code)]
pub mod mock;
