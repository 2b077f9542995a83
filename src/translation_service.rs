/*!
 * Translation service wiring a configured provider to a fixed language pair.
 *
 * The service is configured once per run. Every call translates a single
 * string with the same source and target languages.
 */

use anyhow::{Result, anyhow};

use crate::app_config::{Config, TranslationProvider};
use crate::errors::ProviderError;
use crate::providers::google::GoogleTranslate;
use crate::providers::libretranslate::LibreTranslate;
use crate::providers::{Provider, TranslationRequest};

/// Single-string translation capability with a fixed language pair
#[derive(Debug)]
pub struct TranslationService {
    /// Provider implementation
    provider: Box<dyn Provider>,

    /// Language translated from
    source_language: String,

    /// Language translated to
    target_language: String,
}

impl TranslationService {
    /// Create a service for the provider selected in the configuration
    pub fn new(config: &Config, source_language: &str, target_language: &str) -> Result<Self> {
        ensure_target_language(target_language)?;

        let provider_config = config
            .get_provider_config(&config.provider)
            .ok_or_else(|| anyhow!("No configuration for provider: {}", config.provider))?;

        let provider: Box<dyn Provider> = match config.provider {
            TranslationProvider::Google => Box::new(GoogleTranslate::new(
                &provider_config.endpoint,
                provider_config.timeout_secs,
            )),
            TranslationProvider::LibreTranslate => Box::new(LibreTranslate::new(
                &provider_config.endpoint,
                &provider_config.api_key,
                provider_config.timeout_secs,
            )),
        };

        Ok(Self {
            provider,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        })
    }

    /// Create a service around an existing provider - used by tests and external consumers
    #[allow(dead_code)]
    pub fn with_provider(
        provider: Box<dyn Provider>,
        source_language: &str,
        target_language: &str,
    ) -> Result<Self> {
        ensure_target_language(target_language)?;

        Ok(Self {
            provider,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        })
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Translate one string through the configured provider
    pub async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let request = TranslationRequest::new(text, &self.source_language, &self.target_language);
        self.provider.translate(&request).await
    }
}

fn ensure_target_language(target_language: &str) -> Result<()> {
    if target_language.trim().is_empty() {
        return Err(anyhow!("Target language must not be empty"));
    }
    Ok(())
}
