use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and applying configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Per-provider settings
    #[serde(default = "default_providers")]
    pub available_providers: Vec<ProviderConfig>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Google Translate web endpoint
    #[default]
    Google,
    // @provider: LibreTranslate server
    LibreTranslate,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google Translate",
            Self::LibreTranslate => "LibreTranslate",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Google => "google".to_string(),
            Self::LibreTranslate => "libretranslate".to_string(),
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "libretranslate" => Ok(Self::LibreTranslate),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::Google => Self {
                provider_type: "google".to_string(),
                api_key: String::new(),
                endpoint: default_google_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::LibreTranslate => Self {
                provider_type: "libretranslate".to_string(),
                api_key: String::new(),
                endpoint: default_libretranslate_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

fn default_google_endpoint() -> String {
    crate::providers::google::DEFAULT_ENDPOINT.to_string()
}

fn default_libretranslate_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(TranslationProvider::Google),
        ProviderConfig::new(TranslationProvider::LibreTranslate),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            available_providers: default_providers(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Look up the settings for a provider
    pub fn get_provider_config(&self, provider: &TranslationProvider) -> Option<&ProviderConfig> {
        let provider_str = provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Validate the configuration for the selected provider
    pub fn validate(&self) -> Result<()> {
        let provider_config = self
            .get_provider_config(&self.provider)
            .ok_or_else(|| anyhow!("No configuration for provider: {}", self.provider))?;

        if provider_config.endpoint.is_empty() {
            return Err(anyhow!(
                "Endpoint must not be empty for provider: {}",
                self.provider
            ));
        }

        Url::parse(&provider_config.endpoint).map_err(|e| {
            anyhow!(
                "Invalid endpoint for provider {}: {} ({})",
                self.provider,
                provider_config.endpoint,
                e
            )
        })?;

        if provider_config.timeout_secs == 0 {
            return Err(anyhow!(
                "Timeout must be greater than zero for provider: {}",
                self.provider
            ));
        }

        Ok(())
    }
}
