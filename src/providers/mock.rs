/*!
 * Mock provider implementation for testing.
 *
 * This module provides a deterministic provider that never touches the
 * network:
 * - `MockProvider::working()` - Always succeeds with marked-up text
 * - `MockProvider::dictionary()` - Succeeds with fixed translations
 * - `MockProvider::failing_on()` - Fails for specific source texts only
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::empty()` - Succeeds with an empty translation
 */

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a translation
    Working,
    /// Always fails with an error
    Failing,
    /// Returns an empty translation
    Empty,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls, shared across clones
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&TranslationRequest) -> String>,
    /// Fixed translations looked up before the default response
    dictionary: HashMap<String, String>,
    /// Source texts for which the provider simulates a failure
    fail_on: HashSet<String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
            dictionary: HashMap::new(),
            fail_on: HashSet::new(),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty translations
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a working mock with fixed translations
    ///
    /// Texts not present in the dictionary fall back to the default
    /// marked-up response.
    pub fn dictionary(entries: &[(&str, &str)]) -> Self {
        let mut provider = Self::working();
        provider.dictionary = entries
            .iter()
            .map(|(source, translated)| (source.to_string(), translated.to_string()))
            .collect();
        provider
    }

    /// Create a working mock that fails for the given source texts
    pub fn failing_on(texts: &[&str]) -> Self {
        let mut provider = Self::working();
        provider.fail_on = texts.iter().map(|text| text.to_string()).collect();
        provider
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&TranslationRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls made so far, shared across clones
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_response: self.custom_response,
            dictionary: self.dictionary.clone(),
            fail_on: self.fail_on.clone(),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_on.contains(&request.text) {
            return Err(ProviderError::ApiError {
                status_code: 503,
                message: format!("Simulated failure for \"{}\"", request.text),
            });
        }

        match self.behavior {
            MockBehavior::Working => {
                if let Some(generator) = self.custom_response {
                    return Ok(generator(request));
                }
                if let Some(translated) = self.dictionary.get(&request.text) {
                    return Ok(translated.clone());
                }
                Ok(format!(
                    "[TRANSLATED to {}] {}",
                    request.target_language, request.text
                ))
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Empty => Ok(String::new()),
        }
    }
}
