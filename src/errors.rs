/*!
 * Error types for the xctranslate application.
 *
 * This module contains the error type for the translation provider boundary,
 * using the thiserror crate for ergonomic error definitions. Catalog and
 * application level failures are fatal and travel as anyhow errors instead.
 */

use thiserror::Error;

/// Errors that can occur when calling a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },
}
