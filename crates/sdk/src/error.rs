//! Error types for the PropertyData SDK.

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors raised by the client itself.
///
/// Remote failures (unreachable host, non-2xx status) are not errors at this
/// level; they come back as [`propertydata_core::ApiResult::Failure`].
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response carried a body that is not valid JSON.
    #[error("Invalid JSON in API response: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
