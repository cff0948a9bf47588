//! Configuration types for the PropertyData client.

use std::fmt;
use std::time::Duration;
use url::Url;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.propertydata.co.uk";

/// Configuration for the PropertyData client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the PropertyData API.
    pub base_url: Url,
    /// API key, sent as the `key` query parameter on every request.
    pub api_key: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with the given base URL and API key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: None,
            user_agent: format!("propertydata-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// The key must never end up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
