//! Main client for the PropertyData SDK.

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{SdkError, SdkResult};
use crate::transport::HttpTransport;
use propertydata_core::{ApiExecutor, ApiResult, QueryParams};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the PropertyData REST API.
///
/// Holds the API key for its whole lifetime; cloning is cheap and every
/// clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct PropertyDataClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl PropertyDataClient {
    /// Create a new client builder.
    pub fn builder() -> PropertyDataClientBuilder {
        PropertyDataClientBuilder::new()
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> SdkResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Issue one GET against `path` with the given query parameters.
    pub async fn get(&self, path: &str, params: &QueryParams) -> SdkResult<ApiResult> {
        self.http.get(path, params).await
    }
}

#[async_trait::async_trait]
impl ApiExecutor for PropertyDataClient {
    async fn get(&self, path: &str, params: &QueryParams) -> anyhow::Result<ApiResult> {
        Ok(self.http.get(path, params).await?)
    }
}

/// Builder for creating a PropertyDataClient.
pub struct PropertyDataClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl PropertyDataClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Override the API root (defaults to the production API).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an explicit request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> SdkResult<PropertyDataClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::Config("api_key is required".to_string()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let mut config = ClientConfig::new(base_url, api_key);
        config.timeout = self.timeout;

        PropertyDataClient::from_config(config)
    }
}

impl Default for PropertyDataClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
