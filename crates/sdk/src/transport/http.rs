//! HTTP transport layer for the PropertyData SDK.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use propertydata_core::{ApiResult, QueryParams};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> SdkResult<Self> {
        if config.api_key.is_empty() {
            return Err(SdkError::Config("api_key must not be empty".to_string()));
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Build the full request URL: base + path, then `key` followed by the
    /// mapped parameters, percent-encoded.
    ///
    /// `path` is appended to the base URL's own path, so a base of
    /// `http://host/api` and `/prices` give `http://host/api/prices`.
    pub(crate) fn build_url(&self, path: &str, params: &QueryParams) -> SdkResult<url::Url> {
        let mut base = self.config.base_url.clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        let mut url = base.join(path.trim_start_matches('/'))?;

        let mut query = format!("key={}", urlencoding::encode(&self.config.api_key));
        for (key, value) in params.iter() {
            query.push('&');
            query.push_str(&urlencoding::encode(key));
            query.push('=');
            query.push_str(&urlencoding::encode(value));
        }
        url.set_query(Some(&query));

        Ok(url)
    }

    /// Execute a GET request with query parameters.
    ///
    /// Exactly one request is sent. Connection failures and non-2xx statuses
    /// are reported as [`ApiResult::Failure`]; a 2xx body that does not parse
    /// as JSON is an error.
    pub async fn get(&self, path: &str, params: &QueryParams) -> SdkResult<ApiResult> {
        let url = self.build_url(path, params)?;
        debug!(path = %path, params = params.len(), "GET request");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let message = request_failure(e);
                warn!(path = %path, error = %message, "Request failed");
                return Ok(ApiResult::Failure(format!("Request failed: {}", message)));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(path = %path, status = status.as_u16(), "API returned an error status");
            return Ok(ApiResult::Failure(format!(
                "API Error {}: {}",
                status.as_u16(),
                body
            )));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return Ok(ApiResult::Failure(format!(
                    "Request failed: {}",
                    request_failure(e)
                )))
            }
        };

        let value = serde_json::from_slice(&body)?;
        Ok(ApiResult::Success(value))
    }
}

/// Error text with its full cause chain. The URL is stripped first since it
/// carries the credential.
fn request_failure(error: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::new(error.without_url()))
}
