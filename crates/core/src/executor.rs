// Seam between the dispatcher and whatever performs the remote call

use crate::types::{ApiResult, QueryParams};
use anyhow::Result;

/// Performs one outbound GET against the remote API.
///
/// Implementations fold transport failures and non-2xx responses into
/// [`ApiResult::Failure`]. `Err` is reserved for unexpected faults such as a
/// 2xx body that is not JSON.
#[async_trait::async_trait]
pub trait ApiExecutor: Send + Sync {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<ApiResult>;
}
