use zosmf_domain::{OperationRequest, ZosmfResponse};

use crate::error::Result;

/// Sends one HTTP request and hands back whatever the server answered.
///
/// Implementations must not interpret the status code; that is the request
/// handler's job.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: &OperationRequest) -> Result<ZosmfResponse>;
}
