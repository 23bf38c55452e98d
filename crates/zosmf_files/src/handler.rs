use tracing::{debug, warn};
use zosmf_domain::{OperationRequest, ZosmfResponse};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Sends a request and checks the answer against its expected status codes.
pub struct RequestHandler<T> {
    transport: T,
}

impl<T: Transport> RequestHandler<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exactly one call to the transport, never retried.
    pub async fn perform_request(&self, request: OperationRequest) -> Result<ZosmfResponse> {
        debug!(
            method = %request.method,
            url = %request.url,
            expected = ?request.expected,
            "Sending request"
        );

        let response = self.transport.send(&request).await?;
        debug!(status = response.status, url = %request.url, "Received response");

        if request.accepts(response.status) {
            return Ok(response);
        }

        warn!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            "Unexpected status code"
        );
        Err(Error::UnexpectedStatus {
            body: response.body_string(),
            method: request.method,
            url: request.url,
            status: response.status,
            expected: request.expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use url::Url;
    use zosmf_domain::{Method, ResponseBody};

    use super::*;
    use crate::mock::MockTransport;

    fn fixture_request() -> OperationRequest {
        OperationRequest::new(
            Method::Delete,
            Url::parse("https://host/zosmf/restfiles/mfs/zfs/ZFS1").unwrap(),
        )
        .expected(vec![204])
    }

    #[tokio::test]
    async fn test_expected_status_passes() {
        let handler = RequestHandler::new(MockTransport::with_status(204));
        let actual = handler.perform_request(fixture_request()).await.unwrap();

        assert_eq!(actual.status, 204);
        assert_eq!(handler.transport().requests(), vec![fixture_request()]);
    }

    #[tokio::test]
    async fn test_unexpected_status_carries_status_and_body() {
        let transport = MockTransport::with_status(500).respond(ZosmfResponse {
            status: 404,
            headers: BTreeMap::new(),
            body: ResponseBody::Text("no such aggregate".to_string()),
        });
        let handler = RequestHandler::new(transport);

        let actual = handler.perform_request(fixture_request()).await.unwrap_err();
        match actual {
            Error::UnexpectedStatus { status, expected, body, method, .. } => {
                assert_eq!(status, 404);
                assert_eq!(expected, vec![204]);
                assert_eq!(body, "no such aggregate");
                assert_eq!(method, Method::Delete);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(handler.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_success_codes_other_than_expected_fail() {
        let handler = RequestHandler::new(MockTransport::with_status(200));
        let actual = handler.perform_request(fixture_request()).await;
        assert!(matches!(actual, Err(Error::UnexpectedStatus { status: 200, .. })));
    }
}
