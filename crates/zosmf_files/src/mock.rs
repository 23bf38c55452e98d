use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use zosmf_domain::{OperationRequest, ResponseBody, ZosmfResponse};

use crate::error::Result;
use crate::transport::Transport;

/// In-memory [`Transport`] that records every request and answers with
/// queued responses, falling back to a fixed status once the queue is empty.
#[derive(Clone)]
pub struct MockTransport {
    status: u16,
    queued: Arc<Mutex<VecDeque<ZosmfResponse>>>,
    requests: Arc<Mutex<Vec<OperationRequest>>>,
}

impl MockTransport {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            queued: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn respond(self, response: ZosmfResponse) -> Self {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<OperationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &OperationRequest) -> Result<ZosmfResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let queued = self
            .queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        Ok(queued.unwrap_or_else(|| ZosmfResponse {
            status: self.status,
            headers: BTreeMap::new(),
            body: ResponseBody::Empty,
        }))
    }
}
