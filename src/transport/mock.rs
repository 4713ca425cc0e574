//! Mock transport for testing
//!
//! Returns queued responses without touching the network and records every
//! call it receives.

use super::{RpcCall, RpcResponse, Transport};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// A call as seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub call: RpcCall,
}

/// Mock transport that returns predefined responses
#[derive(Clone)]
pub struct MockTransport {
    /// Queue of responses to return (FIFO)
    responses: Arc<Mutex<Vec<RpcResponse>>>,
    /// Body returned with status 200 when the queue is empty
    default_body: Value,
    /// Track all calls made (for assertions)
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![])),
            default_body: json!({ "RequestId": "mock-request" }),
            calls: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Create with a queue of responses
    pub fn with_responses(responses: Vec<RpcResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            ..Self::new()
        }
    }

    /// Set the default body when the queue is empty
    pub fn with_default(mut self, body: Value) -> Self {
        self.default_body = body;
        self
    }

    pub fn queue_response(&self, response: RpcResponse) {
        self.responses.lock().unwrap().push(response);
    }

    /// Queue a service-side error in the shape the remote API returns
    pub fn queue_error(&self, status: u16, code: &str, message: &str) {
        self.queue_response(RpcResponse::from_body(
            status,
            json!({
                "RequestId": "mock-request",
                "Code": code,
                "Message": message,
            }),
        ));
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, endpoint: &str, call: RpcCall) -> Result<RpcResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            call,
        });

        let response = {
            let mut queue = self.responses.lock().unwrap();
            if queue.is_empty() {
                RpcResponse::from_body(200, self.default_body.clone())
            } else {
                queue.remove(0)
            }
        };

        Ok(response)
    }
}
