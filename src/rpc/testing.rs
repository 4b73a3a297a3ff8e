//! In-memory transport that replays queued responses.

use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::rpc::transport::{Transport, TransportResponse};
use crate::rpc::types::{RpcError, RpcResult};

/// Replays queued replies in order and records every request.
///
/// Calls past the end of the script fail with a transport error.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<RpcResult<TransportResponse>>>,
    requests: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response carrying `result`.
    pub(crate) fn push_result(self, result: Value) -> Self {
        self.push_raw(json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string())
    }

    /// Queue a node error response.
    pub(crate) fn push_error(self, code: i64, message: &str) -> Self {
        self.push_raw(
            json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}})
                .to_string(),
        )
    }

    /// Queue a raw response body with status 200.
    pub(crate) fn push_raw(self, body: impl Into<String>) -> Self {
        self.push_status(200, body)
    }

    /// Queue a raw response body with an explicit HTTP status.
    pub(crate) fn push_status(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    /// Queue a failure raised by the transport itself.
    pub(crate) fn push_failure(self, error: RpcError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of requests received so far.
    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far, parsed as JSON.
    pub(crate) fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn post(&self, body: String) -> RpcResult<TransportResponse> {
        let request = serde_json::from_str(&body).unwrap_or(Value::String(body));
        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RpcError::Transport("script exhausted".to_string())))
    }
}
