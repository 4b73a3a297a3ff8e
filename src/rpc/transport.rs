//! HTTP delivery of JSON-RPC request bodies.
//!
//! # Responsibilities
//! - POST a serialized request to the node as `application/json`
//! - Return the HTTP status with the full response body
//! - Classify connection failures as transport errors
//!
//! # Design Decisions
//! - No retries at this layer
//! - Status interpretation is left to the client, which decodes the envelope first
//! - The exchange sits behind [`Transport`] so tests can script responses

use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use std::time::Duration;
use url::Url;

use crate::rpc::types::{RpcError, RpcResult};

/// Raw reply to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers one request body and returns the raw reply.
pub trait Transport: Send + Sync {
    fn post(&self, body: String) -> impl Future<Output = RpcResult<TransportResponse>> + Send;
}

/// Transport backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    /// Create a transport for `rpc_url` with a per-request timeout.
    pub fn new(rpc_url: &str, request_timeout: Duration) -> RpcResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| RpcError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_client(rpc_url, client)
    }

    /// Create a transport for `rpc_url` using a preconfigured client.
    pub fn with_client(rpc_url: &str, client: reqwest::Client) -> RpcResult<Self> {
        let url: Url = rpc_url.parse().map_err(|e| {
            RpcError::Transport(format!("Invalid RPC URL '{}': {}", rpc_url, e))
        })?;

        Ok(Self { client, url })
    }

    /// Endpoint this transport posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn post(&self, body: String) -> RpcResult<TransportResponse> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RpcError::Transport(format!("Request to {} failed: {}", self.url, e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RpcError::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(TransportResponse::new(status, text))
    }
}
