//! JSON-RPC client with typed per-method results.
//!
//! # Responsibilities
//! - Wrap calls in the JSON-RPC 2.0 envelope
//! - Surface node errors with their code and message, whatever the HTTP status
//! - Decode each method's result once, into a tagged type
//! - Abandon in-flight requests when the cancellation token fires

use serde_json::Value;

use crate::lifecycle::Cancellation;
use crate::rpc::transport::{Transport, TransportResponse};
use crate::rpc::types::{
    methods, CallResult, ReceiptResult, RpcError, RpcRequest, RpcResponse, RpcResult,
    SendTransactionResult, TransactionHash, TransactionParams,
};

/// JSON-RPC client over any [`Transport`].
#[derive(Debug, Clone)]
pub struct RpcClient<T> {
    transport: T,
    cancellation: Cancellation,
}

impl<T: Transport> RpcClient<T> {
    /// Create a new client.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cancellation: Cancellation::new(),
        }
    }

    /// Abandon requests still in flight once `cancellation` fires.
    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue `method` with `params` and return the untyped result.
    ///
    /// A null result is returned as `Value::Null`.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> RpcResult<Value> {
        let request = RpcRequest::new(method, params);
        let body = serde_json::to_string(&request)
            .map_err(|e| RpcError::Decode(format!("Failed to serialize {} request: {}", method, e)))?;

        if self.cancellation.is_cancelled() {
            return Err(RpcError::Cancelled(format!("{} response", method)));
        }

        tracing::debug!(method = %method, "Sending RPC request");
        let raw = tokio::select! {
            raw = self.transport.post(body) => raw?,
            _ = self.cancellation.cancelled() => {
                tracing::debug!(method = %method, "RPC request abandoned");
                return Err(RpcError::Cancelled(format!("{} response", method)));
            }
        };

        let result = decode_response(method, raw);
        if let Err(e) = &result {
            tracing::warn!(method = %method, error = %e, "Node rejected RPC call");
        }
        result
    }

    /// Submit a transaction with `eth_sendTransaction`.
    pub async fn send_transaction(
        &self,
        params: &TransactionParams,
    ) -> RpcResult<SendTransactionResult> {
        let value = self
            .call(methods::SEND_TRANSACTION, vec![to_param(params)?])
            .await?;
        SendTransactionResult::try_from(value)
    }

    /// Execute a read-only call with `eth_call`.
    pub async fn eth_call(&self, params: &TransactionParams) -> RpcResult<CallResult> {
        let value = self.call(methods::CALL, vec![to_param(params)?]).await?;
        CallResult::try_from(value)
    }

    /// Fetch the receipt of `tx_hash`, `None` if not yet mined.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: &TransactionHash,
    ) -> RpcResult<ReceiptResult> {
        let value = self
            .call(methods::GET_TRANSACTION_RECEIPT, vec![Value::String(tx_hash.to_string())])
            .await?;
        ReceiptResult::try_from(value)
    }
}

/// Interpret a reply. An error envelope is reported as such even on a
/// non-2xx status; otherwise a non-2xx status is a transport failure.
fn decode_response(method: &str, raw: TransportResponse) -> RpcResult<Value> {
    let envelope = serde_json::from_str::<RpcResponse>(&raw.body);

    match envelope {
        Ok(response) if response.error.is_some() => response.into_result(),
        _ if !raw.is_success() => Err(RpcError::Transport(format!(
            "Node returned HTTP status {}: {}",
            raw.status, raw.body
        ))),
        Ok(response) => response.into_result(),
        Err(e) => Err(RpcError::Decode(format!(
            "Malformed response to {}: {}",
            method, e
        ))),
    }
}

fn to_param(params: &TransactionParams) -> RpcResult<Value> {
    serde_json::to_value(params)
        .map_err(|e| RpcError::Decode(format!("Failed to serialize transaction: {}", e)))
}
