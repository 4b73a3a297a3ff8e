//! JSON-RPC envelopes, transaction types and error definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::abi::AbiError;

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Requests are issued one at a time, so the id is fixed.
pub const REQUEST_ID: u64 = 1;

/// Node methods used by this client.
pub mod methods {
    pub const SEND_TRANSACTION: &str = "eth_sendTransaction";
    pub const CALL: &str = "eth_call";
    pub const GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";
}

/// Errors that can occur while talking to the node.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Node rejected the call. Code and message are passed through verbatim.
    #[error("RPC error {code}: {message}")]
    Node {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// Connection or HTTP-level failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not a valid envelope or had an unexpected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Payload encoding or decoding failed.
    #[error("Encoding error: {0}")]
    Encoding(#[from] AbiError),

    /// Transaction was not mined within the allotted time.
    #[error("Timed out after {waited:?} waiting for transaction {tx_hash} to be mined")]
    Timeout { tx_hash: String, waited: Duration },

    /// The operation was interrupted before it completed.
    #[error("Cancelled while waiting for {0}")]
    Cancelled(String),
}

/// Result type for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Outgoing JSON-RPC 2.0 request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl RpcRequest {
    /// Build a request with the fixed version and id.
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
            id: REQUEST_ID,
        }
    }
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Incoming JSON-RPC 2.0 response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Yield `result`, or the node error if one is present.
    pub fn into_result(self) -> RpcResult<Value> {
        match self.error {
            Some(error) => Err(RpcError::Node {
                code: error.code,
                message: error.message,
                data: error.data,
            }),
            None => Ok(self.result),
        }
    }
}

/// Parameters for `eth_sendTransaction` and `eth_call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParams {
    /// Sender address.
    pub from: String,
    /// Target contract; absent for contract creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// `0x`-prefixed call data or creation bytecode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl TransactionParams {
    /// Contract creation: no `to`, bytecode as data.
    pub fn deploy(from: impl Into<String>, bytecode: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: None,
            data: Some(bytecode.into()),
        }
    }

    /// Invocation of `to` with the given call data.
    pub fn invoke(
        from: impl Into<String>,
        to: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: Some(to.into()),
            data: Some(data.into()),
        }
    }
}

/// Opaque transaction hash returned by the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionHash(pub String);

impl TransactionHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

/// Receipt of a mined transaction.
///
/// Only the block hash and created contract address are typed; every other
/// field the node returns is kept as-is in `other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Decoded result of `eth_sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTransactionResult(pub TransactionHash);

/// Decoded result of `eth_getTransactionReceipt`; `None` while pending.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptResult(pub Option<Receipt>);

/// Decoded result of `eth_call`: the returned hex payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult(pub String);

fn expect_string(method: &str, value: Value) -> RpcResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(RpcError::Decode(format!(
            "{} returned {} instead of a string",
            method, other
        ))),
    }
}

impl TryFrom<Value> for SendTransactionResult {
    type Error = RpcError;

    fn try_from(value: Value) -> RpcResult<Self> {
        expect_string(methods::SEND_TRANSACTION, value).map(|hash| Self(TransactionHash(hash)))
    }
}

impl TryFrom<Value> for ReceiptResult {
    type Error = RpcError;

    fn try_from(value: Value) -> RpcResult<Self> {
        if value.is_null() {
            return Ok(Self(None));
        }
        serde_json::from_value(value).map(|r| Self(Some(r))).map_err(|e| {
            RpcError::Decode(format!(
                "{} returned a malformed receipt: {}",
                methods::GET_TRANSACTION_RECEIPT,
                e
            ))
        })
    }
}

impl TryFrom<Value> for CallResult {
    type Error = RpcError;

    fn try_from(value: Value) -> RpcResult<Self> {
        expect_string(methods::CALL, value).map(Self)
    }
}
