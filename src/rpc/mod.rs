//! JSON-RPC subsystem.
//!
//! # Data Flow
//! ```text
//! caller (method + params)
//!     → client.rs (envelope, typed result decoding)
//!     → transport.rs (HTTP POST, application/json)
//!     → node
//! ```
//!
//! # Design Decisions
//! - Requests are sequential; the id is always 1
//! - A present `error` object always wins over `result`
//! - The envelope is decoded before the HTTP status is consulted
//! - Each method's result is decoded once, at this boundary

pub mod client;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::RpcClient;
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::{
    CallResult, Receipt, ReceiptResult, RpcError, RpcResult, SendTransactionResult,
    TransactionHash, TransactionParams,
};
