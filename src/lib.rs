//! Client for a single-string "value" contract on an Ethereum JSON-RPC node.

pub mod abi;
pub mod config;
pub mod contract;
pub mod lifecycle;
pub mod observability;
pub mod rpc;
pub mod transaction;

pub use config::ClientConfig;
pub use contract::ValueContract;
pub use rpc::{HttpTransport, RpcClient, RpcError};
pub use transaction::TransactionFlow;
