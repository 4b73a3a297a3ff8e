//! Transaction lifecycle.
//!
//! # Data Flow
//! ```text
//! TransactionParams
//!     → flow.rs (eth_sendTransaction → TransactionHash)
//!     → poller.rs (eth_getTransactionReceipt until mined)
//!     → Receipt
//! ```
//!
//! # Design Decisions
//! - Polling checks for eventual state; failed calls are never retried
//! - Fixed interval, no backoff
//! - Deadline and cancellation are checked between polls

pub mod flow;
pub mod poller;

pub use flow::TransactionFlow;
pub use poller::{PollOutcome, ReceiptPoller, DEFAULT_POLL_INTERVAL};
