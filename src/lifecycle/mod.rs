//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Ctrl-C (signals.rs)
//!     → Cancellation::cancel (cancellation.rs)
//!     → in-flight RPC request is abandoned, receipt poller stops
//!     → the running command is dropped and the process exits non-zero
//! ```

pub mod cancellation;
pub mod signals;

pub use cancellation::Cancellation;
