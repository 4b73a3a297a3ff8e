//! Observability subsystem.
//!
//! Every subsystem emits `tracing` events with structured fields
//! (`method`, `tx_hash`, `attempt`, `elapsed_ms`); logging.rs installs the
//! subscriber that renders them.

pub mod logging;

pub use logging::{duration_ms, init_logging};
