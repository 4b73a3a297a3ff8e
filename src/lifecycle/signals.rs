//! OS signal handling.

use crate::lifecycle::cancellation::Cancellation;

/// Cancel `cancellation` when Ctrl-C is received.
pub fn cancel_on_ctrl_c(cancellation: Cancellation) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received, cancelling");
                cancellation.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });
}
