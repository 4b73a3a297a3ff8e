//! Receipt polling.
//!
//! # State Transitions
//! ```text
//! Polling → Confirmed: node returns a non-null receipt
//! Polling → Polling:   node returns null (not yet mined)
//! Polling → Failed:    the receipt call itself fails (no retry)
//! Polling → TimedOut:  time since the first poll reaches the timeout
//! Polling → Cancelled: the cancellation token fires
//! ```
//!
//! The deadline is checked once per poll, so a wait may overrun by up to one
//! interval plus one call.

use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::lifecycle::Cancellation;
use crate::observability::duration_ms;
use crate::rpc::types::{Receipt, ReceiptResult, RpcError, RpcResult, TransactionHash};
use crate::rpc::{RpcClient, Transport};

/// Fixed delay between receipt polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Result of a single successful poll.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Not mined yet.
    Pending,
    /// Mined; polling is over.
    Confirmed(Receipt),
}

/// Step-wise poller for one transaction's receipt.
///
/// Hosts that drive their own event loop call [`ReceiptPoller::poll_once`]
/// on their own schedule; [`ReceiptPoller::wait`] drives it with a fixed
/// interval.
pub struct ReceiptPoller<'a, T> {
    client: &'a RpcClient<T>,
    tx_hash: TransactionHash,
    timeout: Duration,
    poll_interval: Duration,
    cancellation: Cancellation,
    started: Option<Instant>,
    attempts: u32,
}

impl<'a, T: Transport> ReceiptPoller<'a, T> {
    pub fn new(
        client: &'a RpcClient<T>,
        tx_hash: TransactionHash,
        timeout: Duration,
        poll_interval: Duration,
        cancellation: Cancellation,
    ) -> Self {
        Self {
            client,
            tx_hash,
            timeout,
            poll_interval,
            cancellation,
            started: None,
            attempts: 0,
        }
    }

    /// Transaction being watched.
    pub fn tx_hash(&self) -> &TransactionHash {
        &self.tx_hash
    }

    /// Number of receipt requests issued so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Time since the first poll, zero before it.
    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }

    /// Check cancellation and the deadline, then ask the node once.
    pub async fn poll_once(&mut self) -> RpcResult<PollOutcome> {
        if self.cancellation.is_cancelled() {
            return Err(RpcError::Cancelled(format!("transaction {}", self.tx_hash)));
        }

        let started = *self.started.get_or_insert_with(Instant::now);
        let elapsed = started.elapsed();
        if self.attempts > 0 && elapsed >= self.timeout {
            tracing::warn!(
                tx_hash = %self.tx_hash,
                attempt = self.attempts,
                elapsed_ms = duration_ms(elapsed),
                "Gave up waiting for transaction"
            );
            return Err(RpcError::Timeout {
                tx_hash: self.tx_hash.to_string(),
                waited: elapsed,
            });
        }

        self.attempts += 1;
        let ReceiptResult(receipt) = self.client.get_transaction_receipt(&self.tx_hash).await?;

        match receipt {
            Some(receipt) => {
                tracing::info!(
                    tx_hash = %self.tx_hash,
                    attempt = self.attempts,
                    elapsed_ms = duration_ms(started.elapsed()),
                    "Transaction mined"
                );
                Ok(PollOutcome::Confirmed(receipt))
            }
            None => {
                tracing::debug!(
                    tx_hash = %self.tx_hash,
                    attempt = self.attempts,
                    "Transaction pending"
                );
                Ok(PollOutcome::Pending)
            }
        }
    }

    /// Poll until the receipt appears, sleeping the fixed interval between polls.
    pub async fn wait(mut self) -> RpcResult<Receipt> {
        loop {
            if let PollOutcome::Confirmed(receipt) = self.poll_once().await? {
                return Ok(receipt);
            }

            let cancelled = tokio::select! {
                _ = sleep(self.poll_interval) => false,
                _ = self.cancellation.cancelled() => true,
            };
            if cancelled {
                return Err(RpcError::Cancelled(format!("transaction {}", self.tx_hash)));
            }
        }
    }
}
