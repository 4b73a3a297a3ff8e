//! Transaction submission and confirmation.
//!
//! # Responsibilities
//! - Submit transactions with `eth_sendTransaction`
//! - Wait for the mined receipt with a bounded poll loop
//! - Surface node, transport, timeout and cancellation failures unchanged

use std::time::Duration;

use crate::config::ClientConfig;
use crate::lifecycle::Cancellation;
use crate::rpc::types::{Receipt, RpcResult, SendTransactionResult, TransactionHash, TransactionParams};
use crate::rpc::{RpcClient, Transport};
use crate::transaction::poller::{ReceiptPoller, DEFAULT_POLL_INTERVAL};

/// Submits transactions from one sender and waits for them to be mined.
pub struct TransactionFlow<T> {
    client: RpcClient<T>,
    sender: String,
    poll_interval: Duration,
    cancellation: Cancellation,
}

impl<T: Transport> TransactionFlow<T> {
    /// Create a flow for `sender` with the default 1 second poll interval.
    pub fn new(client: RpcClient<T>, sender: impl Into<String>) -> Self {
        Self {
            client,
            sender: sender.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            cancellation: Cancellation::new(),
        }
    }

    /// Create a flow using the sender and poll interval from `config`.
    pub fn from_config(client: RpcClient<T>, config: &ClientConfig) -> Self {
        Self::new(client, config.account.address.clone())
            .with_poll_interval(config.confirmation.poll_interval())
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Use an externally owned cancellation token for receipt waits and
    /// every RPC call made through this flow.
    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.client = self.client.with_cancellation(cancellation.clone());
        self.cancellation = cancellation;
        self
    }

    /// Address transactions are sent from.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Get the underlying RPC client.
    pub fn client(&self) -> &RpcClient<T> {
        &self.client
    }

    /// Submit a transaction and return its hash.
    pub async fn submit(&self, params: &TransactionParams) -> RpcResult<TransactionHash> {
        let SendTransactionResult(tx_hash) = self.client.send_transaction(params).await?;
        tracing::info!(tx_hash = %tx_hash, to = ?params.to, "Transaction submitted");
        Ok(tx_hash)
    }

    /// Build a step-wise poller for `tx_hash`.
    pub fn receipt_poller(&self, tx_hash: TransactionHash, timeout: Duration) -> ReceiptPoller<'_, T> {
        ReceiptPoller::new(
            &self.client,
            tx_hash,
            timeout,
            self.poll_interval,
            self.cancellation.clone(),
        )
    }

    /// Poll until `tx_hash` is mined, the timeout passes, or a call fails.
    pub async fn await_receipt(&self, tx_hash: &TransactionHash, timeout: Duration) -> RpcResult<Receipt> {
        tracing::debug!(tx_hash = %tx_hash, timeout_secs = timeout.as_secs(), "Waiting for receipt");
        self.receipt_poller(tx_hash.clone(), timeout).wait().await
    }
}
