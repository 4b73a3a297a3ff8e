//! Create, read and update the value contract.

use std::time::Duration;
use tokio::time::Instant;

use crate::abi;
use crate::observability::duration_ms;
use crate::rpc::types::{CallResult, RpcError, RpcResult, TransactionHash, TransactionParams};
use crate::rpc::Transport;
use crate::transaction::TransactionFlow;

/// Outcome of deploying the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub tx_hash: TransactionHash,
    pub contract_address: String,
    pub block_hash: Option<String>,
    /// Time from submission until the receipt was seen.
    pub latency: Duration,
}

/// Outcome of an `update(string)` transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueUpdate {
    pub tx_hash: TransactionHash,
    pub block_hash: Option<String>,
    pub latency: Duration,
}

/// High-level operations against the value contract.
pub struct ValueContract<'a, T> {
    flow: &'a TransactionFlow<T>,
    confirmation_timeout: Duration,
}

impl<'a, T: Transport> ValueContract<'a, T> {
    pub fn new(flow: &'a TransactionFlow<T>, confirmation_timeout: Duration) -> Self {
        Self {
            flow,
            confirmation_timeout,
        }
    }

    /// Deploy compiled `bytecode` (hex) and wait for the contract address.
    pub async fn create(&self, bytecode: &str) -> RpcResult<Deployment> {
        let tx_hash = self.submit_deployment(bytecode).await?;
        self.await_deployment(tx_hash).await
    }

    /// Submit the creation transaction without waiting for it to be mined.
    pub async fn submit_deployment(&self, bytecode: &str) -> RpcResult<TransactionHash> {
        let params = TransactionParams::deploy(self.flow.sender(), abi::deploy_data(bytecode)?);
        self.flow.submit(&params).await
    }

    /// Wait for a submitted creation transaction and read the new address.
    pub async fn await_deployment(&self, tx_hash: TransactionHash) -> RpcResult<Deployment> {
        let submitted = Instant::now();
        let receipt = self
            .flow
            .await_receipt(&tx_hash, self.confirmation_timeout)
            .await?;
        let latency = submitted.elapsed();

        let contract_address = receipt.contract_address.ok_or_else(|| {
            RpcError::Decode(format!(
                "receipt for creation transaction {} has no contract address",
                tx_hash
            ))
        })?;

        tracing::info!(
            tx_hash = %tx_hash,
            contract_address = %contract_address,
            elapsed_ms = duration_ms(latency),
            "Contract deployed"
        );

        Ok(Deployment {
            tx_hash,
            contract_address,
            block_hash: receipt.block_hash,
            latency,
        })
    }

    /// Read the stored string with `getvalue()`.
    pub async fn get_value(&self, contract: &str) -> RpcResult<String> {
        let params = TransactionParams::invoke(self.flow.sender(), contract, abi::get_value_call_data());
        tracing::debug!(contract = %contract, "Calling getvalue()");

        let CallResult(returned) = self.flow.client().eth_call(&params).await?;
        Ok(abi::decode_get_value_result(&returned)?)
    }

    /// Replace the stored string with `update(string)` and wait until mined.
    pub async fn set_value(&self, contract: &str, value: &str) -> RpcResult<ValueUpdate> {
        let tx_hash = self.submit_update(contract, value).await?;
        self.await_update(tx_hash).await
    }

    /// Submit `update(string)` without waiting for it to be mined.
    pub async fn submit_update(&self, contract: &str, value: &str) -> RpcResult<TransactionHash> {
        let params =
            TransactionParams::invoke(self.flow.sender(), contract, abi::update_call_data(value));
        self.flow.submit(&params).await
    }

    /// Wait for a submitted update to be mined.
    pub async fn await_update(&self, tx_hash: TransactionHash) -> RpcResult<ValueUpdate> {
        let submitted = Instant::now();
        let receipt = self
            .flow
            .await_receipt(&tx_hash, self.confirmation_timeout)
            .await?;

        Ok(ValueUpdate {
            tx_hash,
            block_hash: receipt.block_hash,
            latency: submitted.elapsed(),
        })
    }
}
