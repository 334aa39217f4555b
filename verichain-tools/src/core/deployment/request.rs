// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract-creation transaction request.

use std::{future::Future, time::Duration};

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// Contract-creation transaction priced at a fixed legacy gas price.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    gas_price_wei: u128,
}

impl DeploymentRequest {
    pub fn new(sender: Address, creation_code: Vec<u8>, gas_price_wei: u128) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(creation_code)
                .with_gas_price(gas_price_wei),
            gas_price_wei,
        }
    }

    pub fn gas_price(&self) -> u128 {
        self.gas_price_wei
    }

    pub async fn estimate_gas(
        &self,
        provider: &impl Provider,
        timeout: Duration,
    ) -> Result<u64, DeploymentError> {
        bounded(timeout, async {
            provider
                .estimate_gas(self.tx.clone())
                .await
                .map_err(DeploymentError::from)
        })
        .await
    }

    /// Submits the transaction and waits for its receipt.
    ///
    /// Every RPC round trip and the confirmation wait are each bounded by
    /// `timeout`; the transaction is neither cancelled nor resubmitted when
    /// the bound is exceeded.
    pub async fn exec(
        self,
        provider: &impl Provider,
        timeout: Duration,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider, timeout).await?;
        debug!(@grey, "estimated deploy gas: {}", gas);

        let mut tx = self.tx;
        tx.gas = Some(gas);

        let pending = bounded(timeout, async {
            provider
                .send_transaction(tx)
                .await
                .map_err(DeploymentError::from)
        })
        .await?;
        let tx_hash = *pending.tx_hash();
        info!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending
            .with_timeout(Some(timeout))
            .get_receipt()
            .await
            .map_err(|err| DeploymentError::from_pending(err, tx_hash, timeout))?;
        check_receipt(tx_hash, receipt.transaction_hash, receipt.status())?;

        Ok(receipt)
    }
}

/// Fails with [`DeploymentError::RequestTimeout`] if `fut` is still pending after `timeout`.
async fn bounded<T>(
    timeout: Duration,
    fut: impl Future<Output = Result<T, DeploymentError>>,
) -> Result<T, DeploymentError> {
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| DeploymentError::RequestTimeout { timeout })?
}

/// The receipt must belong to the submitted transaction and report success.
fn check_receipt(
    submitted: TxHash,
    confirmed: TxHash,
    status: bool,
) -> Result<(), DeploymentError> {
    if confirmed != submitted {
        return Err(DeploymentError::ReceiptMismatch {
            submitted,
            confirmed,
        });
    }
    if !status {
        return Err(DeploymentError::Reverted { tx_hash: submitted });
    }
    Ok(())
}
