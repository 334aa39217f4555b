// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! A [`Deployer`] performs exactly one deployment: obtain a signer from the
//! profile's credential, submit the contract-creation transaction, and wait
//! for its receipt within the profile's timeout. Nothing is retried.

use std::time::Duration;

use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash, U256},
    signers::local::PrivateKeySigner,
    providers::{PendingTransactionError, ProviderBuilder, WatchTxError},
    rpc::json_rpc::ErrorPayload,
    transports::{RpcError, TransportErrorKind},
};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        artifact::{ArtifactError, ContractArtifact},
        auth::{self, AuthError},
        network::NetworkProfile,
    },
    utils::color::{Color, DebugColor},
    ErrorKind,
};
use request::DeploymentRequest;

pub mod request;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("rpc error: {0}")]
    Network(RpcError<TransportErrorKind>),
    #[error("transaction rejected by the network (code {code}): {}", .message.red())]
    Rejected { code: i64, message: String },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error(
        "deploy tx {} was not confirmed within {}s\n\
         the transaction was not cancelled and may still be mined",
        .tx_hash.debug_red(),
        .timeout.as_secs()
    )]
    Timeout { tx_hash: TxHash, timeout: Duration },
    #[error("rpc request was not answered within {}s", .timeout.as_secs_f32())]
    RequestTimeout { timeout: Duration },
    #[error("failed to confirm deploy tx {tx_hash}: {source}")]
    Confirmation {
        tx_hash: TxHash,
        source: PendingTransactionError,
    },
    #[error("receipt for {submitted} reports transaction {confirmed}")]
    ReceiptMismatch {
        submitted: TxHash,
        confirmed: TxHash,
    },
    #[error("missing contract address in receipt for {tx_hash}")]
    NoContractAddress { tx_hash: TxHash },
}

impl DeploymentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(err) => err.kind(),
            Self::Artifact(err) => err.kind(),
            Self::Rejected { .. } | Self::Reverted { .. } => ErrorKind::RejectedTransaction,
            Self::Timeout { .. } | Self::RequestTimeout { .. } => ErrorKind::Timeout,
            Self::Network(_)
            | Self::Confirmation { .. }
            | Self::ReceiptMismatch { .. }
            | Self::NoContractAddress { .. } => ErrorKind::Network,
        }
    }

    pub(crate) fn from_pending(
        err: PendingTransactionError,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Self {
        match err {
            PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
                Self::Timeout { tx_hash, timeout }
            }
            PendingTransactionError::TransportError(err) => err.into(),
            source => Self::Confirmation { tx_hash, source },
        }
    }
}

/// JSON-RPC error responses are the node refusing the transaction; anything
/// else means the endpoint could not be talked to.
impl From<RpcError<TransportErrorKind>> for DeploymentError {
    fn from(err: RpcError<TransportErrorKind>) -> Self {
        match err {
            RpcError::ErrorResp(ErrorPayload { code, message, .. }) => Self::Rejected {
                code,
                message: message.into_owned(),
            },
            err => Self::Network(err),
        }
    }
}

/// A confirmed contract creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentResult {
    pub network: String,
    pub deployer: Address,
    pub contract_address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

/// Gas needed by a contract-creation transaction at the profile's gas price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas: u64,
    pub gas_price: u128,
}

impl GasEstimate {
    pub fn total_cost(&self) -> U256 {
        U256::from(self.gas) * U256::from(self.gas_price)
    }
}

/// Deploys one contract to one network.
///
/// Consumed by [`Deployer::deploy`]; every deployment builds its own provider.
#[derive(Debug, TypedBuilder)]
pub struct Deployer {
    profile: NetworkProfile,
    artifact: ContractArtifact,
    #[builder(default, setter(into))]
    constructor_args: Vec<String>,
    /// Signer already derived from the profile's credential.
    #[builder(default, setter(strip_option))]
    signer: Option<PrivateKeySigner>,
}

impl Deployer {
    pub fn contract_name(&self) -> &str {
        self.artifact.contract_name()
    }

    /// Address of the signer the deployment will be sent from.
    pub fn sender(&self) -> Result<Address, DeploymentError> {
        Ok(self.signer()?.address())
    }

    fn signer(&self) -> Result<PrivateKeySigner, AuthError> {
        match &self.signer {
            Some(signer) => Ok(signer.clone()),
            None => auth::signer(&self.profile),
        }
    }

    pub async fn deploy(self) -> Result<DeploymentResult, DeploymentError> {
        let signer = self.signer()?;
        let sender = signer.address();
        debug!(@grey, "sender address: {}", sender.debug_lavender());
        let creation_code = self.artifact.creation_code(&self.constructor_args)?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(self.profile.rpc_endpoint())
            .await?;
        debug!(@grey,
            "deploying {} to {} at {}",
            self.artifact.contract_name(),
            self.profile.name(),
            self.profile.rpc_endpoint()
        );

        let req = DeploymentRequest::new(sender, creation_code, self.profile.gas_price());
        let receipt = req.exec(&provider, self.profile.timeout()).await?;
        let tx_hash = receipt.transaction_hash;
        let contract_address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress { tx_hash })?;

        info!(@grey, "deployed code at address: {}", contract_address.debug_lavender());
        debug!(@grey, "gas used: {}", receipt.gas_used);

        Ok(DeploymentResult {
            network: self.profile.name().to_owned(),
            deployer: sender,
            contract_address,
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }

    /// Estimates the creation transaction without submitting it.
    pub async fn estimate_gas(self) -> Result<GasEstimate, DeploymentError> {
        let sender = self.sender()?;
        let creation_code = self.artifact.creation_code(&self.constructor_args)?;
        let provider = ProviderBuilder::new()
            .connect(self.profile.rpc_endpoint())
            .await?;
        let req = DeploymentRequest::new(sender, creation_code, self.profile.gas_price());
        let gas = req.estimate_gas(&provider, self.profile.timeout()).await?;
        Ok(GasEstimate {
            gas,
            gas_price: req.gas_price(),
        })
    }
}
