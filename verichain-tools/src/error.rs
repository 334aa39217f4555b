// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    artifact::ArtifactError, auth::AuthError, deployment::DeploymentError, network::NetworkError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of every failure a deployment can end in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown network, unreadable artifact or bad constructor arguments.
    Configuration,
    /// No usable signing credential.
    Authorization,
    /// The RPC endpoint could not be reached or misbehaved.
    Network,
    /// The chain refused or reverted the creation transaction.
    RejectedTransaction,
    /// Confirmation was not observed in time.
    Timeout,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unit conversion error: {0}")]
    Units(#[from] alloy::primitives::utils::UnitsError),

    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Units(_) => ErrorKind::Configuration,
            Self::Network(err) => err.kind(),
            Self::Auth(err) => err.kind(),
            Self::Artifact(err) => err.kind(),
            Self::Deployment(err) => err.kind(),
        }
    }
}
