// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying VeriChain contracts to EVM test networks.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;

pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use core::{
    artifact::ContractArtifact,
    deployment::{Deployer, DeploymentResult},
    network::{Credential, Credentials, NetworkProfile, NetworkRegistry},
};
pub use error::{Error, ErrorKind, Result};
