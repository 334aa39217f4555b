// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{io, path::PathBuf};

use alloy::primitives::Address;
use verichain_tools::ops::{self, DeployConfig};

use crate::{
    common_args::{AuthArgs, NetworkArgs},
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACT},
    error::VeriChainDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Name of the contract to deploy, used to locate its artifact.
    #[arg(long, default_value = DEFAULT_CONTRACT)]
    contract: String,
    /// Path to a compiled contract artifact. Overrides --contract and --artifacts-dir.
    #[arg(long)]
    artifact: Option<PathBuf>,
    /// Directory holding compiled artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts_dir: PathBuf,
    /// Brand admin passed to the constructor. Defaults to the deploying account.
    #[arg(long, value_name = "ADDRESS")]
    brand_admin: Option<Address>,

    #[command(flatten)]
    network: NetworkArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
}

impl Args {
    fn config(&self) -> DeployConfig {
        let artifact = self.artifact.clone().unwrap_or_else(|| {
            self.artifacts_dir
                .join("contracts")
                .join(format!("{}.sol", self.contract))
                .join(format!("{}.json", self.contract))
        });
        DeployConfig {
            artifact,
            brand_admin: self.brand_admin,
        }
    }
}

pub async fn exec(args: Args) -> VeriChainDeployResult {
    let profile = args.network.resolve(&args.auth)?;
    let config = args.config();
    log::debug!("using artifact {}", config.artifact.display());

    let mut stdout = io::stdout().lock();
    if args.estimate_gas {
        ops::estimate_gas(profile, &config, &mut stdout).await?;
    } else {
        ops::deploy(profile, &config, &mut stdout).await?;
    }
    Ok(())
}
