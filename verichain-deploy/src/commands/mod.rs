// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::VeriChainDeployResult;

mod deploy;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy a compiled contract to a named network
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the networks contracts can be deployed to
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> VeriChainDeployResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
    }
}
