// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use verichain_tools::{ops, Credentials, NetworkRegistry};

use crate::error::VeriChainDeployResult;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: Args) -> VeriChainDeployResult {
    let registry = NetworkRegistry::new(Credentials::none());
    ops::print_networks(&registry, &mut io::stdout().lock())?;
    Ok(())
}
