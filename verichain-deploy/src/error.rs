// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type VeriChainDeployResult = Result<(), VeriChainDeployError>;

#[derive(Debug)]
pub struct VeriChainDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl VeriChainDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for VeriChainDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for VeriChainDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for VeriChainDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<verichain_tools::Error> for VeriChainDeployError {
    fn from(err: verichain_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
