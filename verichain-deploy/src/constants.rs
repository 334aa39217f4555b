// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Contract deployed when `--contract` is not given.
pub const DEFAULT_CONTRACT: &str = "VeriChainProduct";

/// Directory Hardhat writes compiled artifacts to.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
