// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{
    utils::{format_units, UnitsError},
    U256,
};

pub mod color;

/// Decodes a hex string, tolerating surrounding whitespace and a `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

/// Pretty-prints a gas price given in wei.
pub fn format_gas_price(wei: u128) -> Result<String, UnitsError> {
    Ok(format!("{} gwei", format_units(wei, "gwei")?))
}

/// Pretty-prints an amount of the native currency given in wei.
pub fn format_native(wei: U256) -> Result<String, UnitsError> {
    Ok(format!("{} ETH", format_units(wei, "ether")?))
}
