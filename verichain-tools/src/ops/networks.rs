// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::Write;

use crate::{
    core::network::NetworkRegistry,
    utils::{color::Color, format_gas_price},
    Result,
};

/// Lists every network the registry can resolve.
pub fn print_networks(registry: &NetworkRegistry, out: &mut impl Write) -> Result<()> {
    for declaration in registry.declarations() {
        mintln!(out, "{}", declaration.name)?;
        greyln!(out, "  rpc endpoint: {}", declaration.rpc_endpoint.lavender())?;
        greyln!(
            out,
            "  gas price: {}",
            format_gas_price(declaration.gas_price)?.lavender()
        )?;
        greyln!(out, "  timeout: {}ms", declaration.timeout_ms)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::Credentials;

    #[test]
    fn lists_declared_networks() {
        let registry = NetworkRegistry::new(Credentials::none());
        let mut out = Vec::new();
        print_networks(&registry, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("neox_testnet"));
        assert!(out.contains("https://neoxt4seed1.ngd.network"));
        assert!(out.contains("banelabs"));
        assert!(out.contains("https://testnet.rpc.banelabs.org"));
        assert!(out.contains("120000ms"));
    }
}
