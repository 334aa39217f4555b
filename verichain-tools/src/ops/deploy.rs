// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::{io::Write, path::PathBuf};

use alloy::primitives::Address;

use crate::{
    core::{
        artifact::ContractArtifact,
        auth,
        deployment::{Deployer, DeploymentResult, GasEstimate},
        network::NetworkProfile,
    },
    utils::{
        color::{Color, DebugColor},
        format_gas_price, format_native,
    },
    Result,
};

#[derive(Debug)]
pub struct DeployConfig {
    /// Compiled contract artifact to deploy.
    pub artifact: PathBuf,
    /// Brand admin passed to the constructor; the deployer's own address when unset.
    pub brand_admin: Option<Address>,
}

/// Deploys the configured contract, reporting progress to `out`.
pub async fn deploy(
    profile: NetworkProfile,
    config: &DeployConfig,
    out: &mut impl Write,
) -> Result<DeploymentResult> {
    let (deployer, sender) = prepare(profile, config)?;
    greyln!(out, "Deploying contracts with the account: {sender}")?;

    let contract_name = deployer.contract_name().to_owned();
    let result = deployer.deploy().await?;

    mintln!(out, "{contract_name} deployed to: {}", result.contract_address)?;
    greyln!(out, "deployment tx hash: {}", result.transaction_hash)?;
    Ok(result)
}

/// Prints the cost of deploying the configured contract without submitting it.
pub async fn estimate_gas(
    profile: NetworkProfile,
    config: &DeployConfig,
    out: &mut impl Write,
) -> Result<GasEstimate> {
    let (deployer, sender) = prepare(profile, config)?;
    greyln!(out, "Estimating deployment from the account: {sender}")?;

    let estimate = deployer.estimate_gas().await?;
    greyln!(out, "deployment tx gas: {}", estimate.gas.debug_lavender())?;
    greyln!(
        out,
        "gas price: {}",
        format_gas_price(estimate.gas_price)?.lavender()
    )?;
    greyln!(
        out,
        "deployment tx total cost: {}",
        format_native(estimate.total_cost())?.lavender()
    )?;
    Ok(estimate)
}

/// Resolves the signer before touching the artifact, so a missing credential
/// is the first thing reported. The signer is derived once and handed to the
/// deployer.
fn prepare(profile: NetworkProfile, config: &DeployConfig) -> Result<(Deployer, Address)> {
    let signer = auth::signer(&profile)?;
    let sender = signer.address();
    let artifact = ContractArtifact::load(&config.artifact)?;
    let brand_admin = config.brand_admin.unwrap_or(sender);
    let deployer = Deployer::builder()
        .profile(profile)
        .artifact(artifact)
        .constructor_args(vec![brand_admin.to_string()])
        .signer(signer)
        .build();
    Ok((deployer, sender))
}

#[cfg(test)]
mod tests {
    use std::{fs, time::Duration};

    use super::*;
    use crate::{
        core::{artifact::tests::fixture_json, network::Credentials},
        ErrorKind,
    };

    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn profile(credentials: Credentials) -> NetworkProfile {
        NetworkProfile::new(
            "unit",
            "http://127.0.0.1:1",
            &credentials,
            50_000_000_000,
            Duration::from_secs(120),
        )
    }

    #[tokio::test]
    async fn missing_credential_prints_nothing() {
        let config = DeployConfig {
            artifact: PathBuf::from("/nonexistent/VeriChainProduct.json"),
            brand_admin: None,
        };
        let mut out = Vec::new();
        let err = deploy(profile(Credentials::none()), &config, &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn reports_signer_before_submitting() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("VeriChainProduct.json");
        fs::write(&artifact, fixture_json()).unwrap();
        let config = DeployConfig {
            artifact,
            brand_admin: None,
        };

        let mut out = Vec::new();
        let err = deploy(profile(Credentials::from_private_key(KEY)), &config, &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(
            "Deploying contracts with the account: 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        ));
        assert!(!out.contains("deployed to"));
    }

    #[tokio::test]
    async fn missing_artifact_is_a_configuration_error() {
        let config = DeployConfig {
            artifact: PathBuf::from("/nonexistent/VeriChainProduct.json"),
            brand_admin: None,
        };
        let err = estimate_gas(
            profile(Credentials::from_private_key(KEY)),
            &config,
            &mut Vec::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
