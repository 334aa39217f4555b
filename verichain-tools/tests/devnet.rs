// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployments against a local anvil node.

#![cfg(feature = "integration-tests")]

use std::{fs, time::Duration};

use alloy::{consensus::Transaction as _, primitives::address, providers::Provider};
use eyre::Result;
use verichain_tools::{
    core::{deployment::DeploymentError, network::Credentials},
    devnet::{addresses, Node},
    ops::{self, DeployConfig},
    ContractArtifact, Deployer, ErrorKind,
};

/// Creation code for a contract whose runtime returns 42; constructor input is ignored.
const ARTIFACT: &str = r#"{
    "_format": "hh-sol-artifact-1",
    "contractName": "VeriChainProduct",
    "sourceName": "contracts/VeriChainProduct.sol",
    "abi": [
        {
            "inputs": [{ "internalType": "address", "name": "brandAdmin", "type": "address" }],
            "stateMutability": "nonpayable",
            "type": "constructor"
        }
    ],
    "bytecode": "0x600a600c600039600a6000f3602a60005260206000f3",
    "deployedBytecode": "0x602a60005260206000f3",
    "linkReferences": {},
    "deployedLinkReferences": {}
}"#;

const TIMEOUT: Duration = Duration::from_secs(120);

fn deployer(profile: verichain_tools::NetworkProfile) -> Result<Deployer> {
    Ok(Deployer::builder()
        .profile(profile)
        .artifact(ContractArtifact::from_json(ARTIFACT)?)
        .constructor_args(vec![addresses::OWNER.to_string()])
        .build())
}

#[tokio::test]
async fn deploys_with_signer_as_brand_admin() -> Result<()> {
    let devnode = Node::new().await?;
    let dir = tempfile::tempdir()?;
    let artifact = dir.path().join("VeriChainProduct.json");
    fs::write(&artifact, ARTIFACT)?;
    let config = DeployConfig {
        artifact,
        brand_admin: None,
    };

    let mut out = Vec::new();
    let result = ops::deploy(devnode.profile(TIMEOUT), &config, &mut out).await?;

    assert_eq!(result.deployer, addresses::OWNER);
    assert_eq!(result.network, "devnet");
    assert_eq!(result.contract_address, addresses::OWNER.create(0));

    let out = String::from_utf8(out)?;
    let signer_line = out
        .find(&format!("Deploying contracts with the account: {}", addresses::OWNER))
        .expect("signer address printed");
    let result_line = out
        .find(&format!(
            "VeriChainProduct deployed to: {}",
            result.contract_address
        ))
        .expect("contract address printed");
    assert!(signer_line < result_line);

    let provider = devnode.create_provider().await?;
    let code = provider.get_code_at(result.contract_address).await?;
    assert_eq!(code.to_vec(), alloy::hex::decode("602a60005260206000f3")?);

    let receipt = provider
        .get_transaction_receipt(result.transaction_hash)
        .await?
        .expect("receipt for reported hash");
    assert_eq!(receipt.contract_address, Some(result.contract_address));
    let tx = provider
        .get_transaction_by_hash(result.transaction_hash)
        .await?
        .expect("reported transaction");
    assert_eq!(tx.gas_price(), Some(50_000_000_000));
    Ok(())
}

#[tokio::test]
async fn estimates_without_submitting() -> Result<()> {
    let devnode = Node::new().await?;
    let estimate = deployer(devnode.profile(TIMEOUT))?.estimate_gas().await?;
    assert!(estimate.gas > 21_000);
    assert_eq!(estimate.gas_price, 50_000_000_000);

    let provider = devnode.create_provider().await?;
    assert_eq!(provider.get_transaction_count(addresses::OWNER).await?, 0);
    Ok(())
}

#[tokio::test]
async fn unconfirmed_deployment_times_out() -> Result<()> {
    let devnode = Node::without_mining().await?;
    let err = deployer(devnode.profile(Duration::from_secs(3)))?
        .deploy()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout, "{err}");
    assert!(matches!(err, DeploymentError::Timeout { .. }));
    Ok(())
}

#[tokio::test]
async fn unfunded_account_is_rejected() -> Result<()> {
    let devnode = Node::new().await?;
    // key 0x..01 holds no funds on a fresh anvil chain
    let credentials = Credentials::from_private_key(format!("{:0>64}", "1"));
    let profile = devnode.profile_with(&credentials, TIMEOUT);
    let err = deployer(profile)?.deploy().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RejectedTransaction, "{err}");

    let provider = devnode.create_provider().await?;
    let unfunded = address!("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
    assert_eq!(provider.get_transaction_count(unfunded).await?, 0);
    Ok(())
}
