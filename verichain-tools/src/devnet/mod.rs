// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::time::Duration;

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use eyre::{Result, WrapErr};
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::core::network::{Credentials, NetworkProfile, DEFAULT_GAS_PRICE_WEI};

/// First prefunded anvil account.
pub const DEVNET_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;

pub mod addresses {
    pub use alloy::primitives::{address, Address};

    /// Address of [`DEVNET_PRIVATE_KEY`](super::DEVNET_PRIVATE_KEY).
    pub const OWNER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
}

/// Manage an anvil devnet node for deploying contracts.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new anvil node that mines every transaction immediately.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        Self::with_args(&[]).await
    }

    /// Starts a node that never mines, so no transaction is ever confirmed.
    pub async fn without_mining() -> Result<Self> {
        Self::with_args(&["--no-mining"]).await
    }

    async fn with_args(args: &[&str]) -> Result<Self> {
        let mut cmd = format!("anvil --host 0.0.0.0 --port {ANVIL_PORT}");
        for arg in args {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        // the foundry image runs its command through `/bin/sh -c`
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Listening on"))
            .with_cmd(vec![cmd])
            .start()
            .await
            .wrap_err("failed to start anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get anvil RPC port")?;
        let rpc = format!("http://localhost:{port}");
        Ok(Node {
            _container: container,
            rpc,
        })
    }

    /// Get the anvil node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Profile pointing at this node, signing with the prefunded devnet key.
    pub fn profile(&self, timeout: Duration) -> NetworkProfile {
        self.profile_with(&Credentials::from_private_key(DEVNET_PRIVATE_KEY), timeout)
    }

    pub fn profile_with(&self, credentials: &Credentials, timeout: Duration) -> NetworkProfile {
        NetworkProfile::new(
            "devnet",
            self.rpc(),
            credentials,
            DEFAULT_GAS_PRICE_WEI,
            timeout,
        )
    }

    /// Create a provider with the devnet keys to send requests to the node.
    pub async fn create_provider(&self) -> Result<impl Provider> {
        let signer: PrivateKeySigner = DEVNET_PRIVATE_KEY
            .parse()
            .wrap_err("failed to parse devnet private key")?;
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(self.rpc())
            .await?;
        Ok(provider)
    }
}
