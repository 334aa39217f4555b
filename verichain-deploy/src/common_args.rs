// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use eyre::Context;
use verichain_tools::{Credentials, NetworkProfile, NetworkRegistry};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long, conflicts_with = "private_key")]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long, conflicts_with_all = ["private_key", "private_key_path"])]
    keystore_path: Option<PathBuf>,
    /// Keystore password file
    #[arg(long, requires = "keystore_path")]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    /// Credentials from the command line, falling back to `PRIVATE_KEY` in the environment.
    pub fn credentials(&self) -> eyre::Result<Credentials> {
        if let Some(key) = &self.private_key {
            return Ok(Credentials::from_private_key(key.as_str()));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return Ok(Credentials::from_private_key(key.trim()));
        }

        if let Some(keystore) = &self.keystore_path {
            let password = match &self.keystore_password_path {
                Some(file) => fs::read_to_string(file)
                    .wrap_err("could not open keystore password file")?
                    .trim_end()
                    .to_owned(),
                None => String::new(),
            };
            return Ok(Credentials::from_keystore(keystore, password));
        }

        Ok(Credentials::from_env())
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Name of the target network (see `verichain-deploy networks`)
    #[arg(short, long)]
    pub network: String,
}

impl NetworkArgs {
    pub fn resolve(&self, auth: &AuthArgs) -> eyre::Result<NetworkProfile> {
        let registry = NetworkRegistry::new(auth.credentials()?);
        let profile = registry.resolve(&self.network)?;
        log::debug!(
            "resolved network {} at {}",
            profile.name(),
            profile.rpc_endpoint()
        );
        Ok(profile)
    }
}
