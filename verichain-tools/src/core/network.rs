// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Registry of the networks VeriChain contracts can be deployed to.

use std::{env, fmt, path::PathBuf, time::Duration};

use crate::{utils::color::Color, ErrorKind};

/// Environment variable holding the hex-encoded deployer private key.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Gas price offered on every declared network (50 gwei).
pub const DEFAULT_GAS_PRICE_WEI: u128 = 50_000_000_000;

/// Confirmation timeout on every declared network.
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Static connection parameters for a named network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkDeclaration {
    pub name: &'static str,
    pub rpc_endpoint: &'static str,
    pub gas_price: u128,
    pub timeout_ms: u64,
}

pub const NEOX_TESTNET: NetworkDeclaration = NetworkDeclaration {
    name: "neox_testnet",
    rpc_endpoint: "https://neoxt4seed1.ngd.network",
    gas_price: DEFAULT_GAS_PRICE_WEI,
    timeout_ms: DEFAULT_TIMEOUT_MS,
};

pub const BANELABS: NetworkDeclaration = NetworkDeclaration {
    name: "banelabs",
    rpc_endpoint: "https://testnet.rpc.banelabs.org",
    gas_price: DEFAULT_GAS_PRICE_WEI,
    timeout_ms: DEFAULT_TIMEOUT_MS,
};

pub const NETWORKS: &[NetworkDeclaration] = &[NEOX_TESTNET, BANELABS];

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error(
        "unknown network {}\nknown networks: {}",
        .name.red(),
        .known.join(", ")
    )]
    UnknownNetwork { name: String, known: Vec<&'static str> },
}

impl NetworkError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

/// Source of a signing key.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Hex-encoded secp256k1 private key, with or without `0x`.
    PrivateKey(String),
    /// Encrypted JSON keystore and its password.
    Keystore { path: PathBuf, password: String },
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKey(_) => f.write_str("PrivateKey(<redacted>)"),
            Self::Keystore { path, .. } => f
                .debug_struct("Keystore")
                .field("path", path)
                .finish_non_exhaustive(),
        }
    }
}

/// Signing configuration supplied to the registry at startup.
///
/// The same static network declarations resolve to different profiles
/// depending on the credentials the registry was built with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    credential: Option<Credential>,
}

impl Credentials {
    /// No signing capability.
    pub fn none() -> Self {
        Self::default()
    }

    /// An empty key grants no signing capability.
    pub fn from_private_key(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.trim().is_empty() {
            return Self::none();
        }
        Self {
            credential: Some(Credential::PrivateKey(key)),
        }
    }

    pub fn from_keystore(path: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            credential: Some(Credential::Keystore {
                path: path.into(),
                password: password.into(),
            }),
        }
    }

    /// Reads [`PRIVATE_KEY_ENV`] from the process environment.
    pub fn from_env() -> Self {
        match env::var(PRIVATE_KEY_ENV) {
            Ok(key) => Self::from_private_key(key),
            Err(_) => Self::none(),
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.credential.is_none()
    }
}

/// Connection parameters for one network, bound to a signing credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkProfile {
    name: String,
    rpc_endpoint: String,
    credential: Option<Credential>,
    gas_price: u128,
    timeout: Duration,
}

impl NetworkProfile {
    pub fn new(
        name: impl Into<String>,
        rpc_endpoint: impl Into<String>,
        credentials: &Credentials,
        gas_price: u128,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            rpc_endpoint: rpc_endpoint.into(),
            credential: credentials.credential().cloned(),
            gas_price,
            timeout,
        }
    }

    fn from_declaration(declaration: &NetworkDeclaration, credentials: &Credentials) -> Self {
        Self::new(
            declaration.name,
            declaration.rpc_endpoint,
            credentials,
            declaration.gas_price,
            Duration::from_millis(declaration.timeout_ms),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rpc_endpoint(&self) -> &str {
        &self.rpc_endpoint
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Gas price in wei.
    pub fn gas_price(&self) -> u128 {
        self.gas_price
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Immutable mapping from network name to [`NetworkProfile`].
#[derive(Debug)]
pub struct NetworkRegistry {
    declarations: &'static [NetworkDeclaration],
    credentials: Credentials,
}

impl NetworkRegistry {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            declarations: NETWORKS,
            credentials,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.declarations.iter().map(|declaration| declaration.name)
    }

    pub fn declarations(&self) -> &'static [NetworkDeclaration] {
        self.declarations
    }

    /// Looks up a network by name and binds it to the registry's credentials.
    pub fn resolve(&self, name: &str) -> Result<NetworkProfile, NetworkError> {
        let declaration = self
            .declarations
            .iter()
            .find(|declaration| declaration.name == name)
            .ok_or_else(|| NetworkError::UnknownNetwork {
                name: name.to_owned(),
                known: self.names().collect(),
            })?;
        debug!(@grey, "resolved network {} at {}", declaration.name, declaration.rpc_endpoint);
        Ok(NetworkProfile::from_declaration(
            declaration,
            &self.credentials,
        ))
    }
}
