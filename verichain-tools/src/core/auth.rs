// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Signing identities derived from a network profile's credential.

use std::path::PathBuf;

use alloy::{
    primitives::FixedBytes,
    signers::local::{LocalSigner, PrivateKeySigner},
};

use crate::{
    core::network::{Credential, NetworkProfile},
    utils::{color::Color, decode0x},
    ErrorKind,
};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(
        "no signing credential configured for network {}\nset {} or pass --private-key",
        .network.red(),
        crate::core::network::PRIVATE_KEY_ENV.yellow()
    )]
    MissingCredential { network: String },
    #[error("invalid private key: expected 32 hex-encoded bytes")]
    InvalidPrivateKey,
    #[error("could not decrypt keystore {}: {source}", .path.display())]
    Keystore {
        path: PathBuf,
        source: alloy::signers::local::LocalSignerError,
    },
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Authorization
    }
}

/// Obtains the signer bound to the profile's credential.
///
/// Performs no network activity, so a missing or malformed credential is
/// reported before anything is submitted.
pub fn signer(profile: &NetworkProfile) -> Result<PrivateKeySigner, AuthError> {
    let credential = profile
        .credential()
        .ok_or_else(|| AuthError::MissingCredential {
            network: profile.name().to_owned(),
        })?;
    match credential {
        Credential::PrivateKey(key) => parse_private_key(key),
        Credential::Keystore { path, password } => LocalSigner::decrypt_keystore(path, password)
            .map_err(|source| AuthError::Keystore {
                path: path.clone(),
                source,
            }),
    }
}

pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, AuthError> {
    let bytes = decode0x(key).map_err(|_| AuthError::InvalidPrivateKey)?;
    if bytes.len() != 32 {
        return Err(AuthError::InvalidPrivateKey);
    }
    let key = FixedBytes::<32>::from_slice(&bytes);
    PrivateKeySigner::from_bytes(&key).map_err(|_| AuthError::InvalidPrivateKey)
}
