// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts are the JSON files Hardhat writes under
//! `artifacts/contracts/<Name>.sol/<Name>.json`. Only the fields needed to
//! build a contract-creation transaction are read.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;

use crate::{utils::decode0x, ErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("could not read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("artifact for {0} has unlinked library references")]
    UnlinkedLibraries(String),
    #[error("artifact for {0} has invalid bytecode")]
    InvalidBytecode(String),
    #[error("artifact for {0} has no creation bytecode (abstract contract or interface?)")]
    EmptyBytecode(String),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

impl ArtifactError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    abi: JsonAbi,
    bytecode: String,
}

/// Creation bytecode and ABI of a compiled contract.
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    contract_name: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        debug!(@grey, "reading artifact {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(text)?;
        // Hardhat leaves `__$<hash>$__` placeholders where libraries must be linked
        if raw.bytecode.contains("__") {
            return Err(ArtifactError::UnlinkedLibraries(raw.contract_name));
        }
        let bytecode = decode0x(&raw.bytecode)
            .map_err(|_| ArtifactError::InvalidBytecode(raw.contract_name.clone()))?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(raw.contract_name));
        }
        Ok(Self {
            contract_name: raw.contract_name,
            abi: raw.abi,
            bytecode: bytecode.into(),
        })
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    /// Returns the creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn creation_code(&self, constructor_args: &[String]) -> Result<Vec<u8>, ArtifactError> {
        let mut code = self.bytecode.to_vec();
        code.extend(self.encode_constructor_args(constructor_args)?);
        Ok(code)
    }

    fn encode_constructor_args(&self, constructor_args: &[String]) -> Result<Vec<u8>, ArtifactError> {
        let Some(constructor) = self.constructor() else {
            if constructor_args.is_empty() {
                return Ok(Vec::new());
            }
            return Err(ArtifactError::InvalidConstructor(format!(
                "{} has no constructor but {} arguments were given",
                self.contract_name,
                constructor_args.len()
            )));
        };
        if constructor_args.len() != constructor.inputs.len() {
            return Err(ArtifactError::InvalidConstructor(format!(
                "mismatch number of constructor arguments (want {} ({}); got {})",
                constructor_signature(constructor),
                constructor.inputs.len(),
                constructor_args.len(),
            )));
        }

        let mut values = Vec::<DynSolValue>::with_capacity(constructor_args.len());
        for (arg, param) in constructor_args.iter().zip(constructor.inputs.iter()) {
            let ty = param.resolve().map_err(|err| {
                ArtifactError::InvalidConstructor(format!(
                    "could not resolve constructor arg {param}: {err}"
                ))
            })?;
            let value = ty.coerce_str(arg).map_err(|err| {
                ArtifactError::InvalidConstructor(format!(
                    "could not parse constructor arg {param} from {arg:?}: {err}"
                ))
            })?;
            values.push(value);
        }

        constructor
            .abi_encode_input_raw(&values)
            .map_err(|err| ArtifactError::InvalidConstructor(err.to_string()))
    }
}

fn constructor_signature(constructor: &Constructor) -> String {
    let inputs: Vec<&str> = constructor
        .inputs
        .iter()
        .map(|param| param.ty.as_str())
        .collect();
    format!("constructor({})", inputs.join(","))
}
