//! Compiled contract artifacts

use alloy::primitives::Bytes;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;
use crate::errors::{DeployError, DeployResult};

/// Truffle writes `bytecode` as a hex string, Foundry as `{ "object": "0x…" }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Hex(String),
    Object { object: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    bytecode: BytecodeField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub bytecode: Bytes,
    pub path: PathBuf,
}

impl ContractArtifact {
    /// Loads `<dir>/<contract_name>.json`.
    pub fn load(dir: &Path, contract_name: &str) -> DeployResult<Self> {
        let path = dir.join(format!("{}.json", contract_name));
        let json = fs::read_to_string(&path).map_err(|e| DeployError::Artifact {
            path: path.clone(),
            message: format!("cannot read file: {}", e),
        })?;
        Self::from_json(&path, contract_name, &json)
    }

    pub fn from_json(path: &Path, contract_name: &str, json: &str) -> DeployResult<Self> {
        let fail = |message: String| DeployError::Artifact {
            path: path.to_path_buf(),
            message,
        };

        let raw: RawArtifact = serde_json::from_str(json)
            .map_err(|e| fail(format!("malformed artifact: {}", e)))?;

        if let Some(name) = &raw.contract_name {
            if name != contract_name {
                return Err(fail(format!(
                    "artifact is for {}, expected {}",
                    name, contract_name
                )));
            }
        }

        let hex = match raw.bytecode {
            BytecodeField::Hex(s) => s,
            BytecodeField::Object { object } => object,
        };
        let hex = hex.trim();
        if hex.contains("__") {
            return Err(fail("bytecode has unlinked library placeholders".to_string()));
        }

        let bytecode = Bytes::from_str(hex)
            .map_err(|e| fail(format!("bytecode is not valid hex: {}", e)))?;
        if bytecode.is_empty() {
            return Err(fail("bytecode is empty (abstract contract or interface?)".to_string()));
        }

        debug!(contract = contract_name, bytes = bytecode.len(), "Loaded contract artifact");
        Ok(Self {
            contract_name: contract_name.to_string(),
            bytecode,
            path: path.to_path_buf(),
        })
    }

    /// Creation code followed by the ABI-encoded constructor arguments.
    pub fn creation_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        code.into()
    }
}
