//! Custom error types for the deployer

use std::path::PathBuf;
use thiserror::Error;
use crate::types::Network;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("No network selected: set DEPLOY_NETWORK to one of {available}")]
    NoNetworkSelected {
        available: String,
    },

    #[error("Multiple networks selected {candidates:?}: exactly one profile may be active")]
    MultipleNetworksSelected {
        candidates: Vec<String>,
    },

    #[error("Unknown network '{name}' (expected testnet or mainnet)")]
    UnknownNetwork {
        name: String,
    },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidAddress {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    #[error("Failed to load profiles file {}", .path.display())]
    ProfilesFile {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Contract artifact {}: {message}", .path.display())]
    Artifact {
        path: PathBuf,
        message: String,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("Chain id mismatch on {network}: expected {expected}, RPC reports {actual}")]
    ChainMismatch {
        network: Network,
        expected: u64,
        actual: u64,
    },

    #[error("Deployment of {contract} failed: {message}")]
    Executor {
        contract: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

pub type DeployResult<T> = Result<T, DeployError>;

impl DeployError {
    /// Errors raised before any transaction could have been broadcast.
    pub fn is_preflight(&self) -> bool {
        !matches!(self, DeployError::Executor { .. })
    }
}
