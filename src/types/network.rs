//! Deployment target networks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::DeployError;

pub const TESTNET_CHAIN_ID: u64 = 97;
pub const MAINNET_CHAIN_ID: u64 = 56;

pub const TESTNET_RPC_URL: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";
pub const MAINNET_RPC_URL: &str = "https://bsc-dataseed.binance.org";

/// The closed set of networks a profile can exist for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Testnet, Network::Mainnet];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Testnet => "BNB Smart Chain Testnet",
            Network::Mainnet => "BNB Smart Chain",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Testnet => TESTNET_CHAIN_ID,
            Network::Mainnet => MAINNET_CHAIN_ID,
        }
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Testnet => TESTNET_RPC_URL,
            Network::Mainnet => MAINNET_RPC_URL,
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// Comma-separated list of accepted names, for error messages.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|n| n.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(DeployError::UnknownNetwork {
                name: s.trim().to_string(),
            }),
        }
    }
}
