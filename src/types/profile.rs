//! Network profiles: the (lp, router) constructor pair for each network

use alloy::primitives::Address;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use crate::{
    errors::{DeployError, DeployResult},
    types::{parse_address, Network, LP_MAINNET, LP_TESTNET, ROUTER_MAINNET, ROUTER_TESTNET},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    pub network: Network,
    pub lp_address: Address,
    pub router_address: Address,
}

impl NetworkProfile {
    pub const fn new(network: Network, lp_address: Address, router_address: Address) -> Self {
        Self {
            network,
            lp_address,
            router_address,
        }
    }

    pub const fn builtin(network: Network) -> Self {
        match network {
            Network::Testnet => Self::new(Network::Testnet, LP_TESTNET, ROUTER_TESTNET),
            Network::Mainnet => Self::new(Network::Mainnet, LP_MAINNET, ROUTER_MAINNET),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    lp_address: String,
    router_address: String,
}

/// Top-level entries in document order. Repeated keys are kept so they can be
/// rejected instead of silently overwriting one another.
struct ProfileEntries(Vec<(String, RawProfile)>);

impl<'de> Deserialize<'de> for ProfileEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ProfileEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of network name to profile")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, profile)) = map.next_entry::<String, RawProfile>()? {
                    entries.push((key, profile));
                }
                Ok(ProfileEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Exactly one profile per [`Network`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRegistry {
    testnet: NetworkProfile,
    mainnet: NetworkProfile,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileRegistry {
    pub const fn builtin() -> Self {
        Self {
            testnet: NetworkProfile::builtin(Network::Testnet),
            mainnet: NetworkProfile::builtin(Network::Mainnet),
        }
    }

    pub fn get(&self, network: Network) -> &NetworkProfile {
        match network {
            Network::Testnet => &self.testnet,
            Network::Mainnet => &self.mainnet,
        }
    }

    pub fn profiles(&self) -> [&NetworkProfile; 2] {
        [&self.testnet, &self.mainnet]
    }

    fn set(&mut self, profile: NetworkProfile) {
        match profile.network {
            Network::Testnet => self.testnet = profile,
            Network::Mainnet => self.mainnet = profile,
        }
    }

    /// Builds a registry from built-ins overlaid with a JSON document keyed by
    /// network name. Every address is validated before it is accepted.
    pub fn from_json_str(json: &str) -> DeployResult<Self> {
        let ProfileEntries(entries) =
            serde_json::from_str(json).map_err(|e| DeployError::Config {
                message: format!("Malformed profiles document: {}", e),
            })?;

        let mut registry = Self::builtin();
        let mut seen = BTreeSet::new();
        for (key, entry) in entries {
            let network: Network = key.parse()?;
            if !seen.insert(network) {
                return Err(DeployError::Config {
                    message: format!("duplicate profile for {network} (key '{key}')"),
                });
            }
            let lp_address = parse_address(&format!("{network}.lp_address"), &entry.lp_address)?;
            let router_address =
                parse_address(&format!("{network}.router_address"), &entry.router_address)?;

            if lp_address == router_address {
                return Err(DeployError::Config {
                    message: format!("{network}: lp_address and router_address are identical"),
                });
            }

            debug!(%network, %lp_address, %router_address, "Profile override");
            registry.set(NetworkProfile::new(network, lp_address, router_address));
        }
        Ok(registry)
    }

    pub fn from_file(path: &Path) -> DeployResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| DeployError::ProfilesFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let registry = Self::from_json_str(&contents)?;
        info!("📄 Loaded network profiles from {}", path.display());
        Ok(registry)
    }
}
