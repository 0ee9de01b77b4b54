//! Resolution of the single active network profile

use tracing::info;
use crate::{
    errors::{DeployError, DeployResult},
    types::{Network, NetworkProfile, ProfileRegistry},
};

/// The one profile deployed in this run. Only constructible through
/// [`ActiveSelection::resolve`], which rejects zero or multiple selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSelection {
    profile: NetworkProfile,
}

impl ActiveSelection {
    pub fn resolve(raw: Option<&str>, registry: &ProfileRegistry) -> DeployResult<Self> {
        let candidates: Vec<&str> = raw
            .unwrap_or_default()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        let name = match candidates.as_slice() {
            [] => {
                return Err(DeployError::NoNetworkSelected {
                    available: Network::available(),
                });
            }
            [single] => *single,
            many => {
                return Err(DeployError::MultipleNetworksSelected {
                    candidates: many.iter().map(|s| s.to_string()).collect(),
                });
            }
        };

        let network: Network = name.parse()?;
        let profile = *registry.get(network);
        info!(%network, "Selected network profile");
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    pub fn network(&self) -> Network {
        self.profile.network
    }
}
