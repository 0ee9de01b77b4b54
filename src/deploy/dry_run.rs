//! Dry-run executor: logs the deployment it would perform

use async_trait::async_trait;
use tracing::{info, warn};
use crate::{
    deploy::{ContractArtifact, DeploymentExecutor},
    errors::DeployResult,
    types::{DeploymentOutcome, DeploymentRequest, Network},
};

pub struct DryRunExecutor {
    network: Network,
    artifact: Option<ContractArtifact>,
}

impl DryRunExecutor {
    pub fn new(network: Network, artifact: Option<ContractArtifact>) -> Self {
        Self { network, artifact }
    }
}

#[async_trait]
impl DeploymentExecutor for DryRunExecutor {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    async fn deploy(&self, request: &DeploymentRequest) -> DeployResult<DeploymentOutcome> {
        info!("🎭 Dry run on {} - no transaction will be sent", self.network.display_name());
        info!("   Contract: {}", request.contract_name);
        info!("   Constructor: ({}, {})", request.lp_address, request.router_address);

        match &self.artifact {
            Some(artifact) => {
                let code = artifact.creation_code(&request.encoded_constructor_args());
                info!("   Creation code: {} bytes from {}", code.len(), artifact.path.display());
            }
            None => warn!("   No artifact loaded, creation code not assembled"),
        }

        Ok(DeploymentOutcome {
            contract_address: None,
            tx_hash: None,
            gas_used: None,
            simulated: true,
        })
    }
}
