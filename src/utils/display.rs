//! Display and printing utilities

use tracing::{error, info, warn};
use crate::{
    config::{ActiveSelection, Config},
    types::{DeploymentRecord, DeploymentStatus, CONTRACT_NAME},
};

pub fn print_deployment_plan(config: &Config, selection: &ActiveSelection, executor: &str) {
    let network = selection.network();
    let profile = selection.profile();

    info!("📋 Deployment plan:");
    info!("   Contract: {}", CONTRACT_NAME);
    info!("   Network: {} ({}, chain id {})", network, network.display_name(), network.chain_id());
    info!("   LP Address: {}", profile.lp_address);
    info!("   Router Address: {}", profile.router_address);
    info!("   Executor: {}", executor);
    info!("   Artifacts: {}", config.artifacts_dir.display());
    match &config.profiles_file {
        Some(path) => info!("   Profiles: {}", path.display()),
        None => info!("   Profiles: built-in"),
    }

    if config.dry_run {
        info!("   🎭 DRY RUN - nothing will be broadcast");
    } else if network.is_mainnet() {
        warn!("   ⚠️  MAINNET - this deployment spends real funds");
    } else {
        info!("   ⚠️  TESTNET MODE - No real funds at risk");
    }
}

pub fn print_deployment_record(record: &DeploymentRecord) {
    match record.status {
        DeploymentStatus::Success | DeploymentStatus::Simulated => {
            info!("\n✅ DEPLOYMENT {}", record.id);
            info!("📍 Network: {} (chain id {})", record.network, record.chain_id);
            info!("   Status: {:?}", record.status);
            if let Some(address) = &record.contract_address {
                info!("   Contract Address: {}", address);
            }
            if let Some(tx_hash) = &record.tx_hash {
                info!("   Tx Hash: {}", tx_hash);
            }
            if let Some(gas_used) = record.gas_used {
                info!("   Gas Used: {}", gas_used);
            }
        }
        DeploymentStatus::Failed => {
            error!("\n❌ DEPLOYMENT FAILED {}", record.id);
            error!("   Network: {}", record.network);
            error!("   Error: {}", record.error_message.as_deref().unwrap_or("Unknown"));
        }
    }
}
