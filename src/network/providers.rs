//! Network provider setup and pre-deployment chain checks

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::Context;
use tracing::{info, warn};
use url::Url;
use crate::{
    errors::{DeployError, DeployResult},
    network::retry::{retry_with_backoff, RetryConfig},
    types::Network,
};

pub const CHAIN_ID_RETRY: RetryConfig = RetryConfig {
    max_attempts: 5,
    initial_delay_ms: 500,
    max_delay_ms: 10000,
    exponential_base: 2.0,
};

/// Confirms the RPC endpoint serves the chain the selected profile targets.
pub async fn verify_chain_id(rpc_url: &Url, network: Network) -> DeployResult<u64> {
    let provider = ProviderBuilder::new().on_http(rpc_url.clone());

    info!("🔗 Testing connection to {}...", network.display_name());
    let chain_id = retry_with_backoff(
        || async {
            provider.get_chain_id().await
                .context("Failed to get chain id")
        },
        &CHAIN_ID_RETRY,
        &format!("{} connection", network.display_name()),
    ).await
    .inspect_err(|e| warn!("⚠️ Network connection failed: {}", e))?;

    ensure_chain_matches(network, chain_id)?;
    info!("✅ Connected to {} (chain id {})", network.display_name(), chain_id);
    Ok(chain_id)
}

pub fn ensure_chain_matches(network: Network, actual: u64) -> DeployResult<()> {
    if actual != network.chain_id() {
        return Err(DeployError::ChainMismatch {
            network,
            expected: network.chain_id(),
            actual,
        });
    }
    Ok(())
}
