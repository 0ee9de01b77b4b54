//! Contract creation over JSON-RPC

use alloy::{
    network::{EthereumWallet, ReceiptResponse as _, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder},
    rpc::types::eth::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};
use url::Url;
use crate::{
    config::Config,
    deploy::{ContractArtifact, DeploymentExecutor},
    errors::{DeployError, DeployResult},
    network::verify_chain_id,
    types::{DeploymentOutcome, DeploymentRequest, Network},
};

pub struct RpcExecutor {
    network: Network,
    rpc_url: Url,
    wallet: EthereumWallet,
    deployer: Address,
    artifact: ContractArtifact,
    receipt_timeout: Duration,
}

impl RpcExecutor {
    pub fn new(config: &Config, network: Network, artifact: ContractArtifact) -> DeployResult<Self> {
        let private_key = config.private_key.as_deref().ok_or_else(|| DeployError::Config {
            message: "PRIVATE_KEY is required unless DRY_RUN=true".to_string(),
        })?;
        let signer = PrivateKeySigner::from_str(private_key.trim()).map_err(|e| DeployError::Config {
            message: format!("Failed to parse private key: {}", e),
        })?;
        let deployer = signer.address();

        Ok(Self {
            network,
            rpc_url: config.rpc_url_for(network)?,
            wallet: EthereumWallet::from(signer),
            deployer,
            artifact,
            receipt_timeout: Duration::from_secs(config.receipt_timeout_secs),
        })
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub fn creation_code(&self, request: &DeploymentRequest) -> Bytes {
        self.artifact.creation_code(&request.encoded_constructor_args())
    }

    fn failure(
        request: &DeploymentRequest,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> DeployError {
        DeployError::Executor {
            contract: request.contract_name.clone(),
            message: message.into(),
            source,
        }
    }
}

#[async_trait]
impl DeploymentExecutor for RpcExecutor {
    fn name(&self) -> &'static str {
        "rpc"
    }

    async fn deploy(&self, request: &DeploymentRequest) -> DeployResult<DeploymentOutcome> {
        if request.contract_name != self.artifact.contract_name {
            return Err(Self::failure(
                request,
                format!("loaded artifact is for {}", self.artifact.contract_name),
                None,
            ));
        }

        verify_chain_id(&self.rpc_url, self.network).await?;

        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(self.wallet.clone())
            .on_http(self.rpc_url.clone());

        let tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_deploy_code(self.creation_code(request));

        info!("📤 Sending deployment transaction to {}:", self.network.display_name());
        info!("   Deployer: {}", self.deployer);
        info!("   Artifact: {}", self.artifact.path.display());

        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| Self::failure(request, "failed to send transaction", Some(e.into())))?;

        let tx_hash = pending.tx_hash().to_string();
        info!("📡 Deployment transaction sent: {}", tx_hash);

        let receipt = tokio::time::timeout(self.receipt_timeout, pending.get_receipt())
            .await
            .map_err(|_| {
                Self::failure(
                    request,
                    format!(
                        "no receipt for {} after {} seconds",
                        tx_hash,
                        self.receipt_timeout.as_secs()
                    ),
                    None,
                )
            })?
            .map_err(|e| Self::failure(request, "failed to fetch receipt", Some(e.into())))?;

        if !receipt.status() {
            error!("❌ Deployment transaction reverted: {}", tx_hash);
            return Err(Self::failure(request, format!("transaction {} reverted", tx_hash), None));
        }

        let contract_address = receipt.contract_address;
        info!(
            "✅ Deployment confirmed: {} at {}",
            tx_hash,
            contract_address.map(|a| a.to_string()).unwrap_or_else(|| "<unknown>".to_string())
        );

        Ok(DeploymentOutcome {
            contract_address,
            tx_hash: Some(tx_hash),
            gas_used: u64::try_from(receipt.gas_used).ok(),
            simulated: false,
        })
    }
}
