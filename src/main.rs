//! BorrowLowb Deployer - Main Entry Point
//!
//! Run-once: resolve the active network profile, deploy, record the outcome.

use borrow_lowb_deployer::*;
use anyhow::Result;
use std::time::Duration;
use tracing::{error, info, warn};
use borrow_lowb_deployer::deploy::{ContractArtifact, DeploymentExecutor, DryRunExecutor, RpcExecutor};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::load()?;

    // Initialize logging
    utils::setup_output_directories(&config.output_dir)?;
    let _logging_guard = utils::setup_logging(&config.output_dir)?;

    info!("🚀 BorrowLowb Deployer v{}", env!("CARGO_PKG_VERSION"));

    // Selection and address validation happen before anything touches the network
    let selection = config.active_selection()?;
    let network = selection.network();

    let executor: Box<dyn DeploymentExecutor> = if config.dry_run {
        let artifact = ContractArtifact::load(&config.artifacts_dir, CONTRACT_NAME)
            .inspect_err(|e| warn!("⚠️ {}", e))
            .ok();
        Box::new(DryRunExecutor::new(network, artifact))
    } else {
        let artifact = ContractArtifact::load(&config.artifacts_dir, CONTRACT_NAME)?;
        Box::new(RpcExecutor::new(&config, network, artifact)?)
    };

    utils::print_deployment_plan(&config, &selection, executor.name());

    // pause to allow the operator to read the plan and abort
    if !config.dry_run && config.confirmation_delay_secs > 0 {
        info!(
            "⏳ Broadcasting in {} seconds, press Ctrl+C to abort...",
            config.confirmation_delay_secs
        );
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(config.confirmation_delay_secs)) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("\n📛 Received shutdown signal (Ctrl+C), nothing was broadcast");
                return Ok(());
            }
        }
    }

    let result = deploy::select_and_deploy(&selection, executor.as_ref()).await;

    let record = DeploymentRecord::from_result(selection.profile(), &result);
    utils::print_deployment_record(&record);
    match storage::save_deployment_record(&config.output_dir, &record) {
        Ok(path) => info!("📝 Deployment record written to {}", path.display()),
        Err(e) => error!("Failed to save deployment record: {}", e),
    }

    if let Err(e) = &result {
        if e.is_preflight() {
            warn!("No transaction was broadcast");
        }
    }

    result?;
    Ok(())
}
