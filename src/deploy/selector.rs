//! Turns the active profile into exactly one deploy call

use tracing::info;
use crate::{
    config::ActiveSelection,
    deploy::DeploymentExecutor,
    errors::DeployResult,
    types::{DeploymentOutcome, DeploymentRequest},
};

/// Issues a single `deploy(BorrowLowb, lp, router)` through `executor`.
///
/// Executor errors are returned as is: nothing here wraps, retries or
/// recovers from them.
pub async fn select_and_deploy<E>(
    selection: &ActiveSelection,
    executor: &E,
) -> DeployResult<DeploymentOutcome>
where
    E: DeploymentExecutor + ?Sized,
{
    let request = DeploymentRequest::for_profile(selection.profile());

    info!(
        network = %selection.network(),
        executor = executor.name(),
        contract = %request.contract_name,
        lp_address = %request.lp_address,
        router_address = %request.router_address,
        "Submitting deployment"
    );

    executor.deploy(&request).await
}
