//! The seam between profile selection and the chain

use async_trait::async_trait;
use crate::{
    errors::DeployResult,
    types::{DeploymentOutcome, DeploymentRequest},
};

/// Compiles nothing and selects nothing: given a fully formed request it
/// performs the contract creation and reports the outcome.
#[async_trait]
pub trait DeploymentExecutor: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deploy(&self, request: &DeploymentRequest) -> DeployResult<DeploymentOutcome>;
}
