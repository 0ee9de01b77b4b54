//! Deployment request, outcome and audit record types

use alloy::primitives::Address;
use alloy::sol_types::SolValue;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::{
    errors::DeployResult,
    types::NetworkProfile,
};

pub const CONTRACT_NAME: &str = "BorrowLowb";

/// One contract creation: `deploy(contract_name, lp_address, router_address)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRequest {
    pub contract_name: String,
    pub lp_address: Address,
    pub router_address: Address,
}

impl DeploymentRequest {
    pub fn for_profile(profile: &NetworkProfile) -> Self {
        Self {
            contract_name: CONTRACT_NAME.to_string(),
            lp_address: profile.lp_address,
            router_address: profile.router_address,
        }
    }

    /// Constructor arguments in positional order: lp first, router second.
    pub fn constructor_args(&self) -> [Address; 2] {
        [self.lp_address, self.router_address]
    }

    /// ABI-encoded `(address lp, address router)` appended to the creation code.
    pub fn encoded_constructor_args(&self) -> Vec<u8> {
        (self.lp_address, self.router_address).abi_encode_params()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentOutcome {
    pub contract_address: Option<Address>,
    pub tx_hash: Option<String>,
    pub gas_used: Option<u64>,
    pub simulated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeploymentStatus {
    Simulated,
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub network: String,
    pub chain_id: u64,
    pub contract_name: String,
    pub lp_address: Address,
    pub router_address: Address,
    pub status: DeploymentStatus,
    pub contract_address: Option<Address>,
    pub tx_hash: Option<String>,
    pub gas_used: Option<u64>,
    pub error_message: Option<String>,
}

impl DeploymentRecord {
    pub fn from_result(profile: &NetworkProfile, result: &DeployResult<DeploymentOutcome>) -> Self {
        let request = DeploymentRequest::for_profile(profile);
        let mut record = Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            network: profile.network.to_string(),
            chain_id: profile.network.chain_id(),
            contract_name: request.contract_name,
            lp_address: request.lp_address,
            router_address: request.router_address,
            status: DeploymentStatus::Failed,
            contract_address: None,
            tx_hash: None,
            gas_used: None,
            error_message: None,
        };

        match result {
            Ok(outcome) => {
                record.status = if outcome.simulated {
                    DeploymentStatus::Simulated
                } else {
                    DeploymentStatus::Success
                };
                record.contract_address = outcome.contract_address;
                record.tx_hash = outcome.tx_hash.clone();
                record.gas_used = outcome.gas_used;
            }
            Err(e) => {
                let mut message = e.to_string();
                let mut source = std::error::Error::source(e);
                while let Some(cause) = source {
                    message.push_str(": ");
                    message.push_str(&cause.to_string());
                    source = cause.source();
                }
                record.error_message = Some(message);
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DeployError;
    use crate::types::Network;

    #[test]
    fn constructor_args_keep_lp_before_router() {
        let profile = NetworkProfile::builtin(Network::Mainnet);
        let request = DeploymentRequest::for_profile(&profile);

        assert_eq!(request.contract_name, "BorrowLowb");
        assert_eq!(request.constructor_args(), [profile.lp_address, profile.router_address]);

        let encoded = request.encoded_constructor_args();
        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..32], profile.lp_address.as_slice());
        assert_eq!(&encoded[32..44], &[0u8; 12]);
        assert_eq!(&encoded[44..64], profile.router_address.as_slice());
    }

    #[test]
    fn record_reflects_successful_outcome() {
        let profile = NetworkProfile::builtin(Network::Testnet);
        let outcome = DeploymentOutcome {
            contract_address: Some(profile.router_address),
            tx_hash: Some("0xabc".to_string()),
            gas_used: Some(1_234_567),
            simulated: false,
        };
        let record = DeploymentRecord::from_result(&profile, &Ok(outcome));

        assert_eq!(record.status, DeploymentStatus::Success);
        assert_eq!(record.network, "testnet");
        assert_eq!(record.chain_id, 97);
        assert_eq!(record.tx_hash.as_deref(), Some("0xabc"));
        assert!(record.error_message.is_none());
    }

    #[test]
    fn record_reflects_failure() {
        let profile = NetworkProfile::builtin(Network::Mainnet);
        let result = Err(DeployError::Executor {
            contract: CONTRACT_NAME.to_string(),
            message: "insufficient funds".to_string(),
            source: None,
        });
        let record = DeploymentRecord::from_result(&profile, &result);

        assert_eq!(record.status, DeploymentStatus::Failed);
        assert!(record.contract_address.is_none());
        assert!(record.error_message.unwrap().contains("insufficient funds"));
    }

    #[test]
    fn record_serializes_addresses_as_hex() {
        let profile = NetworkProfile::builtin(Network::Mainnet);
        let outcome = DeploymentOutcome {
            contract_address: None,
            tx_hash: None,
            gas_used: None,
            simulated: true,
        };
        let record = DeploymentRecord::from_result(&profile, &Ok(outcome));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["status"], "Simulated");
        assert_eq!(
            json["router_address"].as_str().unwrap().to_lowercase(),
            "0x10ed43c718714eb63d5aa57b78b54704e256024e"
        );
    }
}
