//! BorrowLowb Deployer - profile-driven contract deployment
//!
//! Selects exactly one network profile (testnet or mainnet), validates its
//! liquidity-pool and router addresses, and deploys the `BorrowLowb`
//! contract with those two addresses as constructor arguments.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod deploy;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{ActiveSelection, Config};
pub use errors::{DeployError, DeployResult};
pub use types::*;
