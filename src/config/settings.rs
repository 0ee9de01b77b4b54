//! Deployer configuration settings and environment variable handling

use std::env;
use std::fmt;
use std::path::PathBuf;
use url::Url;
use crate::{
    config::ActiveSelection,
    errors::{DeployError, DeployResult},
    types::{Network, ProfileRegistry},
};

// Configuration constants
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_CONFIRMATION_DELAY_SECS: u64 = 5;
pub const MAX_CONFIRMATION_DELAY_SECS: u64 = 60;
pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 120;
pub const MIN_RECEIPT_TIMEOUT_SECS: u64 = 10;
pub const MAX_RECEIPT_TIMEOUT_SECS: u64 = 600;

#[derive(Clone)]
pub struct Config {
    /// Raw `DEPLOY_NETWORK` value, validated by [`Config::active_selection`].
    pub network_selection: Option<String>,
    pub rpc_url: Option<String>,
    pub private_key: Option<String>,
    pub dry_run: bool,
    pub artifacts_dir: PathBuf,
    pub profiles_file: Option<PathBuf>,
    pub confirmation_delay_secs: u64,
    pub receipt_timeout_secs: u64,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load() -> DeployResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable numbers fall
    /// back to their defaults; an unrecognised `DRY_RUN` value is an error.
    pub fn from_lookup<F>(lookup: F) -> DeployResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            network_selection: lookup("DEPLOY_NETWORK"),
            rpc_url: non_empty("RPC_URL"),
            private_key: non_empty("PRIVATE_KEY"),
            dry_run: match non_empty("DRY_RUN") {
                Some(raw) => parse_flag("DRY_RUN", &raw)?,
                None => false,
            },
            artifacts_dir: non_empty("ARTIFACTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR)),
            profiles_file: non_empty("PROFILES_FILE").map(PathBuf::from),
            confirmation_delay_secs: lookup("CONFIRMATION_DELAY_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_CONFIRMATION_DELAY_SECS)
                .min(MAX_CONFIRMATION_DELAY_SECS),
            receipt_timeout_secs: lookup("RECEIPT_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_RECEIPT_TIMEOUT_SECS)
                .max(MIN_RECEIPT_TIMEOUT_SECS)
                .min(MAX_RECEIPT_TIMEOUT_SECS),
            output_dir: non_empty("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        })
    }

    pub fn profile_registry(&self) -> DeployResult<ProfileRegistry> {
        match &self.profiles_file {
            Some(path) => ProfileRegistry::from_file(path),
            None => Ok(ProfileRegistry::builtin()),
        }
    }

    /// Resolves the single active profile. Fails before any network action
    /// when the selection is missing, ambiguous or names an invalid profile.
    pub fn active_selection(&self) -> DeployResult<ActiveSelection> {
        let registry = self.profile_registry()?;
        ActiveSelection::resolve(self.network_selection.as_deref(), &registry)
    }

    pub fn rpc_url_for(&self, network: Network) -> DeployResult<Url> {
        let raw = self.rpc_url.as_deref().unwrap_or(network.default_rpc_url());
        Url::parse(raw.trim()).map_err(|e| DeployError::Config {
            message: format!("Invalid RPC_URL '{}': {}", raw, e),
        })
    }
}

/// Strict boolean parsing for switches that guard irreversible actions.
pub fn parse_flag(key: &str, raw: &str) -> DeployResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(DeployError::Config {
            message: format!("{} must be one of true/false/1/0/yes/no/on/off, got '{}'", key, raw.trim()),
        }),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("network_selection", &self.network_selection)
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("dry_run", &self.dry_run)
            .field("artifacts_dir", &self.artifacts_dir)
            .field("profiles_file", &self.profiles_file)
            .field("confirmation_delay_secs", &self.confirmation_delay_secs)
            .field("receipt_timeout_secs", &self.receipt_timeout_secs)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}
