//! Network addresses and address validation

use alloy::primitives::{Address, address};
use std::str::FromStr;
use crate::errors::{DeployError, DeployResult};

// BNB Smart Chain testnet
pub const LP_TESTNET: Address = address!("28118A66Ae5F6b5DCC2AFAa764689081F279aCE0");
pub const ROUTER_TESTNET: Address = address!("67A637E7bb250eb33BDf4407a51B58e8b479B498");

// BNB Smart Chain mainnet
pub const LP_MAINNET: Address = address!("3642b52519ba81fD8a204b306D2369A0cc1BC612");
pub const ROUTER_MAINNET: Address = address!("10ED43C718714eb63d5aA57B78B54704E256024E"); // PancakeSwap v2 router

/// Parses a user-supplied address.
///
/// Requires a `0x` prefix and 40 hex digits. Mixed-case input must carry a
/// valid EIP-55 checksum; single-case input is accepted as is. The zero
/// address is never a valid constructor argument.
pub fn parse_address(field: &str, value: &str) -> DeployResult<Address> {
    let raw = value.trim();
    let invalid = |reason: &str| DeployError::InvalidAddress {
        field: field.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let hex = raw
        .strip_prefix("0x")
        .ok_or_else(|| invalid("missing 0x prefix"))?;
    if hex.len() != 40 {
        return Err(invalid("expected 40 hex digits"));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("contains non-hex characters"));
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    let address = if has_lower && has_upper {
        Address::parse_checksummed(raw, None).map_err(|_| invalid("EIP-55 checksum mismatch"))?
    } else {
        Address::from_str(raw).map_err(|_| invalid("not a valid address"))?
    };

    if address == Address::ZERO {
        return Err(invalid("zero address"));
    }
    Ok(address)
}
