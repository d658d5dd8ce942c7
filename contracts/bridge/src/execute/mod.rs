//! Execute handlers for the bridge ledger contract.
//!
//! - `outgoing` - authorized deposits leaving through outbound routes
//! - `incoming` - owner-relayed credits arriving through inbound routes
//! - `liquidity` - coin/token liquidity and relay fee collection
//! - `admin` - registry address management

mod admin;
mod incoming;
mod liquidity;
mod outgoing;

pub use admin::*;
pub use incoming::*;
pub use liquidity::*;
pub use outgoing::*;

use common::{to_bytes32, Route};
use cosmwasm_std::{Binary, Deps};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Fetch a route from the registry, requiring it to exist and be enabled.
pub(crate) fn load_enabled_route(deps: Deps, map_id: u64) -> Result<Route, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let route = config.registry.map_info(&deps.querier, map_id)?;
    if !route.exists() || !route.is_enabled {
        return Err(ContractError::RouteDisabled { map_id });
    }
    Ok(route)
}

/// Parse a 32-byte value.
pub(crate) fn bytes32(value: &Binary, field: &str) -> Result<[u8; 32], ContractError> {
    to_bytes32(value).ok_or(ContractError::InvalidLength {
        field: field.to_string(),
        expected: 32,
        got: value.len(),
    })
}

/// Parse a 32-byte value that must not be all zeros.
pub(crate) fn nonzero_bytes32(value: &Binary, field: &str) -> Result<[u8; 32], ContractError> {
    let bytes = bytes32(value, field)?;
    if bytes == [0u8; 32] {
        return Err(ContractError::BytesZero);
    }
    Ok(bytes)
}
