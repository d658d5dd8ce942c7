//! Query handlers for the bridge ledger contract.

use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use crate::execute::authorization_hash;
use crate::hash::{evm_address_to_hex, native_asset_id};
use crate::msg::{
    AuthorizationHashResponse, ConfigResponse, GasAccumulatedResponse, IsHashUsedResponse,
};
use crate::state::{CONFIG, GAS_ACCUMULATED, USED_HASHES};
use common::{bytes32_to_hex, to_bytes32};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry: config.registry.addr().clone(),
        native_asset_id: bytes32_to_hex(&native_asset_id(&config.native_denom)),
        native_denom: config.native_denom,
        authority: evm_address_to_hex(&config.authority),
    })
}

pub fn query_gas_accumulated(deps: Deps) -> StdResult<GasAccumulatedResponse> {
    Ok(GasAccumulatedResponse {
        amount: GAS_ACCUMULATED.load(deps.storage)?,
    })
}

pub fn query_is_hash_used(deps: Deps, hash: Binary) -> StdResult<IsHashUsedResponse> {
    Ok(IsHashUsedResponse {
        used: USED_HASHES.has(deps.storage, hash.as_slice()),
    })
}

fn bytes32_arg(value: &Binary, field: &str) -> StdResult<[u8; 32]> {
    to_bytes32(value).ok_or_else(|| StdError::generic_err(format!("{} must be 32 bytes", field)))
}

/// Hash an authorization proof must sign, resolved against the live route.
#[allow(clippy::too_many_arguments)]
pub fn query_authorization_hash(
    deps: Deps,
    caller: String,
    map_id: u64,
    amount: Uint128,
    relay_fee: Uint128,
    to_address: Binary,
    salt: Binary,
    deadline: u64,
) -> StdResult<AuthorizationHashResponse> {
    let caller = deps.api.addr_validate(&caller)?;
    let config = CONFIG.load(deps.storage)?;
    let route = config.registry.map_info(&deps.querier, map_id)?;
    if !route.exists() {
        return Err(StdError::not_found(format!("route {}", map_id)));
    }

    let recipient = bytes32_arg(&to_address, "to_address")?;
    let salt = bytes32_arg(&salt, "salt")?;

    let hash = authorization_hash(
        deps, &caller, &route, amount, relay_fee, &recipient, &salt, deadline,
    )
    .map_err(|e| StdError::generic_err(e.to_string()))?;

    Ok(AuthorizationHashResponse {
        hash: Binary::from(hash.as_slice()),
    })
}
