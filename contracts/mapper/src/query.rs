//! Query handlers for the mapping registry contract.

use common::{MapCounterResponse, Route};
use cosmwasm_std::{Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{ConfigResponse, MapIdResponse, MappingEntry, MappingsResponse};
use crate::state::{
    CONFIG, DEFAULT_LIMIT, DEPOSIT_ALLOWED, MAPPINGS, MAP_COUNTER, MAX_LIMIT, WITHDRAW_ALLOWED,
};

/// Unknown ids resolve to a zeroed route rather than an error, so callers can
/// treat "absent" and "removed" alike through `target_chain_id == 0`.
pub fn query_map_info(deps: Deps, map_id: u64) -> StdResult<Route> {
    Ok(MAPPINGS
        .may_load(deps.storage, map_id)?
        .unwrap_or_else(Route::zeroed))
}

pub fn query_map_counter(deps: Deps) -> StdResult<MapCounterResponse> {
    Ok(MapCounterResponse {
        map_counter: MAP_COUNTER.load(deps.storage)?,
    })
}

pub fn query_deposit_allowed(
    deps: Deps,
    chain_id: u64,
    asset_id: Binary,
) -> StdResult<MapIdResponse> {
    let map_id = DEPOSIT_ALLOWED
        .may_load(deps.storage, (chain_id, asset_id.as_slice()))?
        .unwrap_or_default();
    Ok(MapIdResponse { map_id })
}

pub fn query_withdraw_allowed(
    deps: Deps,
    chain_id: u64,
    asset_id: Binary,
) -> StdResult<MapIdResponse> {
    let map_id = WITHDRAW_ALLOWED
        .may_load(deps.storage, (chain_id, asset_id.as_slice()))?
        .unwrap_or_default();
    Ok(MapIdResponse { map_id })
}

/// List routes in id order, removed ones included.
pub fn query_mappings(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<MappingsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let mappings = MAPPINGS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(map_id, route)| MappingEntry { map_id, route }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MappingsResponse { mappings })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        chain_id: config.chain_id,
        map_counter: MAP_COUNTER.load(deps.storage)?,
    })
}
