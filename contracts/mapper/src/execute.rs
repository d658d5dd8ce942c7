//! Route lifecycle handlers.

use common::{assert_owner, to_bytes32, DepositKind, Route, WithdrawKind};
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{CONFIG, DEPOSIT_ALLOWED, MAPPINGS, MAP_COUNTER, WITHDRAW_ALLOWED};

// ============================================================================
// Index Slots
// ============================================================================

/// Deposit-side slot `(target_chain_id, origin_asset_id)` when the route is outbound.
fn deposit_slot(route: &Route) -> Option<(u64, &[u8])> {
    route
        .is_outbound()
        .then(|| (route.target_chain_id, route.origin_asset_id.as_slice()))
}

/// Withdraw-side slot `(origin_chain_id, target_asset_id)` when the route is inbound.
fn withdraw_slot(route: &Route) -> Option<(u64, &[u8])> {
    route
        .is_inbound()
        .then(|| (route.origin_chain_id, route.target_asset_id.as_slice()))
}

fn validate_asset_id(asset_id: &Binary) -> Result<(), ContractError> {
    let bytes = to_bytes32(asset_id).ok_or(ContractError::InvalidAssetId {
        got: asset_id.len(),
    })?;
    if bytes == [0u8; 32] {
        return Err(ContractError::ZeroAsset);
    }
    Ok(())
}

fn validate_route(route: &Route, local_chain_id: u64) -> Result<(), ContractError> {
    validate_asset_id(&route.origin_asset_id)?;
    validate_asset_id(&route.target_asset_id)?;

    if !route.is_outbound() && !route.is_inbound() {
        return Err(ContractError::InvalidRoute {
            reason: "deposit and withdraw kinds are both none".to_string(),
        });
    }

    // A zero target chain id reads back as "absent"
    if route.origin_chain_id == 0 || route.target_chain_id == 0 {
        return Err(ContractError::InvalidRoute {
            reason: "chain ids must be non-zero".to_string(),
        });
    }

    if route.is_outbound() && route.origin_chain_id != local_chain_id {
        return Err(ContractError::ChainMismatch {
            side: "origin".to_string(),
            expected: local_chain_id,
            got: route.origin_chain_id,
        });
    }
    if route.is_inbound() && route.target_chain_id != local_chain_id {
        return Err(ContractError::ChainMismatch {
            side: "target".to_string(),
            expected: local_chain_id,
            got: route.target_chain_id,
        });
    }

    if route.is_native_coin {
        if route.deposit_kind == DepositKind::Burn {
            return Err(ContractError::InvalidRoute {
                reason: "native coin routes can only lock".to_string(),
            });
        }
        if route.withdraw_kind == WithdrawKind::Mint {
            return Err(ContractError::InvalidRoute {
                reason: "native coin routes can only unlock".to_string(),
            });
        }
    }

    Ok(())
}

/// Load a live route, checking the id against the counter first.
fn load_live_mapping(storage: &dyn Storage, map_id: u64) -> Result<Route, ContractError> {
    let counter = MAP_COUNTER.load(storage)?;
    if map_id == 0 || map_id > counter {
        return Err(ContractError::MapIdOutOfRange { map_id, counter });
    }

    let route = MAPPINGS.load(storage, map_id)?;
    if !route.exists() {
        return Err(ContractError::RouteRemoved { map_id });
    }
    Ok(route)
}

// ============================================================================
// Handlers
// ============================================================================

pub fn execute_register_mapping(
    deps: DepsMut,
    info: MessageInfo,
    route: Route,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    validate_route(&route, config.chain_id)?;

    let deposit_key = deposit_slot(&route);
    let withdraw_key = withdraw_slot(&route);

    if let Some(key) = deposit_key {
        if let Some(map_id) = DEPOSIT_ALLOWED.may_load(deps.storage, key)? {
            return Err(ContractError::SlotBusy { map_id });
        }
    }
    if let Some(key) = withdraw_key {
        if let Some(map_id) = WITHDRAW_ALLOWED.may_load(deps.storage, key)? {
            return Err(ContractError::SlotBusy { map_id });
        }
    }

    let map_id = MAP_COUNTER.load(deps.storage)? + 1;
    MAP_COUNTER.save(deps.storage, &map_id)?;
    MAPPINGS.save(deps.storage, map_id, &route)?;

    if let Some(key) = deposit_key {
        DEPOSIT_ALLOWED.save(deps.storage, key, &map_id)?;
    }
    if let Some(key) = withdraw_key {
        WITHDRAW_ALLOWED.save(deps.storage, key, &map_id)?;
    }

    Ok(Response::new()
        .add_attribute("method", "registered_mapping")
        .add_attribute("map_id", map_id.to_string())
        .add_attributes(route.attributes()))
}

pub fn execute_enable_mapping(
    deps: DepsMut,
    info: MessageInfo,
    map_id: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut route = load_live_mapping(deps.storage, map_id)?;
    if route.is_enabled {
        return Err(ContractError::AlreadyEnabled { map_id });
    }
    route.is_enabled = true;
    MAPPINGS.save(deps.storage, map_id, &route)?;

    Ok(Response::new()
        .add_attribute("method", "enabled_mapping")
        .add_attribute("map_id", map_id.to_string())
        .add_attributes(route.attributes()))
}

pub fn execute_disable_mapping(
    deps: DepsMut,
    info: MessageInfo,
    map_id: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut route = load_live_mapping(deps.storage, map_id)?;
    if !route.is_enabled {
        return Err(ContractError::AlreadyDisabled { map_id });
    }
    route.is_enabled = false;
    MAPPINGS.save(deps.storage, map_id, &route)?;

    Ok(Response::new()
        .add_attribute("method", "disabled_mapping")
        .add_attribute("map_id", map_id.to_string())
        .add_attributes(route.attributes()))
}

pub fn execute_remove_mapping(
    deps: DepsMut,
    info: MessageInfo,
    map_id: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut route = load_live_mapping(deps.storage, map_id)?;

    // Slots must be cleared while the chain ids are still intact
    if let Some(key) = deposit_slot(&route) {
        DEPOSIT_ALLOWED.remove(deps.storage, key);
    }
    if let Some(key) = withdraw_slot(&route) {
        WITHDRAW_ALLOWED.remove(deps.storage, key);
    }

    route.origin_chain_id = 0;
    route.target_chain_id = 0;
    route.is_enabled = false;
    MAPPINGS.save(deps.storage, map_id, &route)?;

    Ok(Response::new()
        .add_attribute("method", "removed_mapping")
        .add_attribute("map_id", map_id.to_string())
        .add_attributes(route.attributes()))
}
