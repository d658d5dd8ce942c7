//! Mapping Registry Contract - Entry Points

use common::{
    accept_ownership, cancel_ownership_offer, initialize_owner, offer_ownership, query_ownership,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_disable_mapping, execute_enable_mapping, execute_register_mapping,
    execute_remove_mapping,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_deposit_allowed, query_map_counter, query_map_info, query_mappings,
    query_withdraw_allowed,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, MAP_COUNTER};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    initialize_owner(deps.storage, owner.clone())?;

    CONFIG.save(
        deps.storage,
        &Config {
            chain_id: msg.chain_id,
        },
    )?;
    MAP_COUNTER.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("chain_id", msg.chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterMapping { route } => execute_register_mapping(deps, info, route),
        ExecuteMsg::EnableMapping { map_id } => execute_enable_mapping(deps, info, map_id),
        ExecuteMsg::DisableMapping { map_id } => execute_disable_mapping(deps, info, map_id),
        ExecuteMsg::RemoveMapping { map_id } => execute_remove_mapping(deps, info, map_id),

        ExecuteMsg::TransferOwnership { new_owner } => Ok(offer_ownership(
            deps.storage,
            deps.api,
            &info.sender,
            &new_owner,
        )?),
        ExecuteMsg::AcceptOwnership {} => Ok(accept_ownership(deps.storage, &info.sender)?),
        ExecuteMsg::CancelOwnershipTransfer {} => {
            Ok(cancel_ownership_offer(deps.storage, &info.sender)?)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::MapInfo { map_id } => to_json_binary(&query_map_info(deps, map_id)?),
        QueryMsg::MapCounter {} => to_json_binary(&query_map_counter(deps)?),
        QueryMsg::DepositAllowedTokens { chain_id, asset_id } => {
            to_json_binary(&query_deposit_allowed(deps, chain_id, asset_id)?)
        }
        QueryMsg::WithdrawAllowedTokens { chain_id, asset_id } => {
            to_json_binary(&query_withdraw_allowed(deps, chain_id, asset_id)?)
        }
        QueryMsg::Mappings { start_after, limit } => {
            to_json_binary(&query_mappings(deps, start_after, limit)?)
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps.storage)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
