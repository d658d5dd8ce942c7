//! Liquidity and relay fee handlers.

use common::{assert_owner, bytes32_to_hex, DepositKind};
use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::decode_local_address;
use crate::state::{CONFIG, GAS_ACCUMULATED};
use crate::transfer::{
    cw20_balance, cw20_transfer, ensure_balance, native_balance, native_value, send_coins,
};

use super::{load_enabled_route, nonzero_bytes32};

// ============================================================================
// Deposits
// ============================================================================

fn coins_deposited(info: &MessageInfo, denom: &str) -> Result<Response, ContractError> {
    let value = native_value(&info.funds, denom)?;
    if value.is_zero() {
        return Err(ContractError::AmountZero);
    }

    Ok(Response::new()
        .add_attribute("method", "coins_deposited")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("amount", value.to_string()))
}

/// Owner adds native coin liquidity.
pub fn execute_deposit_coins(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    coins_deposited(&info, &config.native_denom)
}

/// Anyone sends native coin to the bridge.
pub fn execute_fund(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    coins_deposited(&info, &config.native_denom)
}

/// Owner adds token liquidity backing an inbound route.
pub fn execute_deposit_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    map_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let route = load_enabled_route(deps.as_ref(), map_id)?;

    if route.is_native_coin {
        return Err(ContractError::CoinRouteNotAllowed { map_id });
    }
    if route.deposit_kind != DepositKind::None {
        return Err(ContractError::WrongDepositKind { map_id });
    }
    let asset = nonzero_bytes32(&route.target_asset_id, "target_asset_id")?;
    if amount.is_zero() {
        return Err(ContractError::AmountZero);
    }

    let token = decode_local_address(deps.api, &asset)?;
    let transfer = cw20_transfer(
        deps.storage,
        &deps.querier,
        &token,
        Some(&info.sender),
        &env.contract.address,
        amount,
        route.use_direct_transfer,
    )?;

    Ok(Response::new()
        .add_submessage(transfer)
        .add_attribute("method", "tokens_deposited")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("asset", bytes32_to_hex(&asset))
        .add_attribute("amount", amount.to_string()))
}

// ============================================================================
// Withdrawals
// ============================================================================

/// Owner collects the relay fees accumulated so far.
pub fn execute_withdraw_gas_accumulated(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let owner = assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    let amount = GAS_ACCUMULATED.load(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::AmountZero);
    }
    let available = native_balance(&deps.querier, &env.contract.address, &config.native_denom)?;
    ensure_balance(available, amount)?;

    GAS_ACCUMULATED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_submessage(send_coins(&owner, &config.native_denom, amount))
        .add_attribute("method", "gas_accumulated_withdrawn")
        .add_attribute("recipient", owner)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_withdraw_token_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset_id: Binary,
    recipient: String,
    amount: Uint128,
    use_direct_transfer: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::AmountZero);
    }
    let asset = nonzero_bytes32(&asset_id, "asset_id")?;
    if recipient.is_empty() {
        return Err(ContractError::AddressZero);
    }
    let recipient = deps.api.addr_validate(&recipient)?;
    // Custody moving to itself leaves the balance unchanged
    if recipient == env.contract.address {
        return Err(ContractError::RecipientIsBridge);
    }
    let token = decode_local_address(deps.api, &asset)?;

    let custody = cw20_balance(&deps.querier, &token, &env.contract.address)?;
    ensure_balance(custody, amount)?;

    let transfer = cw20_transfer(
        deps.storage,
        &deps.querier,
        &token,
        None,
        &recipient,
        amount,
        use_direct_transfer,
    )?;

    Ok(Response::new()
        .add_submessage(transfer)
        .add_attribute("method", "liquidity_token_withdrawn")
        .add_attribute("asset", bytes32_to_hex(&asset))
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("use_direct_transfer", use_direct_transfer.to_string()))
}

pub fn execute_withdraw_coin_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::AmountZero);
    }
    if recipient.is_empty() {
        return Err(ContractError::AddressZero);
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let available = native_balance(&deps.querier, &env.contract.address, &config.native_denom)?;
    ensure_balance(available, amount)?;

    Ok(Response::new()
        .add_submessage(send_coins(&recipient, &config.native_denom, amount))
        .add_attribute("method", "liquidity_coin_withdrawn")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}
