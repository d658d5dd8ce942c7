//! Incoming transfer handler.
//!
//! The owner relays a transfer observed on the origin chain and the bridge
//! credits the local recipient through an inbound route.

use common::{assert_owner, bytes32_to_hex, DepositKind, WithdrawKind};
use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::decode_local_address;
use crate::state::CONFIG;
use crate::transfer::{
    cw20_balance, cw20_mint, cw20_transfer, ensure_balance, native_balance, send_coins,
};

use super::{bytes32, load_enabled_route, nonzero_bytes32};

#[allow(clippy::too_many_arguments)]
pub fn execute_receive_tokens_or_coin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    external_id: Binary,
    map_id: u64,
    amount: Uint128,
    from_address: Binary,
    to_address: Binary,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let route = load_enabled_route(deps.as_ref(), map_id)?;

    if route.withdraw_kind == WithdrawKind::None {
        return Err(ContractError::WrongWithdrawKind { map_id });
    }
    if route.deposit_kind != DepositKind::None {
        return Err(ContractError::WrongDepositKind { map_id });
    }
    if amount.is_zero() {
        return Err(ContractError::AmountZero);
    }

    // Opaque origin-side id, any value allowed
    let external_id = bytes32(&external_id, "external_id")?;
    let from = nonzero_bytes32(&from_address, "from_address")?;
    let to = nonzero_bytes32(&to_address, "to_address")?;
    let origin_asset = nonzero_bytes32(&route.origin_asset_id, "origin_asset_id")?;
    let target_asset = nonzero_bytes32(&route.target_asset_id, "target_asset_id")?;
    let recipient = decode_local_address(deps.api, &to)?;

    let payout = if route.is_native_coin {
        if route.withdraw_kind != WithdrawKind::Unlock {
            return Err(ContractError::WrongWithdrawKind { map_id });
        }
        let available =
            native_balance(&deps.querier, &env.contract.address, &config.native_denom)?;
        ensure_balance(available, amount)?;
        send_coins(&recipient, &config.native_denom, amount)
    } else {
        let token = decode_local_address(deps.api, &target_asset)?;
        match route.withdraw_kind {
            WithdrawKind::Mint => cw20_mint(&token, &recipient, amount)?,
            _ => {
                if recipient == env.contract.address {
                    return Err(ContractError::RecipientIsBridge);
                }
                let custody = cw20_balance(&deps.querier, &token, &env.contract.address)?;
                ensure_balance(custody, amount)?;
                cw20_transfer(
                    deps.storage,
                    &deps.querier,
                    &token,
                    None,
                    &recipient,
                    amount,
                    route.use_direct_transfer,
                )?
            }
        }
    };

    Ok(Response::new()
        .add_submessage(payout)
        .add_attribute("method", "withdrawal")
        .add_attribute("map_id", map_id.to_string())
        .add_attribute("from", bytes32_to_hex(&from))
        .add_attribute("to", bytes32_to_hex(&to))
        .add_attribute("recipient", recipient)
        .add_attribute("target_asset", bytes32_to_hex(&target_asset))
        .add_attribute("origin_asset", bytes32_to_hex(&origin_asset))
        .add_attribute("external_id", bytes32_to_hex(&external_id))
        .add_attribute("amount", amount.to_string())
        .add_attribute("origin_chain", route.origin_chain_id.to_string())
        .add_attribute("target_chain", route.target_chain_id.to_string()))
}
