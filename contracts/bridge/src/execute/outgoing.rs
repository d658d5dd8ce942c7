//! Outgoing transfer handler.
//!
//! Value leaves this chain through an outbound route once the caller presents
//! an authorization proof signed by the configured authority.

use common::{bytes32_to_hex, DepositKind, Route, WithdrawKind};
use cosmwasm_std::{
    Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Uint128,
};

use crate::error::ContractError;
use crate::hash::{decode_local_address, encode_local_address, AuthorizationMessage};
use crate::msg::AuthorizationProof;
use crate::signature::verify_authorization;
use crate::state::{CONFIG, GAS_ACCUMULATED, USED_HASHES};
use crate::transfer::{cw20_burn, cw20_transfer, native_value};

use super::{load_enabled_route, nonzero_bytes32};

/// Authorization hash for an outbound call through `route`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn authorization_hash(
    deps: Deps,
    caller: &Addr,
    route: &Route,
    amount: Uint128,
    relay_fee: Uint128,
    recipient: &[u8; 32],
    salt: &[u8; 32],
    deadline: u64,
) -> Result<[u8; 32], ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let caller_bytes = encode_local_address(deps.api, caller)?;
    let target_asset = nonzero_bytes32(&route.target_asset_id, "target_asset_id")?;

    Ok(AuthorizationMessage {
        caller: &caller_bytes,
        authority: &config.authority,
        recipient,
        target_asset: &target_asset,
        relay_fee: relay_fee.u128(),
        amount: amount.u128(),
        origin_chain_id: route.origin_chain_id,
        target_chain_id: route.target_chain_id,
        deadline,
        salt,
    }
    .hash())
}

/// Bridge native coin or a CW20 token out through route `map_id`.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_tokens_or_coin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    map_id: u64,
    amount: Uint128,
    relay_fee: Uint128,
    to_address: Binary,
    proof: AuthorizationProof,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let route = load_enabled_route(deps.as_ref(), map_id)?;

    if route.deposit_kind == DepositKind::None {
        return Err(ContractError::WrongDepositKind { map_id });
    }
    if route.withdraw_kind != WithdrawKind::None {
        return Err(ContractError::WrongWithdrawKind { map_id });
    }

    let origin_asset = nonzero_bytes32(&route.origin_asset_id, "origin_asset_id")?;
    let target_asset = nonzero_bytes32(&route.target_asset_id, "target_asset_id")?;
    let recipient = nonzero_bytes32(&to_address, "to_address")?;
    if amount.is_zero() {
        return Err(ContractError::AmountZero);
    }

    // Value attached to the call
    let value = native_value(&info.funds, &config.native_denom)?;
    if route.is_native_coin {
        if route.deposit_kind != DepositKind::Lock {
            return Err(ContractError::WrongDepositKind { map_id });
        }
        let required = amount.checked_add(relay_fee).map_err(StdError::from)?;
        if value < required {
            return Err(ContractError::ValueTooLow {
                required,
                got: value,
            });
        }
    } else if value < relay_fee {
        return Err(ContractError::ValueTooLow {
            required: relay_fee,
            got: value,
        });
    }

    // Authorization
    let salt: [u8; 32] = proof
        .salt
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidLength {
            field: "salt".to_string(),
            expected: 32,
            got: proof.salt.len(),
        })?;
    let hash = authorization_hash(
        deps.as_ref(),
        &info.sender,
        &route,
        amount,
        relay_fee,
        &recipient,
        &salt,
        proof.deadline,
    )?;
    verify_authorization(
        deps.api,
        &hash,
        &proof,
        &config.authority,
        env.block.time.seconds(),
    )?;

    if USED_HASHES.has(deps.storage, hash.as_slice()) {
        return Err(ContractError::HashAlreadyUsed {
            hash: bytes32_to_hex(&hash),
        });
    }
    USED_HASHES.save(deps.storage, hash.as_slice(), &true)?;

    GAS_ACCUMULATED.update(deps.storage, |gas| -> StdResult<_> {
        Ok(gas.checked_add(relay_fee)?)
    })?;

    // Asset movement (coin value is already in custody)
    let mut res = Response::new();
    if !route.is_native_coin {
        let token = decode_local_address(deps.api, &origin_asset)?;

        res = res.add_submessage(cw20_transfer(
            deps.storage,
            &deps.querier,
            &token,
            Some(&info.sender),
            &env.contract.address,
            amount,
            route.use_direct_transfer,
        )?);
        if route.deposit_kind == DepositKind::Burn {
            res = res.add_submessage(cw20_burn(&token, amount)?);
        }
    }

    let caller_bytes = encode_local_address(deps.api, &info.sender)?;
    Ok(res
        .add_attribute("method", "deposit")
        .add_attribute("map_id", map_id.to_string())
        .add_attribute("from", bytes32_to_hex(&caller_bytes))
        .add_attribute("to", bytes32_to_hex(&recipient))
        .add_attribute("origin_asset", bytes32_to_hex(&origin_asset))
        .add_attribute("target_asset", bytes32_to_hex(&target_asset))
        .add_attribute("amount", amount.to_string())
        .add_attribute("relay_fee", relay_fee.to_string())
        .add_attribute("origin_chain", route.origin_chain_id.to_string())
        .add_attribute("target_chain", route.target_chain_id.to_string())
        .add_attribute("authorization_hash", bytes32_to_hex(&hash)))
}
