//! Asset movement helpers
//!
//! Every message built here is a sub-message with a reply, so the reentrancy
//! guard can account for it.

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, DepsMut, QuerierWrapper, StdError, StdResult, Storage,
    SubMsg, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::{
    TransferCheck, PENDING_TRANSFER, REPLY_CHECKED_TRANSFER, REPLY_SEND_COINS, REPLY_SETTLE,
};

// ============================================================================
// Native Coin
// ============================================================================

/// Amount of `denom` attached to the call. Any other denom is rejected.
pub fn native_value(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    let mut total = Uint128::zero();
    for coin in funds {
        if coin.denom != denom {
            return Err(ContractError::UnexpectedFunds {
                expected: denom.to_string(),
                denom: coin.denom.clone(),
            });
        }
        total += coin.amount;
    }
    Ok(total)
}

pub fn native_balance(querier: &QuerierWrapper, holder: &Addr, denom: &str) -> StdResult<Uint128> {
    Ok(querier.query_balance(holder, denom)?.amount)
}

/// Fail with `InsufficientBalance` unless `available >= required`.
pub fn ensure_balance(available: Uint128, required: Uint128) -> Result<(), ContractError> {
    if available < required {
        return Err(ContractError::InsufficientBalance {
            required,
            available,
        });
    }
    Ok(())
}

pub fn send_coins(recipient: &Addr, denom: &str, amount: Uint128) -> SubMsg {
    SubMsg::reply_always(
        BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin::new(amount.u128(), denom)],
        },
        REPLY_SEND_COINS,
    )
}

// ============================================================================
// CW20
// ============================================================================

pub fn cw20_balance(querier: &QuerierWrapper, token: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(res.balance)
}

fn cw20_execute(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    })
}

/// Move `amount` of `token` to `to`, pulling from `from` by allowance when
/// given, otherwise sending from the bridge's own balance.
///
/// Without `use_direct_transfer` the receiver's balance is recorded first and
/// must have grown by exactly `amount` when the reply arrives.
pub fn cw20_transfer(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    token: &Addr,
    from: Option<&Addr>,
    to: &Addr,
    amount: Uint128,
    use_direct_transfer: bool,
) -> Result<SubMsg, ContractError> {
    let msg = match from {
        Some(owner) => Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: to.to_string(),
            amount,
        },
        None => Cw20ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount,
        },
    };
    let wasm_msg = cw20_execute(token, &msg)?;

    if use_direct_transfer {
        return Ok(SubMsg::reply_on_success(wasm_msg, REPLY_SETTLE));
    }

    let before = cw20_balance(querier, token, to)?;
    let expected_balance = before.checked_add(amount).map_err(StdError::from)?;
    PENDING_TRANSFER.save(
        storage,
        &TransferCheck {
            token: token.clone(),
            holder: to.clone(),
            expected_balance,
        },
    )?;
    Ok(SubMsg::reply_on_success(wasm_msg, REPLY_CHECKED_TRANSFER))
}

pub fn cw20_burn(token: &Addr, amount: Uint128) -> StdResult<SubMsg> {
    Ok(SubMsg::reply_on_success(
        cw20_execute(token, &Cw20ExecuteMsg::Burn { amount })?,
        REPLY_SETTLE,
    ))
}

pub fn cw20_mint(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<SubMsg> {
    Ok(SubMsg::reply_on_success(
        cw20_execute(
            token,
            &Cw20ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount,
            },
        )?,
        REPLY_SETTLE,
    ))
}

/// Compare the receiver's balance against the recorded expectation.
pub fn verify_pending_transfer(deps: DepsMut) -> Result<(), ContractError> {
    let check = PENDING_TRANSFER.load(deps.storage)?;
    PENDING_TRANSFER.remove(deps.storage);

    let actual = cw20_balance(&deps.querier, &check.token, &check.holder)?;
    if actual != check.expected_balance {
        return Err(ContractError::TransferCheckFailed {
            expected: check.expected_balance,
            actual,
        });
    }
    Ok(())
}
