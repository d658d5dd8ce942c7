//! Bridge Ledger Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `guard` - Reentrancy guard wrapped around execute
//! - `reply` (below) - Settlement of dispatched calls

use common::{
    accept_ownership, cancel_ownership_offer, initialize_owner, offer_ownership, query_ownership,
    RegistryContract,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_bridge_tokens_or_coin, execute_change_registry_address, execute_deposit_coins,
    execute_deposit_tokens, execute_fund, execute_receive_tokens_or_coin,
    execute_withdraw_coin_liquidity, execute_withdraw_gas_accumulated,
    execute_withdraw_token_liquidity, probe_registry,
};
use crate::guard;
use crate::hash::{evm_address_to_hex, parse_evm_address};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_authorization_hash, query_config, query_gas_accumulated, query_is_hash_used,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, GAS_ACCUMULATED, REPLY_CHECKED_TRANSFER,
    REPLY_SEND_COINS, REPLY_SETTLE,
};
use crate::transfer::verify_pending_transfer;

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
    let registry = probe_registry(deps.as_ref(), &msg.registry)?;

    if msg.native_denom.is_empty() {
        return Err(StdError::generic_err("native_denom must not be empty").into());
    }

    let authority = parse_evm_address(&msg.authority)?;
    if authority == [0u8; 20] {
        return Err(ContractError::AddressZero);
    }

    initialize_owner(deps.storage, owner.clone())?;
    CONFIG.save(
        deps.storage,
        &Config {
            registry: RegistryContract(registry.clone()),
            native_denom: msg.native_denom.clone(),
            authority,
        },
    )?;
    GAS_ACCUMULATED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("registry", registry)
        .add_attribute("native_denom", msg.native_denom)
        .add_attribute("authority", evm_address_to_hex(&authority)))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BridgeTokensOrCoin {
            map_id,
            amount,
            relay_fee,
            to_address,
            proof,
        } => guarded(deps, |deps| {
            execute_bridge_tokens_or_coin(
                deps, env, info, map_id, amount, relay_fee, to_address, proof,
            )
        }),
        ExecuteMsg::ReceiveTokensOrCoin {
            external_id,
            map_id,
            amount,
            from_address,
            to_address,
        } => guarded(deps, |deps| {
            execute_receive_tokens_or_coin(
                deps,
                env,
                info,
                external_id,
                map_id,
                amount,
                from_address,
                to_address,
            )
        }),

        // Liquidity
        ExecuteMsg::DepositCoins {} => guarded(deps, |deps| execute_deposit_coins(deps, info)),
        ExecuteMsg::Fund {} => guarded(deps, |deps| execute_fund(deps, info)),
        ExecuteMsg::DepositTokens { map_id, amount } => guarded(deps, |deps| {
            execute_deposit_tokens(deps, env, info, map_id, amount)
        }),
        ExecuteMsg::WithdrawGasAccumulated {} => guarded(deps, |deps| {
            execute_withdraw_gas_accumulated(deps, env, info)
        }),
        ExecuteMsg::WithdrawTokenLiquidity {
            asset_id,
            recipient,
            amount,
            use_direct_transfer,
        } => guarded(deps, |deps| {
            execute_withdraw_token_liquidity(
                deps,
                env,
                info,
                asset_id,
                recipient,
                amount,
                use_direct_transfer,
            )
        }),
        ExecuteMsg::WithdrawCoinLiquidity { recipient, amount } => guarded(deps, |deps| {
            execute_withdraw_coin_liquidity(deps, env, info, recipient, amount)
        }),

        // Admin
        ExecuteMsg::ChangeRegistryAddress { new_address } => guarded(deps, |deps| {
            execute_change_registry_address(deps, info, new_address)
        }),

        // Ownership handshake dispatches nothing and stays outside the guard
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

/// Run `handler` under the reentrancy guard.
fn guarded<F>(mut deps: DepsMut, handler: F) -> Result<Response, ContractError>
where
    F: FnOnce(DepsMut) -> Result<Response, ContractError>,
{
    guard::enter(deps.storage)?;
    let res = handler(deps.branch())?;
    guard::exit(deps.storage, res)
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(mut deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_SETTLE => {}
        REPLY_CHECKED_TRANSFER => verify_pending_transfer(deps.branch())?,
        REPLY_SEND_COINS => {
            if let SubMsgResult::Err(reason) = msg.result {
                return Err(ContractError::SendFailed { reason });
            }
        }
        id => return Err(ContractError::UnknownReply { id }),
    }

    guard::settle(deps.storage)?;
    Ok(Response::new())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::GasAccumulated {} => to_json_binary(&query_gas_accumulated(deps)?),
        QueryMsg::IsHashUsed { hash } => to_json_binary(&query_is_hash_used(deps, hash)?),
        QueryMsg::AuthorizationHash {
            caller,
            map_id,
            amount,
            relay_fee,
            to_address,
            salt,
            deadline,
        } => to_json_binary(&query_authorization_hash(
            deps, caller, map_id, amount, relay_fee, to_address, salt, deadline,
        )?),
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

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coins, Addr, SubMsgResponse};

    use crate::state::GUARD;

    #[test]
    fn test_failed_coin_send_maps_to_send_failed() {
        let mut deps = mock_dependencies();
        GUARD.save(deps.as_mut().storage, &1).unwrap();

        let err = reply(
            deps.as_mut(),
            mock_env(),
            Reply {
                id: REPLY_SEND_COINS,
                result: SubMsgResult::Err("insufficient funds".to_string()),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::SendFailed {
                reason: "insufficient funds".to_string()
            }
        );
    }

    #[test]
    fn test_successful_reply_releases_guard() {
        let mut deps = mock_dependencies();
        GUARD.save(deps.as_mut().storage, &1).unwrap();

        reply(
            deps.as_mut(),
            mock_env(),
            Reply {
                id: REPLY_SEND_COINS,
                result: SubMsgResult::Ok(SubMsgResponse {
                    events: vec![],
                    data: None,
                }),
            },
        )
        .unwrap();
        assert!(GUARD.may_load(deps.as_ref().storage).unwrap().is_none());
    }

    #[test]
    fn test_unknown_reply_id() {
        let mut deps = mock_dependencies();
        let err = reply(
            deps.as_mut(),
            mock_env(),
            Reply {
                id: 99,
                result: SubMsgResult::Err(String::new()),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::UnknownReply { id: 99 });
    }

    #[test]
    fn test_guarded_message_rejected_while_guard_held() {
        let mut deps = mock_dependencies();
        GUARD.save(deps.as_mut().storage, &1).unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &coins(1, "uluna")),
            ExecuteMsg::Fund {},
        )
        .unwrap_err();
        assert_eq!(err, ContractError::ReentrantCall);
    }

    #[test]
    fn test_ownership_handshake_bypasses_guard() {
        let mut deps = mock_dependencies();
        initialize_owner(deps.as_mut().storage, Addr::unchecked("owner")).unwrap();
        GUARD.save(deps.as_mut().storage, &1).unwrap();

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::TransferOwnership {
                new_owner: "successor".to_string(),
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("successor", &[]),
            ExecuteMsg::AcceptOwnership {},
        )
        .unwrap();

        let ownership = query_ownership(deps.as_ref().storage).unwrap();
        assert_eq!(ownership.owner, Addr::unchecked("successor"));
        // Untouched by the handshake
        assert_eq!(GUARD.load(deps.as_ref().storage).unwrap(), 1);
    }
}
