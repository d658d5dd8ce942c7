//! Reentrancy guard
//!
//! A guarded handler takes the guard on entry and keeps it while the calls it
//! dispatches are executing. Each dispatched call carries a reply that settles
//! it; the guard is released once the last one settles, or right away when
//! the handler dispatched nothing.

use cosmwasm_std::{ReplyOn, Response, StdResult, Storage};

use crate::error::ContractError;
use crate::state::GUARD;

/// Take the guard, failing if a guarded handler is already in flight.
pub fn enter(storage: &mut dyn Storage) -> Result<(), ContractError> {
    if GUARD.may_load(storage)?.is_some() {
        return Err(ContractError::ReentrantCall);
    }
    GUARD.save(storage, &0)?;
    Ok(())
}

/// Hold the guard for every dispatched call that will reply.
pub fn exit(storage: &mut dyn Storage, res: Response) -> Result<Response, ContractError> {
    let outstanding = res
        .messages
        .iter()
        .filter(|m| m.reply_on != ReplyOn::Never)
        .count() as u32;

    if outstanding == 0 {
        GUARD.remove(storage);
    } else {
        GUARD.save(storage, &outstanding)?;
    }
    Ok(res)
}

/// Settle one dispatched call.
pub fn settle(storage: &mut dyn Storage) -> StdResult<()> {
    match GUARD.may_load(storage)? {
        Some(count) if count > 1 => GUARD.save(storage, &(count - 1)),
        _ => {
            GUARD.remove(storage);
            Ok(())
        }
    }
}
