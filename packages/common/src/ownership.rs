//! Two-step ownership
//!
//! `{owner: A, pending: none}` → offer → `{owner: A, pending: B}` → accept by B
//! → `{owner: B, pending: none}`. The owner never changes until the pending
//! owner accepts.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Response, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[cw_serde]
pub struct Ownership {
    /// Current owner; the only principal allowed to run admin messages
    pub owner: Addr,
    /// Offered owner waiting to accept (if any)
    pub pending_owner: Option<Addr>,
}

pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not the owner")]
    NotOwner,

    #[error("Unauthorized: caller is not the pending owner")]
    NotPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,
}

/// Store the initial owner.
pub fn initialize_owner(storage: &mut dyn Storage, owner: Addr) -> StdResult<()> {
    OWNERSHIP.save(
        storage,
        &Ownership {
            owner,
            pending_owner: None,
        },
    )
}

/// Load the current owner, failing unless `sender` is exactly that owner.
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<Addr, OwnershipError> {
    let ownership = OWNERSHIP.load(storage)?;
    if *sender != ownership.owner {
        return Err(OwnershipError::NotOwner);
    }
    Ok(ownership.owner)
}

/// Owner offers ownership to `new_owner`, replacing any previous offer.
pub fn offer_ownership(
    storage: &mut dyn Storage,
    api: &dyn Api,
    sender: &Addr,
    new_owner: &str,
) -> Result<Response, OwnershipError> {
    assert_owner(storage, sender)?;

    let new_owner = api.addr_validate(new_owner)?;
    OWNERSHIP.update(storage, |mut ownership| -> StdResult<_> {
        ownership.pending_owner = Some(new_owner.clone());
        Ok(ownership)
    })?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("owner", sender.to_string())
        .add_attribute("pending_owner", new_owner.to_string()))
}

/// Pending owner accepts the offer.
pub fn accept_ownership(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Response, OwnershipError> {
    let ownership = OWNERSHIP.load(storage)?;
    let pending = ownership
        .pending_owner
        .ok_or(OwnershipError::NoPendingOwner)?;

    if *sender != pending {
        return Err(OwnershipError::NotPendingOwner);
    }

    OWNERSHIP.save(
        storage,
        &Ownership {
            owner: pending.clone(),
            pending_owner: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "accept_ownership")
        .add_attribute("previous_owner", ownership.owner.to_string())
        .add_attribute("owner", pending.to_string()))
}

/// Owner withdraws a pending offer.
pub fn cancel_ownership_offer(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Response, OwnershipError> {
    assert_owner(storage, sender)?;

    OWNERSHIP.update(storage, |mut ownership| -> Result<_, OwnershipError> {
        if ownership.pending_owner.take().is_none() {
            return Err(OwnershipError::NoPendingOwner);
        }
        Ok(ownership)
    })?;

    Ok(Response::new().add_attribute("method", "cancel_ownership_transfer"))
}

pub fn query_ownership(storage: &dyn Storage) -> StdResult<Ownership> {
    OWNERSHIP.load(storage)
}
