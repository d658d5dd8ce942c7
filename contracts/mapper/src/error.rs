//! Error types for the mapping registry contract

use common::OwnershipError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    // ========================================================================
    // Registration Errors
    // ========================================================================

    #[error("Asset id must not be zero")]
    ZeroAsset,

    #[error("Invalid asset id length: expected 32 bytes, got {got}")]
    InvalidAssetId { got: usize },

    #[error("Chain id mismatch: {side} chain must be {expected}, got {got}")]
    ChainMismatch {
        side: String,
        expected: u64,
        got: u64,
    },

    #[error("Invalid route: {reason}")]
    InvalidRoute { reason: String },

    #[error("Index slot already taken by mapping {map_id}")]
    SlotBusy { map_id: u64 },

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Mapping id {map_id} out of range (counter is {counter})")]
    MapIdOutOfRange { map_id: u64, counter: u64 },

    #[error("Mapping {map_id} is already enabled")]
    AlreadyEnabled { map_id: u64 },

    #[error("Mapping {map_id} is already disabled")]
    AlreadyDisabled { map_id: u64 },

    #[error("Mapping {map_id} was removed")]
    RouteRemoved { map_id: u64 },
}
