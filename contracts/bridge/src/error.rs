//! Error types for the bridge ledger contract

use common::OwnershipError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    // ========================================================================
    // Input Errors
    // ========================================================================

    #[error("Address must not be zero or empty")]
    AddressZero,

    #[error("Bytes must not be zero")]
    BytesZero,

    #[error("Amount must be greater than zero")]
    AmountZero,

    #[error("Invalid {field} length: expected {expected} bytes, got {got}")]
    InvalidLength {
        field: String,
        expected: usize,
        got: usize,
    },

    #[error("Recipient must not be the bridge itself")]
    RecipientIsBridge,

    #[error("Unexpected funds: only {expected} is accepted, got {denom}")]
    UnexpectedFunds { expected: String, denom: String },

    // ========================================================================
    // Route Errors
    // ========================================================================

    #[error("Route {map_id} is disabled or does not exist")]
    RouteDisabled { map_id: u64 },

    #[error("Wrong deposit kind for route {map_id}")]
    WrongDepositKind { map_id: u64 },

    #[error("Wrong withdraw kind for route {map_id}")]
    WrongWithdrawKind { map_id: u64 },

    #[error("Route {map_id} moves the native coin, expected a token route")]
    CoinRouteNotAllowed { map_id: u64 },

    #[error("Invalid registry: {reason}")]
    InvalidRegistry { reason: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Authorization expired: deadline {deadline} is before {now}")]
    Expired { deadline: u64, now: u64 },

    #[error("Invalid authorization signature")]
    InvalidSignature,

    #[error("Authorization hash already used: {hash}")]
    HashAlreadyUsed { hash: String },

    // ========================================================================
    // Value Errors
    // ========================================================================

    #[error("Value too low: required {required}, got {got}")]
    ValueTooLow { required: Uint128, got: Uint128 },

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Coin transfer failed: {reason}")]
    SendFailed { reason: String },

    #[error("Transfer check failed: expected balance {expected}, got {actual}")]
    TransferCheckFailed { expected: Uint128, actual: Uint128 },

    // ========================================================================
    // Execution Errors
    // ========================================================================

    #[error("Reentrant call")]
    ReentrantCall,

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },
}
