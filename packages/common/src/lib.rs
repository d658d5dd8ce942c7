//! Common - Shared Types and Utilities for the Asset Bridge Contracts
//!
//! This package provides the route model, the typed registry query interface
//! consumed by the bridge, and the two-step ownership state machine used by
//! both contracts.

pub mod ownership;
pub mod registry;
pub mod route;

pub use ownership::{
    accept_ownership, assert_owner, cancel_ownership_offer, initialize_owner, offer_ownership,
    query_ownership, Ownership, OwnershipError,
};
pub use registry::{MapCounterResponse, RegistryContract, RegistryQueryMsg};
pub use route::{bytes32_to_hex, to_bytes32, DepositKind, Route, WithdrawKind, ASSET_ID_LENGTH};
