//! Bridge Ledger Contract - Cross-Chain Asset Custody
//!
//! Moves native coin and CW20 tokens across chains along routes held by the
//! mapping registry contract.
//!
//! # Outgoing Flow
//! 1. Off-chain authority signs the transfer parameters
//! 2. Caller submits `BridgeTokensOrCoin` with the proof and the relay fee
//! 3. Bridge locks (or burns) the asset and emits a `deposit` record
//!
//! # Incoming Flow
//! 1. Owner relays a transfer observed on the origin chain
//! 2. Bridge unlocks from custody (or mints) to the local recipient and emits
//!    a `withdrawal` record
//!
//! # Security
//! - Each authorization hash can be consumed once
//! - Every state-changing handler runs under a reentrancy guard held until
//!   all of its dispatched calls have replied
//! - Optional balance verification of CW20 transfers

pub mod contract;
pub mod error;
mod execute;
mod guard;
pub mod hash;
pub mod msg;
mod query;
pub mod signature;
pub mod state;
pub mod transfer;

pub use crate::error::ContractError;
pub use crate::hash::keccak256;
