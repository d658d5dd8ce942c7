//! Mapping Registry Contract - Permitted Asset Routes
//!
//! Owns the route table (mapping id → route) and the reverse index used to
//! guarantee that an asset has at most one active route per direction and
//! remote chain.
//!
//! # Reverse Index
//! - Deposit side: `(target_chain_id, origin_asset_id) → map_id`
//! - Withdraw side: `(origin_chain_id, target_asset_id) → map_id`
//!
//! # Lifecycle
//! `RegisterMapping` → `EnableMapping` / `DisableMapping` → `RemoveMapping`.
//! Ids start at 1 and are never reused.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
