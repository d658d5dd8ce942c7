//! State definitions for the bridge ledger contract

use common::RegistryContract;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Route registry consulted on every bridge operation
    pub registry: RegistryContract,
    /// Bank denom treated as the native coin
    pub native_denom: String,
    /// EVM-style address of the key that signs authorization proofs
    pub authority: [u8; 20],
}

/// Balance expectation for a safety-checked CW20 transfer, verified in the reply
#[cw_serde]
pub struct TransferCheck {
    pub token: Addr,
    pub holder: Addr,
    pub expected_balance: Uint128,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:asset-bridge-ledger";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Relay fees collected from callers, withdrawable by the owner
pub const GAS_ACCUMULATED: Item<Uint128> = Item::new("gas_accumulated");

/// Consumed authorization hashes
/// Key: 32-byte message hash, Value: always true
pub const USED_HASHES: Map<&[u8], bool> = Map::new("used_hashes");

/// Outstanding safety-checked transfer (at most one per handler)
pub const PENDING_TRANSFER: Item<TransferCheck> = Item::new("pending_transfer");

/// Reentrancy guard: number of dispatched calls not yet settled.
/// Absent when no guarded handler is in flight.
pub const GUARD: Item<u32> = Item::new("reentrancy_guard");

// ============================================================================
// Reply IDs
// ============================================================================

/// Plain settlement of one outstanding call
pub const REPLY_SETTLE: u64 = 1;

/// CW20 transfer whose receiver balance must be verified
pub const REPLY_CHECKED_TRANSFER: u64 = 2;

/// Native coin send; failure maps to `SendFailed`
pub const REPLY_SEND_COINS: u64 = 3;
