//! State definitions for the mapping registry contract

use common::Route;
use cosmwasm_schema::cw_serde;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Chain id of the chain this registry is deployed on
    pub chain_id: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:asset-bridge-mapper";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default and maximum page sizes for `Mappings`
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

pub const CONFIG: Item<Config> = Item::new("config");

/// Last assigned mapping id (0 = none registered yet)
pub const MAP_COUNTER: Item<u64> = Item::new("map_counter");

/// Route table
/// Key: map_id, Value: Route
pub const MAPPINGS: Map<u64, Route> = Map::new("mappings");

/// Outbound reverse index
/// Key: (target_chain_id, origin_asset_id), Value: map_id
pub const DEPOSIT_ALLOWED: Map<(u64, &[u8]), u64> = Map::new("deposit_allowed");

/// Inbound reverse index
/// Key: (origin_chain_id, target_asset_id), Value: map_id
pub const WITHDRAW_ALLOWED: Map<(u64, &[u8]), u64> = Map::new("withdraw_allowed");
