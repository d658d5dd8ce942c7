//! Route model
//!
//! A route describes one permitted asset movement between two chains and how
//! value leaves (deposit side) or arrives (withdraw side) on this chain.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Attribute, Binary};

/// Width of every asset identifier, wide enough for non-EVM address formats.
pub const ASSET_ID_LENGTH: usize = 32;

/// How an outbound transfer removes value on the source side.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum DepositKind {
    #[default]
    None,
    Lock,
    Burn,
}

/// How an inbound transfer credits value on this side.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum WithdrawKind {
    #[default]
    None,
    Unlock,
    Mint,
}

impl DepositKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositKind::None => "none",
            DepositKind::Lock => "lock",
            DepositKind::Burn => "burn",
        }
    }
}

impl WithdrawKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawKind::None => "none",
            WithdrawKind::Unlock => "unlock",
            WithdrawKind::Mint => "mint",
        }
    }
}

/// Route metadata stored per mapping id.
#[cw_serde]
pub struct Route {
    /// Chain the asset leaves from
    pub origin_chain_id: u64,
    /// Chain the asset arrives on (0 = route absent or removed)
    pub target_chain_id: u64,
    pub deposit_kind: DepositKind,
    pub withdraw_kind: WithdrawKind,
    /// Asset identifier on the origin chain (32 bytes, left-padded)
    pub origin_asset_id: Binary,
    /// Asset identifier on the target chain (32 bytes, left-padded)
    pub target_asset_id: Binary,
    /// Plain CW20 transfer instead of the balance-checked path
    pub use_direct_transfer: bool,
    pub is_enabled: bool,
    /// Native bank coin rather than a CW20 token
    pub is_native_coin: bool,
}

impl Route {
    /// The value returned for ids that were never registered.
    pub fn zeroed() -> Self {
        Self {
            origin_chain_id: 0,
            target_chain_id: 0,
            deposit_kind: DepositKind::None,
            withdraw_kind: WithdrawKind::None,
            origin_asset_id: Binary::from(vec![0u8; ASSET_ID_LENGTH]),
            target_asset_id: Binary::from(vec![0u8; ASSET_ID_LENGTH]),
            use_direct_transfer: false,
            is_enabled: false,
            is_native_coin: false,
        }
    }

    /// Whether the id resolves to a live route.
    pub fn exists(&self) -> bool {
        self.target_chain_id != 0
    }

    /// Outbound-capable: value leaves this chain through the route.
    pub fn is_outbound(&self) -> bool {
        self.deposit_kind != DepositKind::None
    }

    /// Inbound-capable: value arrives on this chain through the route.
    pub fn is_inbound(&self) -> bool {
        self.withdraw_kind != WithdrawKind::None
    }

    /// Full route state as response attributes, so that the record stream
    /// alone is enough to rebuild the route table.
    pub fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("origin_chain_id", self.origin_chain_id.to_string()),
            Attribute::new("target_chain_id", self.target_chain_id.to_string()),
            Attribute::new("deposit_kind", self.deposit_kind.as_str()),
            Attribute::new("withdraw_kind", self.withdraw_kind.as_str()),
            Attribute::new("origin_asset_id", binary_to_hex(&self.origin_asset_id)),
            Attribute::new("target_asset_id", binary_to_hex(&self.target_asset_id)),
            Attribute::new("use_direct_transfer", self.use_direct_transfer.to_string()),
            Attribute::new("is_enabled", self.is_enabled.to_string()),
            Attribute::new("is_native_coin", self.is_native_coin.to_string()),
        ]
    }
}

/// Interpret a binary value as a 32-byte identifier.
pub fn to_bytes32(value: &Binary) -> Option<[u8; 32]> {
    value.as_slice().try_into().ok()
}

/// Convert 32-byte value to hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    binary_to_hex(bytes)
}

fn binary_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(2 + bytes.len() * 2);
    hex.push_str("0x");
    for byte in bytes {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}
