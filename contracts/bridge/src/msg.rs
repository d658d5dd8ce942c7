//! Message types for the bridge ledger contract

use common::Ownership;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial owner (relay authority for inbound credits)
    pub owner: String,
    /// Mapping registry contract address
    pub registry: String,
    /// Bank denom treated as the native coin
    pub native_denom: String,
    /// 0x-prefixed EVM address of the authorization signer
    pub authority: String,
}

#[cw_serde]
pub struct MigrateMsg {}

/// Off-chain authority's permission for one outbound transfer
#[cw_serde]
pub struct AuthorizationProof {
    /// Signature r component (32 bytes)
    pub signature_r: Binary,
    /// Signature s component (32 bytes)
    pub signature_s: Binary,
    /// Recovery id, 0/1 or 27/28
    pub recovery_id: u8,
    /// Caller-chosen uniqueness value (32 bytes)
    pub salt: Binary,
    /// Unix seconds after which the proof is void
    pub deadline: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Send value out through an outbound route.
    ///
    /// Native coin routes: attach `amount + relay_fee` of the native denom.
    /// Token routes: approve `amount` to the bridge and attach `relay_fee`.
    BridgeTokensOrCoin {
        map_id: u64,
        amount: Uint128,
        relay_fee: Uint128,
        /// Recipient on the target chain (32 bytes)
        to_address: Binary,
        proof: AuthorizationProof,
    },

    /// Credit value arriving through an inbound route (owner only)
    ReceiveTokensOrCoin {
        /// Transfer identifier on the origin chain (32 bytes)
        external_id: Binary,
        map_id: u64,
        amount: Uint128,
        /// Sender on the origin chain (32 bytes)
        from_address: Binary,
        /// Local recipient (32-byte local address encoding)
        to_address: Binary,
    },

    // ========================================================================
    // Liquidity
    // ========================================================================
    /// Owner adds native coin liquidity
    DepositCoins {},

    /// Anyone sends native coin to the bridge
    Fund {},

    /// Owner adds token liquidity for an inbound route
    DepositTokens { map_id: u64, amount: Uint128 },

    /// Owner collects accumulated relay fees
    WithdrawGasAccumulated {},

    WithdrawTokenLiquidity {
        /// Local token id (32-byte local address encoding)
        asset_id: Binary,
        recipient: String,
        amount: Uint128,
        use_direct_transfer: bool,
    },

    WithdrawCoinLiquidity { recipient: String, amount: Uint128 },

    // ========================================================================
    // Admin
    // ========================================================================
    ChangeRegistryAddress { new_address: String },

    TransferOwnership { new_owner: String },
    AcceptOwnership {},
    CancelOwnershipTransfer {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(GasAccumulatedResponse)]
    GasAccumulated {},

    #[returns(IsHashUsedResponse)]
    IsHashUsed { hash: Binary },

    /// Hash an authorization proof must sign for the given outbound call
    #[returns(AuthorizationHashResponse)]
    AuthorizationHash {
        caller: String,
        map_id: u64,
        amount: Uint128,
        relay_fee: Uint128,
        to_address: Binary,
        salt: Binary,
        deadline: u64,
    },

    #[returns(Ownership)]
    Ownership {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub registry: Addr,
    pub native_denom: String,
    /// Hex encoded, 0x-prefixed
    pub native_asset_id: String,
    /// Hex encoded, 0x-prefixed
    pub authority: String,
}

#[cw_serde]
pub struct GasAccumulatedResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct IsHashUsedResponse {
    pub used: bool,
}

#[cw_serde]
pub struct AuthorizationHashResponse {
    pub hash: Binary,
}
