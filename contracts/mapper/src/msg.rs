//! Message types for the mapping registry contract

use common::{MapCounterResponse, Ownership, Route};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial owner
    pub owner: String,
    /// Chain id of the chain this registry serves
    pub chain_id: u64,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Route Lifecycle (owner only)
    // ========================================================================
    /// Store a new route under the next mapping id.
    RegisterMapping { route: Route },

    /// Turn a disabled route back on.
    EnableMapping { map_id: u64 },

    /// Turn an enabled route off. The route keeps its index slot.
    DisableMapping { map_id: u64 },

    /// Retire a route and free its index slot(s). Irreversible.
    RemoveMapping { map_id: u64 },

    // ========================================================================
    // Ownership
    // ========================================================================
    TransferOwnership { new_owner: String },
    AcceptOwnership {},
    CancelOwnershipTransfer {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Route by id; a zeroed route when the id is unknown
    #[returns(Route)]
    MapInfo { map_id: u64 },

    #[returns(MapCounterResponse)]
    MapCounter {},

    /// Active outbound route for `(target chain, origin asset)`, 0 if none
    #[returns(MapIdResponse)]
    DepositAllowedTokens { chain_id: u64, asset_id: Binary },

    /// Active inbound route for `(origin chain, target asset)`, 0 if none
    #[returns(MapIdResponse)]
    WithdrawAllowedTokens { chain_id: u64, asset_id: Binary },

    /// Paginated route listing
    #[returns(MappingsResponse)]
    Mappings {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(ConfigResponse)]
    Config {},

    #[returns(Ownership)]
    Ownership {},
}

#[cw_serde]
pub struct MapIdResponse {
    pub map_id: u64,
}

#[cw_serde]
pub struct MappingEntry {
    pub map_id: u64,
    pub route: Route,
}

#[cw_serde]
pub struct MappingsResponse {
    pub mappings: Vec<MappingEntry>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub chain_id: u64,
    pub map_counter: u64,
}
