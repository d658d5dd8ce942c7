//! Typed registry interface
//!
//! The bridge only trusts a registry that answers these queries. The mapper
//! contract's own `QueryMsg` is a superset with identical variants, so the
//! JSON produced here is understood by it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

use crate::route::Route;

/// Queries every registry implementation must answer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum RegistryQueryMsg {
    /// Route by id (zeroed route if absent)
    #[returns(Route)]
    MapInfo { map_id: u64 },

    /// Last assigned mapping id
    #[returns(MapCounterResponse)]
    MapCounter {},
}

#[cw_serde]
pub struct MapCounterResponse {
    pub map_counter: u64,
}

/// Handle to a registry contract.
#[cw_serde]
pub struct RegistryContract(pub Addr);

impl RegistryContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn map_info(&self, querier: &QuerierWrapper, map_id: u64) -> StdResult<Route> {
        querier.query_wasm_smart(self.0.as_str(), &RegistryQueryMsg::MapInfo { map_id })
    }

    pub fn map_counter(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        let res: MapCounterResponse =
            querier.query_wasm_smart(self.0.as_str(), &RegistryQueryMsg::MapCounter {})?;
        Ok(res.map_counter)
    }
}
