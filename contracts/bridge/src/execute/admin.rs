//! Registry management.

use common::{assert_owner, RegistryContract};
use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Validate `address` and check that it answers the typed registry queries.
pub(crate) fn probe_registry(deps: Deps, address: &str) -> Result<Addr, ContractError> {
    if address.is_empty() {
        return Err(ContractError::AddressZero);
    }
    let addr = deps.api.addr_validate(address)?;
    RegistryContract(addr.clone())
        .map_counter(&deps.querier)
        .map_err(|e| ContractError::InvalidRegistry {
            reason: e.to_string(),
        })?;
    Ok(addr)
}

pub fn execute_change_registry_address(
    deps: DepsMut,
    info: MessageInfo,
    new_address: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let new_registry = probe_registry(deps.as_ref(), &new_address)?;
    let mut config = CONFIG.load(deps.storage)?;
    let old_registry = config.registry.addr().clone();
    config.registry = RegistryContract(new_registry.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "registry_address_changed")
        .add_attribute("by", info.sender)
        .add_attribute("old", old_registry)
        .add_attribute("new", new_registry))
}
