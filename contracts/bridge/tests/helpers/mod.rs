//! Shared cw-multi-test environment for the bridge integration tests.

#![allow(dead_code)]

use bridge::hash::{encode_local_address, eth_signed_message_hash, native_asset_id};
use bridge::msg::{
    AuthorizationHashResponse, AuthorizationProof, ExecuteMsg, GasAccumulatedResponse,
    InstantiateMsg, QueryMsg,
};
use common::{DepositKind, Route, WithdrawKind};
use cosmwasm_std::{coins, Addr, Binary, Coin, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{
    App, AppBuilder, AppResponse, BankKeeper, Contract, ContractWrapper, Executor,
    MockAddressGenerator, MockApiBech32, WasmKeeper,
};
use secp256k1::{Message, Secp256k1, SecretKey};

pub const LOCAL_CHAIN: u64 = 1337;
pub const ETH_CHAIN: u64 = 1;
pub const DENOM: &str = "uluna";

/// Hardhat account #0, configured as the authorization signer
pub const AUTHORITY_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const AUTHORITY_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
/// Hardhat account #1, never authorized
pub const OTHER_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

pub const INITIAL_COINS: u128 = 1_000_000;
pub const INITIAL_TOKENS: u128 = 1_000_000;

pub type BridgeApp = App<BankKeeper, MockApiBech32>;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_reply(bridge::contract::reply);
    Box::new(contract)
}

pub fn contract_mapper() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mapper::contract::execute,
        mapper::contract::instantiate,
        mapper::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Environment
// ============================================================================

pub struct TestEnv {
    pub app: BridgeApp,
    pub owner: Addr,
    pub user: Addr,
    pub mapper: Addr,
    pub bridge: Addr,
    /// cw20-base token; the bridge is its minter
    pub token: Addr,
}

pub fn setup() -> TestEnv {
    let api = MockApiBech32::new("terra");
    let owner = api.addr_make("owner");
    let user = api.addr_make("user");

    let mut app: BridgeApp = AppBuilder::new()
        .with_api(api)
        .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
        .build(|router, _api, storage| {
            router
                .bank
                .init_balance(storage, &owner, coins(INITIAL_COINS, DENOM))
                .unwrap();
            router
                .bank
                .init_balance(storage, &user, coins(INITIAL_COINS, DENOM))
                .unwrap();
        });

    let mapper_code = app.store_code(contract_mapper());
    let bridge_code = app.store_code(contract_bridge());
    let cw20_code = app.store_code(contract_cw20());

    let mapper = app
        .instantiate_contract(
            mapper_code,
            owner.clone(),
            &mapper::msg::InstantiateMsg {
                owner: owner.to_string(),
                chain_id: LOCAL_CHAIN,
            },
            &[],
            "mapper",
            Some(owner.to_string()),
        )
        .unwrap();

    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                registry: mapper.to_string(),
                native_denom: DENOM.to_string(),
                authority: AUTHORITY_ADDRESS.to_string(),
            },
            &[],
            "bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Bridge Test Token".to_string(),
                symbol: "BTT".to_string(),
                decimals: 6,
                initial_balances: vec![
                    Cw20Coin {
                        address: owner.to_string(),
                        amount: Uint128::new(INITIAL_TOKENS),
                    },
                    Cw20Coin {
                        address: user.to_string(),
                        amount: Uint128::new(INITIAL_TOKENS),
                    },
                ],
                mint: Some(MinterResponse {
                    minter: bridge.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "token",
            None,
        )
        .unwrap();

    TestEnv {
        app,
        owner,
        user,
        mapper,
        bridge,
        token,
    }
}

/// Recipient on a remote chain
pub fn remote_account() -> Binary {
    Binary::from(vec![0x11; 32])
}

/// Asset id on a remote chain
pub fn remote_asset() -> Binary {
    let mut bytes = vec![0u8; 32];
    bytes[12..].copy_from_slice(&[0xab; 20]);
    Binary::from(bytes)
}

pub fn coin_asset() -> Binary {
    Binary::from(native_asset_id(DENOM).as_slice())
}

pub fn attr(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap()
}

pub fn err_string(res: AnyResult<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

impl TestEnv {
    pub fn addr(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    pub fn local_id(&self, addr: &Addr) -> Binary {
        Binary::from(encode_local_address(self.app.api(), addr).unwrap().as_slice())
    }

    pub fn deadline(&self) -> u64 {
        self.app.block_info().time.seconds() + 3600
    }

    // ------------------------------------------------------------------------
    // Routes
    // ------------------------------------------------------------------------

    /// Token route leaving this chain (origin = local token).
    pub fn outbound_token_route(&self, kind: DepositKind) -> Route {
        Route {
            origin_chain_id: LOCAL_CHAIN,
            target_chain_id: ETH_CHAIN,
            deposit_kind: kind,
            withdraw_kind: WithdrawKind::None,
            origin_asset_id: self.local_id(&self.token),
            target_asset_id: remote_asset(),
            use_direct_transfer: false,
            is_enabled: true,
            is_native_coin: false,
        }
    }

    /// Token route arriving on this chain (target = local token).
    pub fn inbound_token_route(&self, kind: WithdrawKind) -> Route {
        Route {
            origin_chain_id: ETH_CHAIN,
            target_chain_id: LOCAL_CHAIN,
            deposit_kind: DepositKind::None,
            withdraw_kind: kind,
            origin_asset_id: remote_asset(),
            target_asset_id: self.local_id(&self.token),
            use_direct_transfer: false,
            is_enabled: true,
            is_native_coin: false,
        }
    }

    pub fn outbound_coin_route(&self) -> Route {
        Route {
            origin_chain_id: LOCAL_CHAIN,
            target_chain_id: ETH_CHAIN,
            deposit_kind: DepositKind::Lock,
            withdraw_kind: WithdrawKind::None,
            origin_asset_id: coin_asset(),
            target_asset_id: remote_asset(),
            use_direct_transfer: false,
            is_enabled: true,
            is_native_coin: true,
        }
    }

    pub fn inbound_coin_route(&self) -> Route {
        Route {
            origin_chain_id: ETH_CHAIN,
            target_chain_id: LOCAL_CHAIN,
            deposit_kind: DepositKind::None,
            withdraw_kind: WithdrawKind::Unlock,
            origin_asset_id: remote_asset(),
            target_asset_id: coin_asset(),
            use_direct_transfer: false,
            is_enabled: true,
            is_native_coin: true,
        }
    }

    pub fn register(&mut self, route: Route) -> u64 {
        let res = self
            .app
            .execute_contract(
                self.owner.clone(),
                self.mapper.clone(),
                &mapper::msg::ExecuteMsg::RegisterMapping { route },
                &[],
            )
            .unwrap();
        attr(&res, "map_id").parse().unwrap()
    }

    pub fn disable(&mut self, map_id: u64) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.mapper.clone(),
                &mapper::msg::ExecuteMsg::DisableMapping { map_id },
                &[],
            )
            .unwrap();
    }

    // ------------------------------------------------------------------------
    // Balances
    // ------------------------------------------------------------------------

    pub fn token_balance(&self, addr: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn coin_balance(&self, addr: &Addr) -> u128 {
        self.app.wrap().query_balance(addr, DENOM).unwrap().amount.u128()
    }

    pub fn gas_accumulated(&self) -> u128 {
        let res: GasAccumulatedResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::GasAccumulated {})
            .unwrap();
        res.amount.u128()
    }

    pub fn approve(&mut self, holder: &Addr, amount: u128) {
        self.app
            .execute_contract(
                holder.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.bridge.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    // ------------------------------------------------------------------------
    // Authorization
    // ------------------------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    pub fn authorization_hash(
        &self,
        caller: &Addr,
        map_id: u64,
        amount: u128,
        relay_fee: u128,
        to_address: &Binary,
        salt: [u8; 32],
        deadline: u64,
    ) -> [u8; 32] {
        let res: AuthorizationHashResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::AuthorizationHash {
                    caller: caller.to_string(),
                    map_id,
                    amount: Uint128::new(amount),
                    relay_fee: Uint128::new(relay_fee),
                    to_address: to_address.clone(),
                    salt: Binary::from(salt.as_slice()),
                    deadline,
                },
            )
            .unwrap();
        res.hash.as_slice().try_into().unwrap()
    }

    /// Proof signed by the configured authority.
    pub fn proof(
        &self,
        caller: &Addr,
        map_id: u64,
        amount: u128,
        relay_fee: u128,
        salt: [u8; 32],
    ) -> AuthorizationProof {
        let deadline = self.deadline();
        let hash = self.authorization_hash(
            caller,
            map_id,
            amount,
            relay_fee,
            &remote_account(),
            salt,
            deadline,
        );
        sign(AUTHORITY_KEY, &hash, salt, deadline)
    }

    pub fn bridge_out(
        &mut self,
        caller: &Addr,
        map_id: u64,
        amount: u128,
        relay_fee: u128,
        proof: AuthorizationProof,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            caller.clone(),
            self.bridge.clone(),
            &ExecuteMsg::BridgeTokensOrCoin {
                map_id,
                amount: Uint128::new(amount),
                relay_fee: Uint128::new(relay_fee),
                to_address: remote_account(),
                proof,
            },
            funds,
        )
    }

    pub fn receive(
        &mut self,
        sender: &Addr,
        map_id: u64,
        amount: u128,
        recipient: &Addr,
    ) -> AnyResult<AppResponse> {
        let to_address = self.local_id(recipient);
        self.app.execute_contract(
            sender.clone(),
            self.bridge.clone(),
            &ExecuteMsg::ReceiveTokensOrCoin {
                external_id: Binary::from(vec![0x22; 32]),
                map_id,
                amount: Uint128::new(amount),
                from_address: remote_account(),
                to_address,
            },
            &[],
        )
    }

    pub fn exec(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, funds)
    }
}

/// Sign `hash` as an Ethereum personal message with the given hex key.
pub fn sign(key_hex: &str, hash: &[u8; 32], salt: [u8; 32], deadline: u64) -> AuthorizationProof {
    let secp = Secp256k1::new();
    let key = SecretKey::from_slice(&hex::decode(key_hex).unwrap()).unwrap();
    let digest = eth_signed_message_hash(hash);
    let signature = secp.sign_ecdsa_recoverable(&Message::from_digest(digest), &key);
    let (recovery_id, bytes) = signature.serialize_compact();

    AuthorizationProof {
        signature_r: Binary::from(&bytes[..32]),
        signature_s: Binary::from(&bytes[32..]),
        recovery_id: recovery_id.to_i32() as u8,
        salt: Binary::from(salt.as_slice()),
        deadline,
    }
}
