//! Hash computation and address encoding
//!
//! # Authorization message (284 bytes, packed)
//! - Bytes 0-31:    caller (local address, left-padded)
//! - Bytes 32-51:   authority (EVM address)
//! - Bytes 52-83:   recipient
//! - Bytes 84-115:  target asset id
//! - Bytes 116-147: relay fee (uint256, big-endian)
//! - Bytes 148-179: amount (uint256, big-endian)
//! - Bytes 180-211: origin chain id (uint256, big-endian)
//! - Bytes 212-243: target chain id (uint256, big-endian)
//! - Bytes 244-251: deadline (uint64, big-endian)
//! - Bytes 252-283: salt

use cosmwasm_std::{Addr, Api, CanonicalAddr, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

const MESSAGE_LENGTH: usize = 284;
const ETH_SIGNED_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Fields covered by an authorization proof.
pub struct AuthorizationMessage<'a> {
    pub caller: &'a [u8; 32],
    pub authority: &'a [u8; 20],
    pub recipient: &'a [u8; 32],
    pub target_asset: &'a [u8; 32],
    pub relay_fee: u128,
    pub amount: u128,
    pub origin_chain_id: u64,
    pub target_chain_id: u64,
    pub deadline: u64,
    pub salt: &'a [u8; 32],
}

impl AuthorizationMessage<'_> {
    pub fn hash(&self) -> [u8; 32] {
        let mut data = [0u8; MESSAGE_LENGTH];

        data[0..32].copy_from_slice(self.caller);
        data[32..52].copy_from_slice(self.authority);
        data[52..84].copy_from_slice(self.recipient);
        data[84..116].copy_from_slice(self.target_asset);

        // u128 values occupy the low 16 bytes of their uint256 slot
        data[116 + 16..148].copy_from_slice(&self.relay_fee.to_be_bytes());
        data[148 + 16..180].copy_from_slice(&self.amount.to_be_bytes());

        // u64 chain ids occupy the low 8 bytes
        data[180 + 24..212].copy_from_slice(&self.origin_chain_id.to_be_bytes());
        data[212 + 24..244].copy_from_slice(&self.target_chain_id.to_be_bytes());

        data[244..252].copy_from_slice(&self.deadline.to_be_bytes());
        data[252..284].copy_from_slice(self.salt);

        keccak256(&data)
    }
}

/// Wrap a 32-byte hash the way `personal_sign` does before signing.
pub fn eth_signed_message_hash(hash: &[u8; 32]) -> [u8; 32] {
    let mut data = Vec::with_capacity(ETH_SIGNED_PREFIX.len() + 32);
    data.extend_from_slice(ETH_SIGNED_PREFIX);
    data.extend_from_slice(hash);
    keccak256(&data)
}

/// EVM address of an uncompressed secp256k1 public key (65 bytes, 0x04 prefix).
pub fn evm_address_from_pubkey(pubkey: &[u8]) -> Option<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return None;
    }
    let digest = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    Some(address)
}

/// Parse a 0x-prefixed (or bare) 40-hex-digit EVM address.
pub fn parse_evm_address(s: &str) -> StdResult<[u8; 20]> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(stripped)
        .map_err(|e| StdError::generic_err(format!("Invalid hex address: {}", e)))?;
    bytes
        .try_into()
        .map_err(|_| StdError::generic_err("EVM address must be 20 bytes"))
}

pub fn evm_address_to_hex(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Encode a local address as 32 bytes (canonical form, left-padded)
pub fn encode_local_address(api: &dyn Api, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    let bytes = canonical.as_slice();
    if bytes.len() > 32 {
        return Err(StdError::generic_err(format!(
            "Canonical address too long: {} bytes",
            bytes.len()
        )));
    }

    let mut result = [0u8; 32];
    let start = 32 - bytes.len();
    result[start..].copy_from_slice(bytes);
    Ok(result)
}

/// Decode a 32-byte local address id.
///
/// Twelve leading zero bytes mark a 20-byte canonical address; anything else
/// is taken as a full 32-byte canonical address.
pub fn decode_local_address(api: &dyn Api, bytes: &[u8; 32]) -> StdResult<Addr> {
    let canonical = if bytes[..12].iter().all(|b| *b == 0) {
        CanonicalAddr::from(&bytes[12..])
    } else {
        CanonicalAddr::from(&bytes[..])
    };
    api.addr_humanize(&canonical)
}

/// Asset id for a bank denom: keccak256 of the denom string.
pub fn native_asset_id(denom: &str) -> [u8; 32] {
    keccak256(denom.as_bytes())
}
