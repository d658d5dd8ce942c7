//! Authorization proof verification
//!
//! A proof is an ECDSA secp256k1 signature by the configured authority over
//! the personal-message wrapping of the authorization hash.

use cosmwasm_std::Api;

use crate::error::ContractError;
use crate::hash::{eth_signed_message_hash, evm_address_from_pubkey};
use crate::msg::AuthorizationProof;

/// Normalize a recovery id given as `0/1` or `27/28`.
fn normalize_recovery_id(v: u8) -> Option<u8> {
    match v {
        0 | 1 => Some(v),
        27 | 28 => Some(v - 27),
        _ => None,
    }
}

fn to_word(value: &[u8], field: &str) -> Result<[u8; 32], ContractError> {
    value.try_into().map_err(|_| ContractError::InvalidLength {
        field: field.to_string(),
        expected: 32,
        got: value.len(),
    })
}

/// Check that `proof` was produced by `expected_signer` over `message_hash`
/// and has not expired at `now` (seconds).
pub fn verify_authorization(
    api: &dyn Api,
    message_hash: &[u8; 32],
    proof: &AuthorizationProof,
    expected_signer: &[u8; 20],
    now: u64,
) -> Result<(), ContractError> {
    if *expected_signer == [0u8; 20] {
        return Err(ContractError::AddressZero);
    }
    if proof.deadline < now {
        return Err(ContractError::Expired {
            deadline: proof.deadline,
            now,
        });
    }

    let r = to_word(&proof.signature_r, "signature_r")?;
    let s = to_word(&proof.signature_s, "signature_s")?;
    let recovery_id =
        normalize_recovery_id(proof.recovery_id).ok_or(ContractError::InvalidSignature)?;

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r);
    signature[32..].copy_from_slice(&s);

    let digest = eth_signed_message_hash(message_hash);
    let pubkey = api
        .secp256k1_recover_pubkey(&digest, &signature, recovery_id)
        .map_err(|_| ContractError::InvalidSignature)?;

    match evm_address_from_pubkey(&pubkey) {
        Some(signer) if signer == *expected_signer => Ok(()),
        _ => Err(ContractError::InvalidSignature),
    }
}
