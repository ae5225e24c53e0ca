//! Checksummed address encoding of 20-byte script hashes
//!
//! An address string is Base58 over (version byte 0x17, script hash, 4-byte
//! double SHA-256 checksum). Decoding verifies the checksum before anything
//! else, so any corruption of a well-formed address surfaces as a checksum
//! mismatch rather than a structural error.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ADDRESS_VERSION, CHECKSUM_LEN};
use crate::error::{Result, TransactionError};
use crate::hash::{hash160, sha256d};
use crate::script::build_verify_script;
use crate::types::ScriptHash;

/// Encode a 20-byte script hash into its checksummed display string.
pub fn encode_script_hash(script_hash: &ScriptHash) -> String {
    let mut payload = Vec::with_capacity(1 + script_hash.len() + CHECKSUM_LEN);
    payload.push(ADDRESS_VERSION);
    payload.extend_from_slice(script_hash);
    let checksum = sha256d(&payload);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(payload).into_string()
}

/// Decode an address string back to its 20-byte script hash.
///
/// 1. Base58-decode the string
/// 2. Verify the trailing 4-byte checksum against double SHA-256 of the rest
/// 3. Require a 21-byte payload carrying the address version byte
pub fn decode_address(address: &str) -> Result<ScriptHash> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| TransactionError::Decoding(format!("address base58: {}", e)))?;
    if decoded.len() <= CHECKSUM_LEN {
        return Err(TransactionError::Decoding(format!(
            "address too short: {} bytes",
            decoded.len()
        )));
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = sha256d(payload);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(TransactionError::ChecksumMismatch(format!(
            "address {}",
            address
        )));
    }

    if payload.len() != 21 {
        return Err(TransactionError::Decoding(format!(
            "address payload length {} is invalid",
            payload.len()
        )));
    }
    if payload[0] != ADDRESS_VERSION {
        return Err(TransactionError::Decoding(format!(
            "address version byte {:#04x}, expected {:#04x}",
            payload[0], ADDRESS_VERSION
        )));
    }

    let mut script_hash = [0u8; 20];
    script_hash.copy_from_slice(&payload[1..]);
    Ok(script_hash)
}

/// A script hash with its checksummed display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub script_hash: ScriptHash,
}

impl Address {
    /// Address of a known 20-byte script hash.
    pub fn from_script_hash(script_hash: ScriptHash) -> Self {
        Self { script_hash }
    }

    /// Address of a verification script: hash the script with RIPEMD-160
    /// over SHA-256.
    pub fn from_verification_script(script: &[u8]) -> Self {
        Self {
            script_hash: hash160(script),
        }
    }

    /// Basic single-signature address of a compressed public key, derived
    /// through its verification script.
    pub fn from_public_key(pubkey: &[u8]) -> Self {
        Self::from_verification_script(&build_verify_script(pubkey))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_script_hash(&self.script_hash))
    }
}

impl FromStr for Address {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            script_hash: decode_address(s)?,
        })
    }
}
