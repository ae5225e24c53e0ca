//! Caller-facing transfer requests
//!
//! A transfer request describes inputs by prior transaction id and outputs
//! by asset symbol, address, and decimal value. This module validates and
//! converts every field of the request, builds the contract transaction,
//! and signs it with WIF-encoded keys. All conversion happens before any
//! transaction is constructed, so a malformed request never produces a
//! partially built transaction.

use serde::{Deserialize, Serialize};

use crate::address::decode_address;
use crate::constants::{ASSET_GAS_ID, ASSET_NEO_ID, FIXED8_DECIMALS, TX_OUTPUT_VALUE_BASE};
use crate::error::{Result, TransactionError};
use crate::keypair::KeyPair;
use crate::transaction::Transaction;
use crate::types::{AttributeUsage, Fixed8, Hash256};

/// One spent output: the prior transaction id in display-order hex
/// (optionally "0x"-prefixed) and the index of the output being consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInput {
    pub txid: String,
    pub vout: u16,
}

/// One created output: an asset symbol ("neo" or "gas", any case), the
/// recipient address, and a decimal value in whole asset units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutput {
    pub asset: String,
    pub address: String,
    pub value: String,
}

/// A transfer description as supplied by the caller, typically as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub vin: Vec<TransferInput>,
    pub vout: Vec<TransferOutput>,
}

/// The signed result: transaction id and network-ready raw hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransfer {
    pub txid: String,
    pub raw: String,
}

/// Resolve an asset symbol to its 32-byte identifier in display order.
///
/// Matching is ASCII case-insensitive; any symbol other than NEO or GAS is
/// rejected.
pub fn asset_id_from_symbol(symbol: &str) -> Result<Hash256> {
    if symbol.eq_ignore_ascii_case("neo") {
        Ok(ASSET_NEO_ID)
    } else if symbol.eq_ignore_ascii_case("gas") {
        Ok(ASSET_GAS_ID)
    } else {
        Err(TransactionError::UnknownAsset(symbol.to_string()))
    }
}

/// Parse a decimal value string into Fixed8 indivisible units.
///
/// 1. an optional single '.' separates whole and fractional digits
/// 2. the whole part is required; both parts are ASCII digits only
/// 3. at most eight fractional digits
/// 4. the scaled result must fit in a signed 64-bit integer
pub fn parse_fixed8(text: &str) -> Result<Fixed8> {
    let (whole, frac) = match text.split_once('.') {
        Some(("", _)) | Some((_, "")) => {
            return Err(TransactionError::Decoding(format!(
                "invalid decimal value {:?}",
                text
            )))
        }
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };
    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TransactionError::Decoding(format!(
            "invalid decimal value {:?}",
            text
        )));
    }
    if frac.len() > FIXED8_DECIMALS as usize {
        return Err(TransactionError::Decoding(format!(
            "value {:?} has more than {} decimal places",
            text, FIXED8_DECIMALS
        )));
    }

    let whole_units: i64 = whole.parse().map_err(|_| {
        TransactionError::Decoding(format!("value {:?} out of Fixed8 range", text))
    })?;
    let frac_units: i64 = if frac.is_empty() {
        0
    } else {
        let digits: i64 = frac.parse().map_err(|_| {
            TransactionError::Decoding(format!("invalid decimal value {:?}", text))
        })?;
        digits * 10i64.pow(FIXED8_DECIMALS - frac.len() as u32)
    };
    whole_units
        .checked_mul(TX_OUTPUT_VALUE_BASE)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or_else(|| TransactionError::Decoding(format!("value {:?} out of Fixed8 range", text)))
}

/// Parse a transaction id from display-order hex into wire (reversed) byte
/// order. A leading "0x" is accepted and ignored.
pub fn parse_txid_hex(text: &str) -> Result<Hash256> {
    let stripped = text.strip_prefix("0x").unwrap_or(text);
    let mut bytes = hex::decode(stripped)
        .map_err(|e| TransactionError::Decoding(format!("invalid txid hex: {}", e)))?;
    if bytes.len() != 32 {
        return Err(TransactionError::Decoding(format!(
            "txid must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    bytes.reverse();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}

/// Build an unsigned contract transfer from a request.
///
/// Every input and output is validated and converted first; an unknown
/// asset symbol or malformed field rejects the whole request before any
/// transaction is constructed.
pub fn build_transfer(request: &TransferRequest) -> Result<Transaction> {
    let mut inputs = Vec::with_capacity(request.vin.len());
    for input in &request.vin {
        inputs.push((parse_txid_hex(&input.txid)?, input.vout));
    }

    let mut outputs = Vec::with_capacity(request.vout.len());
    for output in &request.vout {
        let mut asset_id = asset_id_from_symbol(&output.asset)?;
        asset_id.reverse();
        let value = parse_fixed8(&output.value)?;
        let script_hash = decode_address(&output.address)?;
        outputs.push((asset_id, value, script_hash));
    }

    let mut tx = Transaction::new_contract();
    for (prev_hash, prev_index) in inputs {
        tx.append_input(prev_hash, prev_index);
    }
    for (asset_id, value, script_hash) in outputs {
        tx.append_output(asset_id, value, script_hash);
    }
    Ok(tx)
}

/// Build, attribute, and sign a transfer with one or more WIF-encoded keys.
///
/// Every signer's Script attribute is appended before the first signature
/// is produced, so the signing payload already covers all signers and a
/// later witness cannot invalidate an earlier one.
pub fn sign_transfer(request: &TransferRequest, wifs: &[&str]) -> Result<SignedTransfer> {
    let mut tx = build_transfer(request)?;

    let mut keypairs = Vec::with_capacity(wifs.len());
    for wif in wifs {
        keypairs.push(KeyPair::from_wif(wif)?);
    }

    for keypair in &keypairs {
        tx.append_attribute(AttributeUsage::Script, keypair.script_hash().to_vec())?;
    }
    for keypair in &keypairs {
        tx.append_basic_witness(keypair)?;
    }

    Ok(SignedTransfer {
        txid: tx.txid(),
        raw: tx.raw_hex(),
    })
}
