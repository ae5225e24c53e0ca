//! Core NEO transaction types
//!
//! Wire-model structs and the type aliases shared across the crate. Inputs,
//! outputs, attributes, and witnesses are plain data; all serialization rules
//! live in the transaction module.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransactionError};

/// Hash type: 256-bit hash
pub type Hash256 = [u8; 32];

/// Script hash type: 160-bit hash of a verification script
pub type ScriptHash = [u8; 20];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Fixed-point value with 8 decimal places, in indivisible units
pub type Fixed8 = i64;

/// Byte-order reversal between display order and wire order.
///
/// The network stores hashes little-endian relative to their canonical
/// display form; every conversion goes through this one helper.
pub fn reversed(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.reverse();
    out
}

/// Transaction Input: ℐ = ℍ × ℕ₁₆
///
/// References a prior output by (previous transaction hash, output index).
/// The hash is in wire (reversed) byte order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prev_hash: Hash256,
    pub prev_index: u16,
}

/// Transaction Output: 𝒪 = ℍ × ℤ × ℍ₁₆₀
///
/// (asset identifier in wire byte order, Fixed8 value, recipient script hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub asset_id: Hash256,
    pub value: Fixed8,
    pub script_hash: ScriptHash,
}

/// Witness: 𝒲 = 𝕊 × 𝕊
///
/// The invocation script pushes the signature(s); the verification script
/// pushes the public key(s) and the signature-check instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub invocation: ByteString,
    pub verification: ByteString,
}

/// Attribute: 𝒜 = usage × 𝕊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub usage: AttributeUsage,
    pub data: ByteString,
}

/// How an attribute's data field is framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFraming {
    /// Exactly this many raw bytes, no length prefix
    Raw(usize),
    /// One length byte, then the bytes
    BytePrefixed,
    /// Compact var-int length, then the bytes
    VarPrefixed,
}

/// Transaction attribute usage tags.
///
/// The discriminant is the wire byte. Framing of the data field depends on
/// the usage; see [`AttributeUsage::framing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AttributeUsage {
    ContractHash = 0x00,
    Ecdh02 = 0x02,
    Ecdh03 = 0x03,
    Script = 0x20,
    Vote = 0x30,
    DescriptionUrl = 0x81,
    Description = 0x90,
    Hash1 = 0xa1,
    Hash2 = 0xa2,
    Hash3 = 0xa3,
    Hash4 = 0xa4,
    Hash5 = 0xa5,
    Hash6 = 0xa6,
    Hash7 = 0xa7,
    Hash8 = 0xa8,
    Hash9 = 0xa9,
    Hash10 = 0xaa,
    Hash11 = 0xab,
    Hash12 = 0xac,
    Hash13 = 0xad,
    Hash14 = 0xae,
    Hash15 = 0xaf,
    Remark = 0xf0,
    Remark1 = 0xf1,
    Remark2 = 0xf2,
    Remark3 = 0xf3,
    Remark4 = 0xf4,
    Remark5 = 0xf5,
    Remark6 = 0xf6,
    Remark7 = 0xf7,
    Remark8 = 0xf8,
    Remark9 = 0xf9,
    Remark10 = 0xfa,
    Remark11 = 0xfb,
    Remark12 = 0xfc,
    Remark13 = 0xfd,
    Remark14 = 0xfe,
    Remark15 = 0xff,
}

impl AttributeUsage {
    /// The wire byte for this usage.
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }

    /// Wire framing of the data field for this usage.
    ///
    /// 32-byte hash usages and the 20-byte script usage are written raw with
    /// no length prefix; the URL usage takes a single length byte; the
    /// description and remark usages take a compact var-int length.
    pub fn framing(&self) -> AttributeFraming {
        use AttributeUsage::*;
        match self {
            ContractHash | Ecdh02 | Ecdh03 | Vote | Hash1 | Hash2 | Hash3 | Hash4 | Hash5
            | Hash6 | Hash7 | Hash8 | Hash9 | Hash10 | Hash11 | Hash12 | Hash13 | Hash14
            | Hash15 => AttributeFraming::Raw(32),
            Script => AttributeFraming::Raw(20),
            DescriptionUrl => AttributeFraming::BytePrefixed,
            Description | Remark | Remark1 | Remark2 | Remark3 | Remark4 | Remark5 | Remark6
            | Remark7 | Remark8 | Remark9 | Remark10 | Remark11 | Remark12 | Remark13
            | Remark14 | Remark15 => AttributeFraming::VarPrefixed,
        }
    }
}

impl TryFrom<u8> for AttributeUsage {
    type Error = TransactionError;

    fn try_from(value: u8) -> Result<Self> {
        use AttributeUsage::*;
        let usage = match value {
            0x00 => ContractHash,
            0x02 => Ecdh02,
            0x03 => Ecdh03,
            0x20 => Script,
            0x30 => Vote,
            0x81 => DescriptionUrl,
            0x90 => Description,
            0xa1 => Hash1,
            0xa2 => Hash2,
            0xa3 => Hash3,
            0xa4 => Hash4,
            0xa5 => Hash5,
            0xa6 => Hash6,
            0xa7 => Hash7,
            0xa8 => Hash8,
            0xa9 => Hash9,
            0xaa => Hash10,
            0xab => Hash11,
            0xac => Hash12,
            0xad => Hash13,
            0xae => Hash14,
            0xaf => Hash15,
            0xf0 => Remark,
            0xf1 => Remark1,
            0xf2 => Remark2,
            0xf3 => Remark3,
            0xf4 => Remark4,
            0xf5 => Remark5,
            0xf6 => Remark6,
            0xf7 => Remark7,
            0xf8 => Remark8,
            0xf9 => Remark9,
            0xfa => Remark10,
            0xfb => Remark11,
            0xfc => Remark12,
            0xfd => Remark13,
            0xfe => Remark14,
            0xff => Remark15,
            other => {
                return Err(TransactionError::Decoding(format!(
                    "unknown attribute usage byte {:#04x}",
                    other
                )))
            }
        };
        Ok(usage)
    }
}
