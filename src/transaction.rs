//! NEO transaction model and canonical wire serialization
//!
//! A transaction is constructed empty by type, mutated through append-only
//! operations, and serialized on demand: the unsigned form is the signing
//! payload, the full form is the network-ready bytes. The transaction ID is
//! derived from the unsigned form only; witnesses never contribute to it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransactionError};
use crate::hash::sha256d;
use crate::keypair::KeyPair;
use crate::script::build_witness;
use crate::types::{
    reversed, Attribute, AttributeFraming, AttributeUsage, ByteString, Fixed8, Hash256,
    ScriptHash, TransactionInput, TransactionOutput, Witness,
};

/// Transaction type discriminator bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionType {
    Miner = 0x00,
    Issue = 0x01,
    Claim = 0x02,
    Enrollment = 0x20,
    Register = 0x40,
    Contract = 0x80,
    State = 0x90,
    Publish = 0xd0,
    Invocation = 0xd1,
}

impl TransactionType {
    /// The wire byte for this transaction type.
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }
}

/// Type-specific exclusive data; the serializer branches on this tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusiveData {
    /// Contract transfers carry no extra fields.
    None,
    /// Invocations carry the VM script and a Fixed8 gas budget. The gas
    /// field is serialized for version >= 1 only.
    Invocation { script: ByteString, gas: Fixed8 },
}

/// Transaction: 𝒯𝒳 = type × ℕ × excl × 𝒜* × ℐ* × 𝒪* × 𝒲*
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub tx_type: TransactionType,
    pub version: u8,
    pub exclusive: ExclusiveData,
    pub attributes: Vec<Attribute>,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub witnesses: Vec<Witness>,
}

/// Append a compact variable-length unsigned integer:
///
/// 1. value < 0xfd: one byte
/// 2. value <= 0xffff: 0xfd, then little-endian u16
/// 3. value <= 0xffffffff: 0xfe, then little-endian u32
/// 4. otherwise: 0xff, then little-endian u64
fn write_var_int(buf: &mut Vec<u8>, value: u64) {
    if value < 0xfd {
        buf.push(value as u8);
    } else if value <= 0xffff {
        buf.push(0xfd);
        buf.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xffff_ffff {
        buf.push(0xfe);
        buf.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        buf.push(0xff);
        buf.extend_from_slice(&value.to_le_bytes());
    }
}

/// Append a length-prefixed byte string: compact var-int length, then the
/// raw bytes.
fn write_var_bytes(buf: &mut Vec<u8>, data: &[u8]) {
    write_var_int(buf, data.len() as u64);
    buf.extend_from_slice(data);
}

impl Transaction {
    /// Create an empty contract transfer transaction (type 0x80, version 0).
    pub fn new_contract() -> Self {
        Self {
            tx_type: TransactionType::Contract,
            version: 0,
            exclusive: ExclusiveData::None,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    /// Create an empty invocation transaction (type 0xd1, version 1)
    /// carrying a VM script and a Fixed8 gas budget.
    pub fn new_invocation(script: ByteString, gas: Fixed8) -> Self {
        Self {
            tx_type: TransactionType::Invocation,
            version: 1,
            exclusive: ExclusiveData::Invocation { script, gas },
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    /// Append an input referencing a prior output.
    ///
    /// The previous transaction hash is given in wire (reversed) byte order.
    pub fn append_input(&mut self, prev_hash: Hash256, prev_index: u16) {
        self.inputs.push(TransactionInput {
            prev_hash,
            prev_index,
        });
    }

    /// Append an output.
    ///
    /// The asset identifier is given in wire (reversed) byte order; the value
    /// is in Fixed8 indivisible units.
    pub fn append_output(&mut self, asset_id: Hash256, value: Fixed8, script_hash: ScriptHash) {
        self.outputs.push(TransactionOutput {
            asset_id,
            value,
            script_hash,
        });
    }

    /// Append an attribute, validating its data length against the usage's
    /// wire framing.
    pub fn append_attribute(&mut self, usage: AttributeUsage, data: ByteString) -> Result<()> {
        match usage.framing() {
            AttributeFraming::Raw(expected) => {
                if data.len() != expected {
                    return Err(TransactionError::Decoding(format!(
                        "attribute {:?} requires {} data bytes, got {}",
                        usage,
                        expected,
                        data.len()
                    )));
                }
            }
            AttributeFraming::BytePrefixed => {
                if data.len() > 0xff {
                    return Err(TransactionError::Decoding(format!(
                        "attribute {:?} data too long: {}",
                        usage,
                        data.len()
                    )));
                }
            }
            AttributeFraming::VarPrefixed => {
                if data.len() > 0xffff {
                    return Err(TransactionError::Decoding(format!(
                        "attribute {:?} data too long: {}",
                        usage,
                        data.len()
                    )));
                }
            }
        }
        self.attributes.push(Attribute { usage, data });
        Ok(())
    }

    /// Append an already-built witness.
    pub fn append_witness(&mut self, witness: Witness) {
        self.witnesses.push(witness);
    }

    /// Sign the current unsigned form with one key pair and append the
    /// resulting single-signature witness.
    ///
    /// The unsigned form is recomputed on every call, so all inputs, outputs,
    /// and attributes of every required signer must be in place before the
    /// first signature; later body mutation invalidates prior signatures.
    pub fn append_basic_witness(&mut self, keypair: &KeyPair) -> Result<()> {
        let witness = build_witness(keypair, &self.serialize_unsigned())?;
        self.witnesses.push(witness);
        Ok(())
    }

    /// Serialize the unsigned form: every field except the witnesses.
    ///
    /// Field order:
    /// 1. type byte, version byte
    /// 2. type-specific exclusive data
    /// 3. attribute count, then each attribute
    /// 4. input count, then each (32-byte prev hash, u16 LE index)
    /// 5. output count, then each (32-byte asset, i64 LE value, 20-byte script hash)
    pub fn serialize_unsigned(&self) -> ByteString {
        let mut buf = Vec::new();

        // 1. type and version
        buf.push(self.tx_type.as_byte());
        buf.push(self.version);

        // 2. exclusive data
        self.write_exclusive(&mut buf);

        // 3. attributes
        write_var_int(&mut buf, self.attributes.len() as u64);
        for attribute in &self.attributes {
            write_attribute(&mut buf, attribute);
        }

        // 4. inputs
        write_var_int(&mut buf, self.inputs.len() as u64);
        for input in &self.inputs {
            buf.extend_from_slice(&input.prev_hash);
            buf.extend_from_slice(&input.prev_index.to_le_bytes());
        }

        // 5. outputs
        write_var_int(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            buf.extend_from_slice(&output.asset_id);
            buf.extend_from_slice(&output.value.to_le_bytes());
            buf.extend_from_slice(&output.script_hash);
        }

        buf
    }

    /// Serialize the full form: the unsigned form followed by the witness
    /// count and each witness as two length-prefixed scripts.
    pub fn serialize(&self) -> ByteString {
        let mut buf = self.serialize_unsigned();
        write_var_int(&mut buf, self.witnesses.len() as u64);
        for witness in &self.witnesses {
            write_var_bytes(&mut buf, &witness.invocation);
            write_var_bytes(&mut buf, &witness.verification);
        }
        buf
    }

    /// The transaction ID: double SHA-256 of the unsigned form, reported as
    /// hex in the network's conventional (reversed) byte order.
    pub fn txid(&self) -> String {
        hex::encode(reversed(&sha256d(&self.serialize_unsigned())))
    }

    /// The full form as a hex string, ready for RPC submission.
    pub fn raw_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    fn write_exclusive(&self, buf: &mut Vec<u8>) {
        match &self.exclusive {
            ExclusiveData::None => {}
            ExclusiveData::Invocation { script, gas } => {
                write_var_bytes(buf, script);
                if self.version >= 1 {
                    buf.extend_from_slice(&gas.to_le_bytes());
                }
            }
        }
    }
}

fn write_attribute(buf: &mut Vec<u8>, attribute: &Attribute) {
    buf.push(attribute.usage.as_byte());
    match attribute.usage.framing() {
        AttributeFraming::Raw(_) => buf.extend_from_slice(&attribute.data),
        AttributeFraming::BytePrefixed => {
            buf.push(attribute.data.len() as u8);
            buf.extend_from_slice(&attribute.data);
        }
        AttributeFraming::VarPrefixed => write_var_bytes(buf, &attribute.data),
    }
}
