//! # Neo-Transaction
//!
//! Deterministic construction, serialization, and signing of NEO transactions.
//!
//! This crate provides pure, side-effect-free functions that turn a transfer
//! description into network-ready transaction bytes: VM script assembly,
//! canonical wire serialization, NIST P-256 signing, and the Base58Check
//! address and WIF codecs.
//!
//! ## Architecture
//!
//! The system follows a layered architecture:
//! - Byte primitives (hashing, opcodes, wire types)
//! - Script assembly (push-rule encoder, verification scripts)
//! - Transaction model (append-only construction, canonical serialization)
//! - Signing surface (key pairs, witnesses, transfer requests)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Serialization and signing are deterministic; the only entropy source is explicit key generation
//! 2. **Byte Exactness**: The same transaction always serializes to the same bytes
//! 3. **Exact Version Pinning**: All signing-critical dependencies pinned to exact versions
//! 4. **Append-Only Construction**: Transactions are built by appending inputs, outputs, attributes, and witnesses in order
//!
//! ## Usage
//!
//! ```rust
//! use neo_transaction::transfer::sign_transfer;
//! use neo_transaction::{KeyPair, TransferInput, TransferOutput, TransferRequest};
//!
//! let keypair = KeyPair::generate();
//! let request = TransferRequest {
//!     vin: vec![TransferInput {
//!         txid: "0".repeat(64),
//!         vout: 0,
//!     }],
//!     vout: vec![TransferOutput {
//!         asset: "neo".to_string(),
//!         address: keypair.address().to_string(),
//!         value: "1".to_string(),
//!     }],
//! };
//! let signed = sign_transfer(&request, &[&keypair.export_wif()]).unwrap();
//! assert_eq!(signed.txid.len(), 64);
//! ```

pub mod types;
pub mod constants;
pub mod opcode;
pub mod hash;
pub mod script;
pub mod keypair;
pub mod address;
pub mod transaction;
pub mod transfer;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use error::{Result, TransactionError};
pub use address::Address;
pub use keypair::KeyPair;
pub use script::ScriptBuilder;
pub use transaction::{ExclusiveData, Transaction, TransactionType};
pub use transfer::{SignedTransfer, TransferInput, TransferOutput, TransferRequest};
