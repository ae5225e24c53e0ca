//! ECDSA key pairs on the NIST P-256 curve
//!
//! A key pair owns its private scalar and deterministically derives the
//! compressed public key, the single-signature verification script, the
//! 20-byte script hash, and the address. Only signatures and the compressed
//! public key ever reach the wire.

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use rand::rngs::OsRng;

use crate::address::Address;
use crate::constants::{
    CHECKSUM_LEN, COMPRESSED_PUBKEY_LEN, PRIVATE_KEY_LEN, WIF_COMPRESSED_FLAG, WIF_VERSION,
};
use crate::error::{Result, TransactionError};
use crate::hash::{hash160, sha256d};
use crate::script::build_verify_script;
use crate::types::{ByteString, ScriptHash};

/// A P-256 private/public key pair.
#[derive(Debug, Clone)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh random key pair.
    pub fn generate() -> Self {
        let secret = SecretKey::random(&mut OsRng);
        let public = secret.public_key();
        Self { secret, public }
    }

    /// Import a raw 32-byte private key.
    ///
    /// Rejects inputs that are not exactly 32 bytes or that do not form a
    /// valid non-zero curve scalar.
    pub fn from_private_key(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(TransactionError::Decoding(format!(
                "private key must be {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            )));
        }
        let secret = SecretKey::from_slice(bytes)
            .map_err(|_| TransactionError::Decoding("invalid private key scalar".to_string()))?;
        let public = secret.public_key();
        Ok(Self { secret, public })
    }

    /// Import a private key from its Wallet-Import-Format string.
    ///
    /// The decoded payload is (version 0x80, 32 key bytes, optional
    /// compression flag 0x01, 4 checksum bytes). The checksum is verified
    /// before the version and flag bytes are inspected.
    pub fn from_wif(wif: &str) -> Result<Self> {
        let decoded = bs58::decode(wif)
            .into_vec()
            .map_err(|e| TransactionError::Decoding(format!("WIF base58: {}", e)))?;
        if decoded.len() != 37 && decoded.len() != 38 {
            return Err(TransactionError::Decoding(format!(
                "WIF payload length {} is invalid",
                decoded.len()
            )));
        }

        let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
        let expected = sha256d(payload);
        if checksum != &expected[..CHECKSUM_LEN] {
            return Err(TransactionError::ChecksumMismatch("WIF".to_string()));
        }

        if payload[0] != WIF_VERSION {
            return Err(TransactionError::Decoding(format!(
                "WIF version byte {:#04x}, expected {:#04x}",
                payload[0], WIF_VERSION
            )));
        }
        if payload.len() == 34 && payload[33] != WIF_COMPRESSED_FLAG {
            return Err(TransactionError::Decoding(
                "WIF compression flag must be 0x01".to_string(),
            ));
        }

        Self::from_private_key(&payload[1..1 + PRIVATE_KEY_LEN])
    }

    /// Export the private key as a compressed-form WIF string.
    pub fn export_wif(&self) -> String {
        let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_LEN + 1 + CHECKSUM_LEN);
        payload.push(WIF_VERSION);
        payload.extend_from_slice(&self.private_key_bytes());
        payload.push(WIF_COMPRESSED_FLAG);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
        bs58::encode(payload).into_string()
    }

    /// The raw 32-byte private scalar.
    pub fn private_key_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.secret.to_bytes().into()
    }

    /// The 33-byte compressed SEC1 encoding of the public key.
    pub fn public_key_bytes(&self) -> [u8; COMPRESSED_PUBKEY_LEN] {
        let point = self.public.to_encoded_point(true);
        let mut bytes = [0u8; COMPRESSED_PUBKEY_LEN];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    /// Sign a payload: one round of SHA-256 over the payload, then
    /// deterministic (RFC 6979) ECDSA over that digest. Returns the 64-byte
    /// r ‖ s signature.
    pub fn sign(&self, payload: &[u8]) -> Result<ByteString> {
        let signing_key = SigningKey::from(&self.secret);
        let signature: Signature = signing_key
            .try_sign(payload)
            .map_err(|e| TransactionError::Signing(format!("ECDSA signing: {}", e)))?;
        Ok(signature.to_bytes().to_vec())
    }

    /// Verify a 64-byte r ‖ s signature over a payload against this key pair's
    /// public key. A well-formed signature that does not match yields
    /// `Ok(false)`.
    pub fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool> {
        let signature = Signature::from_slice(signature)
            .map_err(|_| TransactionError::Decoding("signature must be 64 bytes".to_string()))?;
        let verifying_key = VerifyingKey::from(&self.public);
        Ok(verifying_key.verify(payload, &signature).is_ok())
    }

    /// The single-signature verification script for this key pair.
    pub fn verification_script(&self) -> ByteString {
        build_verify_script(&self.public_key_bytes())
    }

    /// The 20-byte hash of the verification script.
    pub fn script_hash(&self) -> ScriptHash {
        hash160(&self.verification_script())
    }

    /// The basic single-signature address for this key pair.
    pub fn address(&self) -> Address {
        Address::from_script_hash(self.script_hash())
    }
}
