//! NEO 2.x protocol constants

/// NEO governing token asset identifier, display (big-endian) byte order
///
/// Hex: c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b
pub const ASSET_NEO_ID: [u8; 32] = [
    0xc5, 0x6f, 0x33, 0xfc, 0x6e, 0xcf, 0xcd, 0x0c,
    0x22, 0x5c, 0x4a, 0xb3, 0x56, 0xfe, 0xe5, 0x93,
    0x90, 0xaf, 0x85, 0x60, 0xbe, 0x0e, 0x93, 0x0f,
    0xae, 0xbe, 0x74, 0xa6, 0xda, 0xff, 0x7c, 0x9b,
];

/// GAS utility token asset identifier, display (big-endian) byte order
///
/// Hex: 602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7
pub const ASSET_GAS_ID: [u8; 32] = [
    0x60, 0x2c, 0x79, 0x71, 0x8b, 0x16, 0xe4, 0x42,
    0xde, 0x58, 0x77, 0x8e, 0x14, 0x8d, 0x0b, 0x10,
    0x84, 0xe3, 0xb2, 0xdf, 0xfd, 0x5d, 0xe6, 0xb7,
    0xb1, 0x6c, 0xee, 0x79, 0x69, 0x28, 0x2d, 0xe7,
];

/// Fixed8 value base: one whole asset unit in indivisible units
pub const TX_OUTPUT_VALUE_BASE: i64 = 100_000_000;

/// Number of decimal places in a Fixed8 value
pub const FIXED8_DECIMALS: u32 = 8;

/// Version byte prefixed to a script hash in address encoding
pub const ADDRESS_VERSION: u8 = 0x17;

/// Version byte prefixed to a private key in WIF encoding
pub const WIF_VERSION: u8 = 0x80;

/// Trailing WIF byte marking a compressed public key
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// Base58Check checksum length in bytes
pub const CHECKSUM_LEN: usize = 4;

/// Private key length in bytes
pub const PRIVATE_KEY_LEN: usize = 32;

/// Compressed SEC1 public key length in bytes
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Maximum number of public keys in a multi-signature verification script
pub const MAX_MULTISIG_KEYS: usize = 1024;
