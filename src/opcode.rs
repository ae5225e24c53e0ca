//! NEO VM Opcode Constants
//!
//! Byte values for the NEO 2.x virtual machine instructions emitted by the
//! script encoder. Each named opcode maps to exactly one byte; the only
//! shared bytes are the documented aliases (PUSHF/PUSH0 and PUSHT/PUSH1).

// ============================================================================
// PUSH DATA OPCODES (0x01 - 0x4e)
// ============================================================================

/// PUSHBYTES1 - The byte itself is the operand length; pushes 1 byte
pub const PUSHBYTES1: u8 = 0x01;

/// PUSHBYTES75 - Largest inline-length push; pushes 75 bytes
pub const PUSHBYTES75: u8 = 0x4b;

/// PUSHDATA1 - Next byte is the operand length
pub const PUSHDATA1: u8 = 0x4c;

/// PUSHDATA2 - Next 2 bytes (little-endian) are the operand length
pub const PUSHDATA2: u8 = 0x4d;

/// PUSHDATA4 - Next 4 bytes (little-endian) are the operand length
pub const PUSHDATA4: u8 = 0x4e;

// ============================================================================
// PUSH VALUE OPCODES (0x00, 0x4f - 0x60)
// ============================================================================

/// PUSH0 / PUSHF - Push an empty byte array (boolean false)
pub const PUSH0: u8 = 0x00;
pub const PUSHF: u8 = 0x00;

/// PUSHM1 - Push the integer -1
pub const PUSHM1: u8 = 0x4f;

/// PUSH1 / PUSHT - Push the integer 1 (boolean true)
pub const PUSH1: u8 = 0x51;
pub const PUSHT: u8 = 0x51;

/// PUSH2 - Push the integer 2
pub const PUSH2: u8 = 0x52;

/// PUSH3 - Push the integer 3
pub const PUSH3: u8 = 0x53;

/// PUSH4 - Push the integer 4
pub const PUSH4: u8 = 0x54;

/// PUSH5 - Push the integer 5
pub const PUSH5: u8 = 0x55;

/// PUSH6 - Push the integer 6
pub const PUSH6: u8 = 0x56;

/// PUSH7 - Push the integer 7
pub const PUSH7: u8 = 0x57;

/// PUSH8 - Push the integer 8
pub const PUSH8: u8 = 0x58;

/// PUSH9 - Push the integer 9
pub const PUSH9: u8 = 0x59;

/// PUSH10 - Push the integer 10
pub const PUSH10: u8 = 0x5a;

/// PUSH11 - Push the integer 11
pub const PUSH11: u8 = 0x5b;

/// PUSH12 - Push the integer 12
pub const PUSH12: u8 = 0x5c;

/// PUSH13 - Push the integer 13
pub const PUSH13: u8 = 0x5d;

/// PUSH14 - Push the integer 14
pub const PUSH14: u8 = 0x5e;

/// PUSH15 - Push the integer 15
pub const PUSH15: u8 = 0x5f;

/// PUSH16 - Push the integer 16
pub const PUSH16: u8 = 0x60;

// ============================================================================
// CONTROL FLOW OPCODES (0x61 - 0x69)
// ============================================================================

/// NOP - No operation
pub const NOP: u8 = 0x61;

/// JMP - Unconditional jump, 2-byte signed offset operand
pub const JMP: u8 = 0x62;

/// JMPIF - Jump if top of stack is true
pub const JMPIF: u8 = 0x63;

/// JMPIFNOT - Jump if top of stack is false
pub const JMPIFNOT: u8 = 0x64;

/// CALL - Call into the current script, 2-byte offset operand
pub const CALL: u8 = 0x65;

/// RET - Return from the current script
pub const RET: u8 = 0x66;

/// APPCALL - Call another contract, 20-byte script hash operand
pub const APPCALL: u8 = 0x67;

/// SYSCALL - Invoke an interop service, length-prefixed name operand
pub const SYSCALL: u8 = 0x68;

/// TAILCALL - Call another contract without returning
pub const TAILCALL: u8 = 0x69;

// ============================================================================
// STACK OPERATIONS (0x74 - 0x7d)
// ============================================================================

/// DEPTH - Push the stack item count
pub const DEPTH: u8 = 0x74;

/// DROP - Remove the top stack item
pub const DROP: u8 = 0x75;

/// DUP - Duplicate the top stack item
pub const DUP: u8 = 0x76;

/// SWAP - Exchange the top two stack items
pub const SWAP: u8 = 0x7c;

// ============================================================================
// CRYPTO OPCODES (0xa7 - 0xae)
// ============================================================================

/// SHA256 - Replace the top stack item with its SHA-256 hash
pub const SHA256: u8 = 0xa8;

/// HASH160 - Replace the top stack item with RIPEMD-160 of its SHA-256 hash
pub const HASH160: u8 = 0xa9;

/// HASH256 - Replace the top stack item with its double SHA-256 hash
pub const HASH256: u8 = 0xaa;

/// CHECKSIG - Verify a signature against a public key and the signed payload
pub const CHECKSIG: u8 = 0xac;

/// VERIFY - Fault unless the top stack item is true
pub const VERIFY: u8 = 0xad;

/// CHECKMULTISIG - Verify m of n signatures against n public keys
pub const CHECKMULTISIG: u8 = 0xae;

// ============================================================================
// ARRAY OPCODES (0xc0 - 0xc5)
// ============================================================================

/// ARRAYSIZE - Push the length of the top array or byte array
pub const ARRAYSIZE: u8 = 0xc0;

/// PACK - Pop n then n items, push them as one array
pub const PACK: u8 = 0xc1;

/// UNPACK - Pop an array, push its items then its length
pub const UNPACK: u8 = 0xc2;

/// NEWARRAY - Pop n, push a new array of n null items
pub const NEWARRAY: u8 = 0xc5;

#[cfg(test)]
mod tests {
    use super::*;

    /// Every named opcode except the two documented aliases.
    const ALL_OPCODES: &[(&str, u8)] = &[
        ("PUSHBYTES1", PUSHBYTES1),
        ("PUSHBYTES75", PUSHBYTES75),
        ("PUSHDATA1", PUSHDATA1),
        ("PUSHDATA2", PUSHDATA2),
        ("PUSHDATA4", PUSHDATA4),
        ("PUSH0", PUSH0),
        ("PUSHM1", PUSHM1),
        ("PUSH1", PUSH1),
        ("PUSH2", PUSH2),
        ("PUSH3", PUSH3),
        ("PUSH4", PUSH4),
        ("PUSH5", PUSH5),
        ("PUSH6", PUSH6),
        ("PUSH7", PUSH7),
        ("PUSH8", PUSH8),
        ("PUSH9", PUSH9),
        ("PUSH10", PUSH10),
        ("PUSH11", PUSH11),
        ("PUSH12", PUSH12),
        ("PUSH13", PUSH13),
        ("PUSH14", PUSH14),
        ("PUSH15", PUSH15),
        ("PUSH16", PUSH16),
        ("NOP", NOP),
        ("JMP", JMP),
        ("JMPIF", JMPIF),
        ("JMPIFNOT", JMPIFNOT),
        ("CALL", CALL),
        ("RET", RET),
        ("APPCALL", APPCALL),
        ("SYSCALL", SYSCALL),
        ("TAILCALL", TAILCALL),
        ("DEPTH", DEPTH),
        ("DROP", DROP),
        ("DUP", DUP),
        ("SWAP", SWAP),
        ("SHA256", SHA256),
        ("HASH160", HASH160),
        ("HASH256", HASH256),
        ("CHECKSIG", CHECKSIG),
        ("VERIFY", VERIFY),
        ("CHECKMULTISIG", CHECKMULTISIG),
        ("ARRAYSIZE", ARRAYSIZE),
        ("PACK", PACK),
        ("UNPACK", UNPACK),
        ("NEWARRAY", NEWARRAY),
    ];

    #[test]
    fn test_opcode_bytes_unique() {
        let mut values: Vec<u8> = ALL_OPCODES.iter().map(|(_, v)| *v).collect();
        values.sort_unstable();
        for pair in values.windows(2) {
            assert_ne!(pair[0], pair[1], "two opcodes share byte {:#04x}", pair[0]);
        }
    }

    #[test]
    fn test_aliases_share_bytes() {
        assert_eq!(PUSHF, PUSH0);
        assert_eq!(PUSHT, PUSH1);
    }

    #[test]
    fn test_push_value_run_is_contiguous() {
        assert_eq!(PUSH16 - PUSH1, 15);
        assert_eq!(PUSHBYTES75 - PUSHBYTES1, 74);
    }
}
