//! NEO VM script construction
//!
//! The script builder appends opcodes and operands to an exclusively-owned
//! byte buffer; standalone constructors assemble the witness, verification,
//! and contract-call scripts used by transactions. All emission is pure
//! appending with no opcode/operand validation.

use crate::constants::{COMPRESSED_PUBKEY_LEN, MAX_MULTISIG_KEYS};
use crate::error::{Result, TransactionError};
use crate::keypair::KeyPair;
use crate::opcode::*;
use crate::types::{reversed, ByteString, ScriptHash, Witness};

/// Incremental builder for NEO VM bytecode.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    buf: Vec<u8>,
}

impl ScriptBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// The script built so far, as a read-only byte sequence.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the builder and return the finished script.
    pub fn into_bytes(self) -> ByteString {
        self.buf
    }

    /// Current script length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append a bare opcode byte.
    pub fn emit(&mut self, op: u8) {
        self.buf.push(op);
    }

    /// Append an opcode byte followed by raw argument bytes.
    ///
    /// The caller guarantees the arguments are already sized and encoded for
    /// the opcode.
    pub fn emit_with_args(&mut self, op: u8, args: &[u8]) {
        self.buf.push(op);
        self.buf.extend_from_slice(args);
    }

    /// Append a contract call: APPCALL followed by the 20-byte script hash in
    /// reversed (wire) byte order.
    pub fn emit_app_call(&mut self, script_hash: &ScriptHash) {
        self.emit(APPCALL);
        self.buf.extend_from_slice(&reversed(script_hash));
    }

    /// Append a boolean push: PUSHT or PUSHF, no operand bytes.
    pub fn emit_push_bool(&mut self, arg: bool) {
        if arg {
            self.emit(PUSHT);
        } else {
            self.emit(PUSHF);
        }
    }

    /// Append a byte-array push using the length-dependent encoding:
    ///
    /// 1. len ≤ 75: the length byte itself, then the raw bytes
    /// 2. len ≤ 255: PUSHDATA1, a length byte, then the raw bytes
    /// 3. len ≤ 65535: PUSHDATA2, the length as little-endian u16, then the raw bytes
    /// 4. otherwise: PUSHDATA4, the length as little-endian u32, then the raw bytes
    pub fn emit_push_bytes(&mut self, arg: &[u8]) {
        if arg.len() <= PUSHBYTES75 as usize {
            self.buf.push(arg.len() as u8);
            self.buf.extend_from_slice(arg);
        } else if arg.len() <= 0xff {
            self.emit(PUSHDATA1);
            self.buf.push(arg.len() as u8);
            self.buf.extend_from_slice(arg);
        } else if arg.len() <= 0xffff {
            self.emit(PUSHDATA2);
            self.buf.extend_from_slice(&(arg.len() as u16).to_le_bytes());
            self.buf.extend_from_slice(arg);
        } else {
            self.emit(PUSHDATA4);
            self.buf.extend_from_slice(&(arg.len() as u32).to_le_bytes());
            self.buf.extend_from_slice(arg);
        }
    }

    /// Append a signed-integer push using the value-dependent encoding:
    ///
    /// 1. -1: PUSHM1
    /// 2. 0: PUSH0
    /// 3. 1..=16: the dedicated single-byte opcode PUSH1 + (n - 1)
    /// 4. otherwise: the minimal big-endian magnitude bytes, reversed to
    ///    little-endian and pushed as a byte array
    pub fn emit_push_int(&mut self, arg: i64) {
        if arg == -1 {
            self.emit(PUSHM1);
            return;
        }
        if arg == 0 {
            self.emit(PUSH0);
            return;
        }
        if arg > 0 && arg <= 16 {
            self.emit(PUSH1 - 1 + arg as u8);
            return;
        }
        let magnitude = arg.unsigned_abs();
        let len = (64 - magnitude.leading_zeros() as usize + 7) / 8;
        let le = magnitude.to_le_bytes();
        self.emit_push_bytes(&le[..len]);
    }

    /// Append a string push: a byte-array push over the UTF-8 bytes.
    pub fn emit_push_string(&mut self, arg: &str) {
        self.emit_push_bytes(arg.as_bytes());
    }
}

/// Parameter for a contract method invocation script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptParam {
    Bool(bool),
    Int(i64),
    Bytes(ByteString),
    String(String),
}

impl ScriptParam {
    fn emit(&self, sb: &mut ScriptBuilder) {
        match self {
            ScriptParam::Bool(b) => sb.emit_push_bool(*b),
            ScriptParam::Int(n) => sb.emit_push_int(*n),
            ScriptParam::Bytes(data) => sb.emit_push_bytes(data),
            ScriptParam::String(s) => sb.emit_push_string(s),
        }
    }
}

/// Build the verification script of a single-signature account:
/// a push of the compressed public key followed by CHECKSIG.
///
/// Hashing this script with RIPEMD-160 over SHA-256 yields the account's
/// script hash, so this is also the standalone path from a public key to an
/// address without producing any signature.
pub fn build_verify_script(pubkey: &[u8]) -> ByteString {
    let mut sb = ScriptBuilder::new();
    sb.emit_push_bytes(pubkey);
    sb.emit(CHECKSIG);
    sb.into_bytes()
}

/// Build the verification script of an m-of-n multi-signature account:
/// a push of m, a push per public key in the order given, a push of n,
/// then CHECKMULTISIG.
pub fn build_multisig_verify_script(
    m: usize,
    pubkeys: &[[u8; COMPRESSED_PUBKEY_LEN]],
) -> Result<ByteString> {
    let n = pubkeys.len();
    if m == 0 || m > n {
        return Err(TransactionError::Decoding(format!(
            "invalid multisig threshold {} of {}",
            m, n
        )));
    }
    if n > MAX_MULTISIG_KEYS {
        return Err(TransactionError::Decoding(format!(
            "too many multisig keys: {}",
            n
        )));
    }
    let mut sb = ScriptBuilder::new();
    sb.emit_push_int(m as i64);
    for pubkey in pubkeys {
        sb.emit_push_bytes(pubkey);
    }
    sb.emit_push_int(n as i64);
    sb.emit(CHECKMULTISIG);
    Ok(sb.into_bytes())
}

/// Build an invocation script that calls `method` on the contract at
/// `script_hash`.
///
/// Parameters are pushed in reverse order, packed into one array, followed
/// by the method name and the app call. The contract pops the method name
/// and the packed argument array in that order.
pub fn build_call_method_script(
    script_hash: &ScriptHash,
    method: &str,
    params: &[ScriptParam],
) -> ByteString {
    let mut sb = ScriptBuilder::new();
    for param in params.iter().rev() {
        param.emit(&mut sb);
    }
    sb.emit_push_int(params.len() as i64);
    sb.emit(PACK);
    sb.emit_push_string(method);
    sb.emit_app_call(script_hash);
    sb.into_bytes()
}

/// Build the witness for one signer over a fixed signing payload:
///
/// 1. sign the SHA-256 digest of the payload with the key pair
/// 2. invocation script = a single push of the signature
/// 3. verification script = a push of the compressed public key, then CHECKSIG
pub fn build_witness(keypair: &KeyPair, payload: &[u8]) -> Result<Witness> {
    let signature = keypair.sign(payload)?;

    let mut invocation = ScriptBuilder::new();
    invocation.emit_push_bytes(&signature);

    Ok(Witness {
        invocation: invocation.into_bytes(),
        verification: build_verify_script(&keypair.public_key_bytes()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode the length field of a byte-array push. Returns the declared
    /// operand length and the number of header bytes consumed.
    fn decode_push_len(script: &[u8]) -> (usize, usize) {
        match script[0] {
            op if op <= PUSHBYTES75 => (op as usize, 1),
            op if op == PUSHDATA1 => (script[1] as usize, 2),
            op if op == PUSHDATA2 => {
                (u16::from_le_bytes([script[1], script[2]]) as usize, 3)
            }
            op if op == PUSHDATA4 => (
                u32::from_le_bytes([script[1], script[2], script[3], script[4]]) as usize,
                5,
            ),
            op => panic!("not a push opcode: {:#04x}", op),
        }
    }

    /// Decode an integer push the way the VM does: dedicated opcodes for the
    /// small range, otherwise the pushed bytes as a signed little-endian
    /// integer.
    fn decode_push_int(script: &[u8]) -> i64 {
        match script[0] {
            op if op == PUSHM1 => -1,
            op if op == PUSH0 => 0,
            op if (PUSH1..=PUSH16).contains(&op) => (op - PUSH1 + 1) as i64,
            _ => {
                let (len, header) = decode_push_len(script);
                let bytes = &script[header..header + len];
                let mut buf = if bytes.last().map_or(false, |b| b & 0x80 != 0) {
                    [0xffu8; 8]
                } else {
                    [0u8; 8]
                };
                buf[..bytes.len()].copy_from_slice(bytes);
                i64::from_le_bytes(buf)
            }
        }
    }

    #[test]
    fn test_emit_appends_single_byte() {
        let mut sb = ScriptBuilder::new();
        sb.emit(NOP);
        sb.emit(RET);
        assert_eq!(sb.bytes(), &[NOP, RET]);
    }

    #[test]
    fn test_emit_with_args() {
        let mut sb = ScriptBuilder::new();
        sb.emit_with_args(JMP, &[0x03, 0x00]);
        assert_eq!(sb.bytes(), &[JMP, 0x03, 0x00]);
    }

    #[test]
    fn test_app_call_reverses_script_hash() {
        let mut hash = [0u8; 20];
        for (i, byte) in hash.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let mut sb = ScriptBuilder::new();
        sb.emit_app_call(&hash);

        let script = sb.into_bytes();
        assert_eq!(script.len(), 21);
        assert_eq!(script[0], APPCALL);
        assert_eq!(script[1], 19);
        assert_eq!(script[20], 0);
    }

    #[test]
    fn test_push_bool() {
        let mut sb = ScriptBuilder::new();
        sb.emit_push_bool(true);
        sb.emit_push_bool(false);
        assert_eq!(sb.bytes(), &[PUSHT, PUSHF]);
    }

    #[test]
    fn test_push_bytes_tier_boundaries() {
        // (length, expected header bytes)
        let cases: &[(usize, &[u8])] = &[
            (0, &[0x00]),
            (75, &[0x4b]),
            (76, &[PUSHDATA1, 76]),
            (255, &[PUSHDATA1, 255]),
            (256, &[PUSHDATA2, 0x00, 0x01]),
            (65535, &[PUSHDATA2, 0xff, 0xff]),
            (65536, &[PUSHDATA4, 0x00, 0x00, 0x01, 0x00]),
        ];
        for (len, header) in cases {
            let data = vec![0xabu8; *len];
            let mut sb = ScriptBuilder::new();
            sb.emit_push_bytes(&data);

            let script = sb.into_bytes();
            assert_eq!(&script[..header.len()], *header, "header for length {}", len);
            assert_eq!(script.len(), header.len() + len);

            let (decoded_len, header_len) = decode_push_len(&script);
            assert_eq!(decoded_len, *len);
            assert_eq!(header_len, header.len());
            assert_eq!(&script[header_len..], &data[..]);
        }
    }

    #[test]
    fn test_push_int_dedicated_opcodes() {
        let cases: &[(i64, u8)] = &[(-1, PUSHM1), (0, PUSH0), (1, PUSH1), (7, PUSH7), (16, PUSH16)];
        for (value, op) in cases {
            let mut sb = ScriptBuilder::new();
            sb.emit_push_int(*value);
            assert_eq!(sb.bytes(), &[*op], "opcode for {}", value);
        }
    }

    #[test]
    fn test_push_int_byte_array_form() {
        // Values outside the dedicated range become a minimal magnitude push,
        // little-endian.
        let cases: &[(i64, &[u8])] = &[
            (17, &[0x01, 0x11]),
            (127, &[0x01, 0x7f]),
            (-128, &[0x01, 0x80]),
            (256, &[0x02, 0x00, 0x01]),
            (65536, &[0x03, 0x00, 0x00, 0x01]),
        ];
        for (value, expected) in cases {
            let mut sb = ScriptBuilder::new();
            sb.emit_push_int(*value);
            assert_eq!(sb.bytes(), *expected, "encoding for {}", value);
        }
    }

    #[test]
    fn test_push_int_round_trips_through_decoder() {
        for value in [-1i64, 0, 1, 16, 17, 127, -128] {
            let mut sb = ScriptBuilder::new();
            sb.emit_push_int(value);
            assert_eq!(decode_push_int(sb.bytes()), value, "round trip of {}", value);
        }
    }

    #[test]
    fn test_push_string_matches_push_bytes() {
        let mut a = ScriptBuilder::new();
        a.emit_push_string("transfer");
        let mut b = ScriptBuilder::new();
        b.emit_push_bytes(b"transfer");
        assert_eq!(a.bytes(), b.bytes());
    }

    #[test]
    fn test_builder_bytes_does_not_finalize() {
        let mut sb = ScriptBuilder::new();
        sb.emit_push_int(1);
        assert_eq!(sb.bytes().len(), 1);
        sb.emit(CHECKSIG);
        assert_eq!(sb.bytes(), &[PUSH1, CHECKSIG]);
    }

    #[test]
    fn test_verify_script_shape() {
        let pubkey = [0x02u8; 33];
        let script = build_verify_script(&pubkey);
        assert_eq!(script.len(), 35);
        assert_eq!(script[0], 33);
        assert_eq!(&script[1..34], &pubkey);
        assert_eq!(script[34], CHECKSIG);
    }

    #[test]
    fn test_multisig_verify_script_shape() {
        let keys = [[0x02u8; 33], [0x03u8; 33], [0x02u8; 33]];
        let script = build_multisig_verify_script(2, &keys).unwrap();
        assert_eq!(script[0], PUSH2);
        assert_eq!(script[script.len() - 2], PUSH3);
        assert_eq!(script[script.len() - 1], CHECKMULTISIG);
        // three key pushes of 34 bytes each between the two thresholds
        assert_eq!(script.len(), 1 + 3 * 34 + 1 + 1);
    }

    #[test]
    fn test_multisig_rejects_bad_thresholds() {
        let keys = [[0x02u8; 33]];
        assert!(build_multisig_verify_script(0, &keys).is_err());
        assert!(build_multisig_verify_script(2, &keys).is_err());
    }

    #[test]
    fn test_call_method_script_layout() {
        let contract = [0x11u8; 20];
        let params = vec![ScriptParam::Int(2), ScriptParam::Bool(true)];
        let script = build_call_method_script(&contract, "transfer", &params);

        // parameters in reverse order, then count + PACK
        assert_eq!(script[0], PUSHT);
        assert_eq!(script[1], PUSH2);
        assert_eq!(script[2], PUSH2);
        assert_eq!(script[3], PACK);
        // method name push
        assert_eq!(script[4] as usize, "transfer".len());
        assert_eq!(&script[5..13], b"transfer");
        // app call with reversed hash
        assert_eq!(script[13], APPCALL);
        assert_eq!(&script[14..], &reversed(&contract)[..]);
    }

    #[test]
    fn test_call_method_script_empty_params() {
        let contract = [0x22u8; 20];
        let script = build_call_method_script(&contract, "totalSupply", &[]);
        assert_eq!(script[0], PUSH0);
        assert_eq!(script[1], PACK);
    }

    #[test]
    fn test_witness_shape_and_determinism() {
        let keypair = KeyPair::generate();
        let payload = b"fixed unsigned transaction bytes";

        let w1 = build_witness(&keypair, payload).unwrap();
        let w2 = build_witness(&keypair, payload).unwrap();

        // push-length byte plus the 64-byte signature
        assert_eq!(w1.invocation.len(), 65);
        assert_eq!(w1.invocation[0], 64);
        assert_eq!(w1.verification.len(), 35);
        assert_eq!(*w1.verification.last().unwrap(), CHECKSIG);

        // deterministic ECDSA: identical scripts across repeated calls
        assert_eq!(w1, w2);
        assert_eq!(
            w1.verification,
            build_verify_script(&keypair.public_key_bytes())
        );
    }
}
