//! Minimal script builder
//!
//! Only the push operations needed to assemble coinbase scripts.

use serde::Serialize;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Raw script bytes
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Script(#[serde(with = "hex::serde")] Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a bare opcode
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Append a data push using the smallest push opcode that fits
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Append a script number as a data push (minimal little-endian
    /// sign-magnitude encoding)
    pub fn push_int(self, value: i64) -> Self {
        let encoded = encode_script_num(value);
        self.push_slice(&encoded)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn encode_script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // Top bit is the sign; add a byte when it is already taken
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_small_int() {
        let script = Script::new().push_opcode(OP_0).push_int(42);
        assert_eq!(script.as_bytes(), &[0x00, 0x01, 0x2a]);
    }

    #[test]
    fn test_script_num_sign_byte() {
        assert_eq!(encode_script_num(0x80), vec![0x80, 0x00]);
        assert_eq!(encode_script_num(-1), vec![0x81]);
        assert_eq!(encode_script_num(-0x80), vec![0x80, 0x80]);
        assert!(encode_script_num(0).is_empty());
    }

    #[test]
    fn test_push_slice_lengths() {
        let short = Script::new().push_slice(&[7u8; 75]);
        assert_eq!(short.as_bytes()[0], 75);

        let medium = Script::new().push_slice(&[7u8; 76]);
        assert_eq!(&medium.as_bytes()[..2], &[OP_PUSHDATA1, 76]);

        let long = Script::new().push_slice(&[7u8; 300]);
        assert_eq!(&long.as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }
}
