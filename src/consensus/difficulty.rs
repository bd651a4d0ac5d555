//! Compact difficulty encoding
//!
//! Targets are 256-bit unsigned integers. Headers carry them in the 32-bit
//! "compact" form: one size byte followed by a 23-bit mantissa and a sign bit.

use primitive_types::U256;
use crate::crypto::Hash;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Convert a 256-bit target to compact form
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;

    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3))).low_u32()
    };

    // The mantissa is signed; move a set high bit into the next byte
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | ((size as u32) << 24)
}

/// Convert compact form to a 256-bit target
///
/// Returns `None` for negative or overflowing encodings.
pub fn compact_to_target(compact: u32) -> Option<U256> {
    let size = (compact >> 24) as usize;
    let mantissa = compact & MANTISSA_MASK;

    if mantissa != 0 && compact & SIGN_BIT != 0 {
        return None;
    }

    if size <= 3 {
        return Some(U256::from(mantissa >> (8 * (3 - size))));
    }

    let overflow = mantissa != 0
        && (size > 34 || (mantissa > 0xff && size > 33) || (mantissa > 0xffff && size > 32));
    if overflow {
        return None;
    }

    Some(U256::from(mantissa) << (8 * (size - 3)))
}

/// Interpret a hash as a little-endian 256-bit integer
pub fn hash_to_u256(hash: &Hash) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

/// Check a header hash against a compact target
pub fn hash_meets_target(hash: &Hash, bits: u32) -> bool {
    match compact_to_target(bits) {
        Some(target) if !target.is_zero() => hash_to_u256(hash) <= target,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitcoin_minimum_difficulty() {
        // Bitcoin's genesis bits
        let target = compact_to_target(0x1d00ffff).unwrap();
        assert_eq!(target, U256::from(0xffffu64) << 208);
        assert_eq!(target_to_compact(target), 0x1d00ffff);
    }

    #[test]
    fn test_limit_shift_18() {
        assert_eq!(target_to_compact(U256::MAX >> 18), 0x1e3fffff);
    }

    #[test]
    fn test_limit_shift_16_moves_sign_bit() {
        assert_eq!(target_to_compact(U256::MAX >> 16), 0x1f00ffff);
    }

    #[test]
    fn test_small_targets() {
        assert_eq!(target_to_compact(U256::zero()), 0);
        assert_eq!(target_to_compact(U256::from(0x12u64)), 0x01120000);
        assert_eq!(compact_to_target(0x01120000), Some(U256::from(0x12u64)));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(compact_to_target(0x01fedcba), None);
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(compact_to_target(0xff123456), None);
    }

    #[test]
    fn test_hash_meets_target() {
        let easy = Hash::zero();
        assert!(hash_meets_target(&easy, 0x1d00ffff));

        let hard = Hash([0xff; 32]);
        assert!(!hash_meets_target(&hard, 0x1d00ffff));
        assert!(!hash_meets_target(&easy, 0));
    }
}
