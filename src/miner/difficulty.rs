// src/miner/difficulty.rs
//! Difficulty target
//!
//! A digest meets the target when it starts with at least `bits` zero bits.
//! The default of 24 bits is three leading zero bytes.

use crate::miner::algorithm::Digest;
use crate::utils::error::MinerError;
use std::fmt;

/// Default number of leading zero bits required of a block digest
pub const DEFAULT_DIFFICULTY_BITS: u32 = 24;

/// Maximum meaningful target for a 32-byte digest
pub const MAX_DIFFICULTY_BITS: u32 = 256;

/// Leading-zero-bit difficulty target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    bits: u32,
}

impl Difficulty {
    /// Creates a target requiring `bits` leading zero bits
    ///
    /// # Errors
    /// Returns `MinerError::ConfigError` if `bits` exceeds 256.
    pub fn new(bits: u32) -> Result<Self, MinerError> {
        if bits > MAX_DIFFICULTY_BITS {
            return Err(MinerError::ConfigError(format!(
                "difficulty of {} bits exceeds the {}-bit digest",
                bits, MAX_DIFFICULTY_BITS
            )));
        }
        Ok(Difficulty { bits })
    }

    /// Number of required leading zero bits
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Check whether a digest satisfies this target
    #[inline(always)]
    pub fn is_met_by(&self, digest: &Digest) -> bool {
        let full_bytes = (self.bits / 8) as usize;
        if digest[..full_bytes].iter().any(|b| *b != 0) {
            return false;
        }

        let rem = self.bits % 8;
        rem == 0 || digest[full_bytes].leading_zeros() >= rem
    }

    /// Estimate attempts needed (average case)
    pub fn estimated_attempts(&self) -> f64 {
        2f64.powi(self.bits as i32)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty {
            bits: DEFAULT_DIFFICULTY_BITS,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leading zero bits", self.bits)
    }
}

/// Count the leading zero bits of a digest
pub fn leading_zero_bits(digest: &Digest) -> u32 {
    let mut total = 0u32;
    for b in digest {
        if *b == 0 {
            total += 8;
        } else {
            total += b.leading_zeros();
            break;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_three_zero_bytes() {
        let target = Difficulty::default();
        assert_eq!(target.bits(), 24);

        let mut d = [0xffu8; 32];
        d[..3].fill(0);
        assert!(target.is_met_by(&d));

        d[2] = 0x01;
        assert!(!target.is_met_by(&d));
    }

    #[test]
    fn partial_byte_targets() {
        let target = Difficulty::new(12).unwrap();
        let mut d = [0xffu8; 32];
        d[0] = 0x00;
        d[1] = 0x0f;
        assert!(target.is_met_by(&d));
        d[1] = 0x10;
        assert!(!target.is_met_by(&d));
    }

    #[test]
    fn zero_and_full_targets() {
        let any = Difficulty::new(0).unwrap();
        assert!(any.is_met_by(&[0xff; 32]));

        let all = Difficulty::new(256).unwrap();
        assert!(all.is_met_by(&[0; 32]));
        let mut d = [0u8; 32];
        d[31] = 1;
        assert!(!all.is_met_by(&d));
    }

    #[test]
    fn expected_attempts_double_per_bit() {
        assert_eq!(Difficulty::new(0).unwrap().estimated_attempts(), 1.0);
        assert_eq!(Difficulty::new(8).unwrap().estimated_attempts(), 256.0);
        assert_eq!(Difficulty::default().estimated_attempts(), 16_777_216.0);
    }

    #[test]
    fn rejects_targets_beyond_digest() {
        assert!(matches!(
            Difficulty::new(257),
            Err(MinerError::ConfigError(_))
        ));
    }

    #[test]
    fn leading_zero_bits_examples() {
        let mut h = [0u8; 32];
        assert_eq!(leading_zero_bits(&h), 256);
        h[0] = 0x0f;
        assert_eq!(leading_zero_bits(&h), 4);
        h = [0u8; 32];
        h[1] = 0x80;
        assert_eq!(leading_zero_bits(&h), 8);
        h[1] = 0x40;
        assert_eq!(leading_zero_bits(&h), 9);
    }

    #[test]
    fn predicate_agrees_with_bit_count() {
        let target = Difficulty::new(9).unwrap();
        for byte in 0..=255u8 {
            let mut d = [0u8; 32];
            d[1] = byte;
            d[2] = 0xff;
            assert_eq!(target.is_met_by(&d), leading_zero_bits(&d) >= 9);
        }
    }
}
