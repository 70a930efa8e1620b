// src/miner/algorithm/sha256.rs
//! SHA-256 block digest

use crate::miner::algorithm::{Algorithm, Digest};
use sha2::{Digest as _, Sha256};

/// SHA-256 over `input ‖ nonce` (nonce as 8 little-endian bytes)
///
/// Stateless; a single instance is shared by every worker.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Algo;

impl Sha256Algo {
    /// Creates a new SHA-256 algorithm instance
    pub fn new() -> Self {
        Sha256Algo
    }
}

impl Algorithm for Sha256Algo {
    fn hash(&self, input: &[u8], nonce: u64) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(input);
        hasher.update(nonce.to_le_bytes());
        hasher.finalize().into()
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}

/// Plain SHA-256 of a byte string
pub fn sha256(data: &[u8]) -> Digest {
    Sha256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            sha256(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn hash_appends_little_endian_nonce() {
        let algo = Sha256Algo::new();
        let input = b"prefix";
        let nonce = 0x0102_0304_0506_0708u64;

        let mut data = input.to_vec();
        data.extend_from_slice(&nonce.to_le_bytes());

        assert_eq!(algo.hash(input, nonce), sha256(&data));
    }

    #[test]
    fn hash_is_deterministic_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let algo = Arc::new(Sha256Algo::new());
        let expected = algo.hash(b"block", 42);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let algo = algo.clone();
                thread::spawn(move || algo.hash(b"block", 42))
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().expect("hashing thread panicked"), expected);
        }
    }

    #[test]
    fn nonce_changes_digest() {
        let algo = Sha256Algo::new();
        assert_ne!(algo.hash(b"block", 0), algo.hash(b"block", 1));
    }
}
