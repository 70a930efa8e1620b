// src/miner/block.rs
//! Block encoding
//!
//! A block is a transaction paired with a proof-of-work nonce. Its byte
//! layout is fixed width so that the digest of a (transaction, nonce) pair is
//! stable across runs and platforms:
//!
//! | field       | bytes | encoding                       |
//! |-------------|-------|--------------------------------|
//! | timestamp   | 8     | little-endian two's complement |
//! | sender      | 64    | UTF-8, zero padded             |
//! | recipient   | 64    | UTF-8, zero padded             |
//! | amount      | 8     | little-endian                  |
//! | nonce       | 8     | little-endian                  |
//!
//! The first four fields form the transaction prefix, which miners encode
//! once per transaction and feed to [`Algorithm::hash`] with each nonce.

use crate::miner::algorithm::{Algorithm, Digest};
use crate::types::{Transaction, USERNAME_LEN};

/// Length of the encoded transaction prefix
pub const PREFIX_LEN: usize = 8 + USERNAME_LEN + USERNAME_LEN + 8;

/// A transaction together with a candidate nonce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The transaction being mined
    pub transaction: Transaction,
    /// Proof-of-work nonce
    pub nonce: u64,
}

impl Block {
    /// Creates a block for the given transaction and nonce
    pub fn new(transaction: Transaction, nonce: u64) -> Self {
        Block { transaction, nonce }
    }

    /// Full byte representation of the block
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = encode_transaction(&self.transaction).to_vec();
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        bytes
    }
}

/// Encodes the transaction prefix of a block
pub fn encode_transaction(tx: &Transaction) -> [u8; PREFIX_LEN] {
    let mut out = [0u8; PREFIX_LEN];
    let (timestamp, rest) = out.split_at_mut(8);
    let (sender, rest) = rest.split_at_mut(USERNAME_LEN);
    let (recipient, amount) = rest.split_at_mut(USERNAME_LEN);

    timestamp.copy_from_slice(&tx.timestamp.to_le_bytes());
    write_padded(sender, &tx.sender);
    write_padded(recipient, &tx.recipient);
    amount.copy_from_slice(&tx.amount.to_le_bytes());
    out
}

// Names are bounded by `Transaction::new`; truncation keeps the last byte zero
// even if a caller built the struct directly.
fn write_padded(field: &mut [u8], name: &str) {
    let len = name.len().min(field.len() - 1);
    field[..len].copy_from_slice(&name.as_bytes()[..len]);
}

/// Computes the digest of a block with the given algorithm
pub fn digest(algorithm: &dyn Algorithm, block: &Block) -> Digest {
    algorithm.hash(&encode_transaction(&block.transaction), block.nonce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::miner::algorithm::sha256::{Sha256Algo, sha256};

    fn tx() -> Transaction {
        Transaction::new(-5, "alice", "bob", 300).unwrap()
    }

    #[test]
    fn layout_is_fixed_width() {
        let bytes = encode_transaction(&tx());
        assert_eq!(bytes.len(), PREFIX_LEN);
        assert_eq!(&bytes[..8], &(-5i64).to_le_bytes());
        assert_eq!(&bytes[8..13], b"alice");
        assert!(bytes[13..8 + USERNAME_LEN].iter().all(|b| *b == 0));
        assert_eq!(&bytes[8 + USERNAME_LEN..8 + USERNAME_LEN + 3], b"bob");
        assert_eq!(&bytes[PREFIX_LEN - 8..], &300u64.to_le_bytes());
    }

    #[test]
    fn block_bytes_end_with_nonce() {
        let block = Block::new(tx(), 9);
        let bytes = block.to_bytes();
        assert_eq!(bytes.len(), PREFIX_LEN + 8);
        assert_eq!(&bytes[PREFIX_LEN..], &9u64.to_le_bytes());
    }

    #[test]
    fn digest_hashes_the_whole_block() {
        let block = Block::new(tx(), 1234);
        assert_eq!(digest(&Sha256Algo::new(), &block), sha256(&block.to_bytes()));
    }

    #[test]
    fn oversized_names_are_truncated() {
        let mut t = tx();
        t.sender = "x".repeat(USERNAME_LEN + 10);
        let bytes = encode_transaction(&t);
        assert_eq!(bytes[8 + USERNAME_LEN - 1], 0);
    }
}
