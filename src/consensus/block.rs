//! Block structure for the Pearl chain
//!
//! Defines the block and 80-byte block header structures.

use serde::Serialize;
use crate::crypto::{compute_merkle_root, double_sha256, Hash};
use crate::validation::Transaction;

/// Serialized size of a block header
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub timestamp: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(
        version: i32,
        prev_hash: Hash,
        merkle_root: Hash,
        timestamp: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut bytes = [0u8; BLOCK_HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_hash.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Calculate the hash of this header
    pub fn hash(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    /// Get the block hash
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Recompute the merkle root over the block's transactions
    pub fn build_merkle_root(&self) -> Hash {
        let txids: Vec<Hash> = self.transactions.iter().map(Transaction::txid).collect();
        compute_merkle_root(&txids)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_header_serialization() {
        let header = BlockHeader::new(1, Hash::zero(), Hash::zero(), 1234567890, 0x1d00ffff, 7);
        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), 4 + 32 + 32 + 4 + 4 + 4);
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[72..76], &0x1d00ffffu32.to_le_bytes());
        assert_eq!(&bytes[76..80], &[7, 0, 0, 0]);
    }

    #[test]
    fn test_genesis_block_detection() {
        let header = BlockHeader::new(1, Hash::zero(), Hash::zero(), 1234567890, 0x1d00ffff, 0);
        let block = Block::new(header, vec![]);
        assert!(block.is_genesis());
        assert_eq!(block.build_merkle_root(), Hash::zero());
    }

    #[test]
    fn test_nonce_changes_hash() {
        let a = BlockHeader::new(1, Hash::zero(), Hash::zero(), 0, 0x1d00ffff, 1);
        let b = BlockHeader::new(1, Hash::zero(), Hash::zero(), 0, 0x1d00ffff, 2);
        assert_ne!(a.hash(), b.hash());
    }
}
