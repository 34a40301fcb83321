use serde::{Deserialize, Serialize};

use crate::constants::BLOCK_HEADER_SIZE;
use crate::hashes::Hash256;
use crate::merkle::merkle_root;
use crate::transaction::CoinbaseTransaction;

/// Computes the identity hash of a serialized block header.
///
/// The proof-of-work hash lives outside this crate; the node hands its
/// implementation in when it builds the registry. The output is in internal
/// byte order, the same order `calculate_double_sha256` returns.
pub trait HeaderHasher {
    fn hash_header(&self, header: &[u8; BLOCK_HEADER_SIZE]) -> Hash256;
}

impl<F> HeaderHasher for F
where
    F: Fn(&[u8; BLOCK_HEADER_SIZE]) -> Hash256,
{
    fn hash_header(&self, header: &[u8; BLOCK_HEADER_SIZE]) -> Hash256 {
        self(header)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Serializes the header into its 80-byte wire layout.
    pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut bytes = [0u8; BLOCK_HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_block_hash);
        bytes[36..68].copy_from_slice(&self.merkle_root);
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    pub fn hash_with(&self, hasher: &dyn HeaderHasher) -> Hash256 {
        hasher.hash_header(&self.to_bytes())
    }
}

/// The first block of a chain. It has no predecessor and a single coinbase.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GenesisBlock {
    pub header: BlockHeader,
    pub transactions: Vec<CoinbaseTransaction>,
}

impl GenesisBlock {
    /// Merkle root over the block's transactions, recomputed from scratch.
    pub fn compute_merkle_root(&self) -> Hash256 {
        merkle_root(self.transactions.iter().map(|tx| tx.txid()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashes::calculate_double_sha256;

    fn sample_header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block_hash: [0u8; 32],
            merkle_root: [0xab; 32],
            time: 0x5d109110,
            bits: 0x1e0ffff0,
            nonce: 0x000d6a77,
        }
    }

    #[test]
    fn test_header_layout() {
        let bytes = sample_header().to_bytes();
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..36], &[0u8; 32]);
        assert_eq!(&bytes[36..68], &[0xab; 32]);
        assert_eq!(&bytes[68..72], &[0x10, 0x91, 0x10, 0x5d]);
        assert_eq!(&bytes[72..76], &[0xf0, 0xff, 0x0f, 0x1e]);
        assert_eq!(&bytes[76..80], &[0x77, 0x6a, 0x0d, 0x00]);
    }

    #[test]
    fn test_closure_acts_as_hasher() {
        let header = sample_header();
        let hasher = |bytes: &[u8; BLOCK_HEADER_SIZE]| calculate_double_sha256(bytes);
        assert_eq!(
            header.hash_with(&hasher),
            calculate_double_sha256(&header.to_bytes())
        );
    }
}
