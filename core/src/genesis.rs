// Genesis block construction and verification
// ===========================================
//
// Every network's genesis block is assembled from a handful of literals and then
// checked against two independently recorded values: the block hash and the merkle
// root. Any accidental edit to a genesis-affecting literal shows up here as a
// mismatch instead of as a silent chain split.

use anyhow::{bail, Context, Result};
use bitcoin::Amount;
use tracing::debug;

use crate::block::{BlockHeader, GenesisBlock, HeaderHasher};
use crate::hashes::{hash256_to_hex, Hash256};
use crate::transaction::CoinbaseTransaction;

/// Literal inputs of a genesis block.
#[derive(Clone, Copy, Debug)]
pub struct GenesisSpec<'a> {
    /// Human-readable message embedded in the coinbase scriptSig.
    pub timestamp_message: &'a str,
    /// Public key paid by the coinbase output.
    pub output_pubkey: &'a [u8],
    pub reward: Amount,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Assembles a genesis block from its literal fields.
///
/// The merkle root is derived from the coinbase; the previous-block hash is zero.
pub fn create_genesis_block(spec: &GenesisSpec<'_>) -> Result<GenesisBlock> {
    let coinbase = CoinbaseTransaction::new_genesis(
        spec.timestamp_message.as_bytes(),
        spec.output_pubkey,
        spec.reward,
    )
    .context("failed to build genesis coinbase")?;

    let mut genesis = GenesisBlock {
        header: BlockHeader {
            version: spec.version,
            prev_block_hash: [0u8; 32],
            merkle_root: [0u8; 32],
            time: spec.time,
            bits: spec.bits,
            nonce: spec.nonce,
        },
        transactions: vec![coinbase],
    };
    genesis.header.merkle_root = genesis.compute_merkle_root();
    Ok(genesis)
}

/// Checks a genesis block against its recorded hash and merkle root.
///
/// The merkle root is recomputed from the transactions rather than trusted from
/// the header. On success the computed block hash is returned.
pub fn check_genesis(
    genesis: &GenesisBlock,
    hasher: &dyn HeaderHasher,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) -> Result<Hash256> {
    if genesis.header.prev_block_hash != [0u8; 32] {
        bail!("genesis block must not have a predecessor");
    }

    let merkle_root = genesis.compute_merkle_root();
    if merkle_root != genesis.header.merkle_root {
        bail!(
            "genesis header merkle root {} does not commit to its transactions ({})",
            hash256_to_hex(&genesis.header.merkle_root),
            hash256_to_hex(&merkle_root)
        );
    }
    if merkle_root != *expected_merkle_root {
        bail!(
            "genesis merkle root mismatch: computed {}, expected {}",
            hash256_to_hex(&merkle_root),
            hash256_to_hex(expected_merkle_root)
        );
    }

    let hash = genesis.header.hash_with(hasher);
    if hash != *expected_hash {
        bail!(
            "genesis hash mismatch: computed {}, expected {}",
            hash256_to_hex(&hash),
            hash256_to_hex(expected_hash)
        );
    }

    debug!(hash = %hash256_to_hex(&hash), "Genesis block verified");
    Ok(hash)
}
