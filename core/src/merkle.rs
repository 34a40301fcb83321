use crate::hashes::{hash_pair, Hash256};

/// Bitcoin-style merkle root over transaction ids.
///
/// Odd levels duplicate their last node. A single leaf is its own root, which is
/// the case for every genesis block. An empty list has the all-zero root.
pub fn merkle_root(mut hashes: Vec<Hash256>) -> Hash256 {
    if hashes.is_empty() {
        return [0u8; 32];
    }
    while hashes.len() > 1 {
        hashes = next_level(&hashes);
    }
    hashes[0]
}

fn next_level(level: &[Hash256]) -> Vec<Hash256> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => hash_pair(left, right),
            [single] => hash_pair(single, single),
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect()
}
