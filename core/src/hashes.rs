// Hash helpers

use sha2::{Digest, Sha256};

/// A 256-bit hash in internal byte order, as produced by the hash function.
///
/// Block explorers and the literals in this crate display hashes reversed. Use
/// [`hash256_from_display`] and [`hash256_to_hex`] to cross between the two.
pub type Hash256 = [u8; 32];

pub fn calculate_double_sha256(input: &[u8]) -> Hash256 {
    let mut hasher = Sha256::default();
    hasher.update(input);
    let result = hasher.finalize_reset();
    hasher.update(result);
    hasher.finalize().into()
}

/// Double-SHA256 of two nodes concatenated, as used by the Bitcoin merkle tree.
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(left);
    preimage[32..].copy_from_slice(right);
    calculate_double_sha256(&preimage)
}

/// Converts a hash given in display order into internal byte order.
///
/// This is a `const fn` so that hash literals can be written as
/// `hash256_from_display(hex!("0000..."))` in constant position.
pub const fn hash256_from_display(display: [u8; 32]) -> Hash256 {
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = display[31 - i];
        i += 1;
    }
    out
}

/// Hex string of a hash in display order.
pub fn hash256_to_hex(hash: &Hash256) -> String {
    let mut display = *hash;
    display.reverse();
    hex::encode(display)
}
