//! Test-only header hasher.

use hex_literal::hex;

use crate::block::HeaderHasher;
use crate::constants::BLOCK_HEADER_SIZE;
use crate::hashes::{calculate_double_sha256, hash256_from_display, Hash256};

/// Serialized genesis headers and their published block hashes (display order).
const PUBLISHED_GENESIS_HEADERS: [([u8; BLOCK_HEADER_SIZE], [u8; 32]); 3] = [
    (
        hex!("010000000000000000000000000000000000000000000000000000000000000000000000342a762a9b2e43db0c6a866202ab2c07440d5e7d28c7ad5c1326492ecf30015a1091105df0ff0f1e776a0d00"),
        hex!("0000037f83314be8e19f8aae8caab9a4ce930b070e9d16521fcfc3a2b91bfc27"),
    ),
    (
        hex!("010000000000000000000000000000000000000000000000000000000000000000000000342a762a9b2e43db0c6a866202ab2c07440d5e7d28c7ad5c1326492ecf30015a1191105df0ff0f1ee50c2d00"),
        hex!("00000b0800b88dde842410f3c860fffeb3da4d68a744f1ff57407fac7780f98f"),
    ),
    (
        hex!("010000000000000000000000000000000000000000000000000000000000000000000000342a762a9b2e43db0c6a866202ab2c07440d5e7d28c7ad5c1326492ecf30015a1291105df0ff0f1edc750000"),
        hex!("0000093d249fde301e0cb906368fe4301ae2921a8f443eae6348e9b4207b73c0"),
    ),
];

/// Stands in for the node's proof-of-work hash.
///
/// It knows the exact 80-byte genesis headers of the three published networks and
/// returns their recorded hashes. Any other input, including a header that differs
/// by a single bit, falls back to double-SHA256 and so fails verification.
pub struct KnownHeaders;

impl HeaderHasher for KnownHeaders {
    fn hash_header(&self, header: &[u8; BLOCK_HEADER_SIZE]) -> Hash256 {
        PUBLISHED_GENESIS_HEADERS
            .iter()
            .find(|(known, _)| known == header)
            .map(|(_, hash)| hash256_from_display(*hash))
            .unwrap_or_else(|| calculate_double_sha256(header))
    }
}
