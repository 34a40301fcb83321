//! Network parameters of the HooliBet node.
//!
//! Each network (main, test, regtest, unittest) has one [`ChainParams`] value
//! holding its consensus constants, genesis block, address prefixes, seeds and
//! checkpoints. A [`ChainParamsRegistry`] builds all of them, verifies every
//! genesis block against its recorded hash, and publishes the selected network.

pub mod block;
pub mod checkpoints;
pub mod constants;
pub mod genesis;
pub mod hashes;
pub mod merkle;
pub mod network;
pub mod params;
pub mod registry;
pub mod seeds;
pub mod transaction;
pub mod zerocoin;

#[cfg(test)]
pub(crate) mod test_utils;

pub use block::{BlockHeader, GenesisBlock, HeaderHasher};
pub use checkpoints::CheckpointData;
pub use hashes::Hash256;
pub use network::{BaseChainParams, Network};
pub use params::{Base58Type, ChainParams, DnsSeed};
pub use registry::{ChainParamsRegistry, ModifiableParams};
pub use seeds::{convert_seed6, PeerAddress, SeedSpec6};
pub use zerocoin::{ZerocoinParams, ZEROCOIN_PARAMS};
