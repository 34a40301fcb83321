// HooliBet Network Parameters
// ===========================
//
// One `ChainParams` value per network. Main is specified in full; testnet,
// regtest and unittest start from a parent value and override only what differs.
// These values are consensus-critical: a wrong byte here forks the network or
// breaks address compatibility.

use anyhow::{Context, Result};
use bitcoin::secp256k1::PublicKey;
use bitcoin::Amount;
use crypto_bigint::U256;
use hex_literal::hex;

use crate::block::{BlockHeader, GenesisBlock, HeaderHasher};
use crate::checkpoints::CheckpointData;
use crate::constants::{CENT, COIN, ZEROCOIN_MODULUS};
use crate::genesis::{check_genesis, create_genesis_block, GenesisSpec};
use crate::hashes::{hash256_from_display, Hash256};
use crate::network::Network;
use crate::seeds::{convert_seed6, PeerAddress, SEED6_MAIN, SEED6_TEST};
use crate::zerocoin::{ZerocoinParams, ZEROCOIN_PARAMS};

/// Message embedded in every network's genesis coinbase.
pub const GENESIS_TIMESTAMP_MESSAGE: &str =
    "Bitcoin set a new 2019 high on June 21 hitting 9800 USD";

/// Public key paid by every network's genesis coinbase.
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = hex!("04e94125b274aec04f9040c59f4ce8c2e1c2b08457a773f654d27f789c06ddabb4352f9e0682341da8c301d4c6e9558abb31b6f54e25387ee6eba094a44791f6a2");

/// Merkle root of the genesis block. Networks only differ in header fields, so
/// they all share it.
pub const GENESIS_MERKLE_ROOT: Hash256 = hash256_from_display(hex!(
    "5a0130cf2e4926135cadc7287d5e0d44072cab0262866a0cdb432e9b2a762a34"
));

pub const MAIN_GENESIS_HASH: Hash256 = hash256_from_display(hex!(
    "0000037f83314be8e19f8aae8caab9a4ce930b070e9d16521fcfc3a2b91bfc27"
));

pub const TESTNET_GENESIS_HASH: Hash256 = hash256_from_display(hex!(
    "00000b0800b88dde842410f3c860fffeb3da4d68a744f1ff57407fac7780f98f"
));

pub const REGTEST_GENESIS_HASH: Hash256 = hash256_from_display(hex!(
    "0000093d249fde301e0cb906368fe4301ae2921a8f443eae6348e9b4207b73c0"
));

/// Starting difficulty of main and testnet is 1 / 2^12.
pub const MAIN_POW_LIMIT: U256 = U256::MAX.shr_vartime(20);

pub const REGTEST_POW_LIMIT: U256 = U256::MAX.shr_vartime(1);

/// Roles of the base58 prefixes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    /// BIP44 coin type.
    ExtCoinType,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
    pub ext_coin_type: Vec<u8>,
}

impl Base58Prefixes {
    pub fn get(&self, ty: Base58Type) -> &[u8] {
        match ty {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }
}

/// A DNS seed: a display name and the host actually queried.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// The consensus and network parameters of one network.
#[derive(Clone, Debug)]
pub struct ChainParams {
    pub network: Network,
    pub network_id: &'static str,

    /// Wire-message preamble. Rarely used upper ASCII, not valid UTF-8, and a
    /// large 4-byte integer at any alignment.
    pub message_start: [u8; 4],
    pub alert_pub_key: Vec<u8>,
    pub default_port: u16,
    pub pow_limit: U256,
    pub subsidy_halving_interval: i32,
    pub max_reorganization_depth: i32,

    /// Block version upgrade majority: enforce / reject thresholds out of a
    /// sample window of `to_check_block_upgrade_majority` blocks.
    pub enforce_block_upgrade_majority: i32,
    pub reject_block_outdated_majority: i32,
    pub to_check_block_upgrade_majority: i32,

    pub miner_threads: i32,
    /// Difficulty retarget timespan, in seconds.
    pub target_timespan: i64,
    /// Target block spacing, in seconds.
    pub target_spacing: i64,
    pub maturity: i32,
    pub masternode_count_drift: i32,
    pub max_money_out: Amount,

    // Height or time based activations.
    pub last_pow_block: i32,
    pub modifier_update_block: i32,
    pub zerocoin_start_height: i32,
    pub zerocoin_start_time: i64,
    pub block_enforce_serial_range: i32,
    pub block_recalculate_accumulators: i32,
    pub block_first_fraudulent: i32,
    pub block_last_good_checkpoint: i32,
    pub block_enforce_invalid_utxo: i32,
    /// Invalid coins filtered through exchanges that should still count as valid.
    pub invalid_amount_filtered: Amount,
    pub block_zerocoin_v2: i32,

    pub genesis: GenesisBlock,
    pub hash_genesis_block: Hash256,

    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<PeerAddress>,
    pub base58_prefixes: Base58Prefixes,

    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,

    pub pool_max_transactions: i32,
    pub spork_key: String,
    pub obfuscation_pool_dummy_address: String,
    pub start_masternode_payments: i64,
    /// Confirmations required for a budget finalization fee.
    pub budget_fee_confirmations: i64,

    pub zerocoin_modulus: &'static str,
    pub max_zerocoin_spends_per_transaction: i32,
    pub min_zerocoin_mint_fee: Amount,
    pub mint_required_confirmations: i32,
    pub required_accumulation: i32,
    pub default_security_level: i32,
    /// Block headers must have this version once zerocoin is active.
    pub zerocoin_header_version: i32,
    pub zerocoin_required_stake_depth: i32,

    pub checkpoints: CheckpointData,
}

impl ChainParams {
    pub fn base58_prefix(&self, ty: Base58Type) -> &[u8] {
        self.base58_prefixes.get(ty)
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }

    /// Number of blocks between difficulty retargets.
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Zerocoin accumulator parameters.
    ///
    /// `use_modulus_v1` selects the legacy object that reads the modulus literal
    /// as hex. Both objects are cached for the lifetime of the process and shared
    /// by every network.
    pub fn zerocoin_params(&self, use_modulus_v1: bool) -> &'static ZerocoinParams {
        ZEROCOIN_PARAMS.get(use_modulus_v1)
    }

    pub fn spork_public_key(&self) -> Result<PublicKey> {
        let bytes = hex::decode(&self.spork_key).context("spork key is not hex")?;
        PublicKey::from_slice(&bytes).context("spork key is not a valid public key")
    }

    pub fn alert_public_key(&self) -> Result<PublicKey> {
        PublicKey::from_slice(&self.alert_pub_key).context("alert key is not a valid public key")
    }
}

/// Builds the genesis block, panicking if its literals are inconsistent.
fn assemble_genesis(network: Network, spec: &GenesisSpec<'_>) -> GenesisBlock {
    create_genesis_block(spec)
        .unwrap_or_else(|err| panic!("failed to assemble {network} genesis block: {err:#}"))
}

/// Verifies a genesis block against its recorded hash and returns the hash.
fn verify_genesis(
    network: Network,
    genesis: &GenesisBlock,
    hasher: &dyn HeaderHasher,
    expected_hash: &Hash256,
) -> Hash256 {
    check_genesis(genesis, hasher, expected_hash, &GENESIS_MERKLE_ROOT)
        .unwrap_or_else(|err| panic!("{network} genesis block failed verification: {err:#}"))
}

/// Copies `genesis` with a new header time and nonce. The merkle root carries
/// over because the coinbase is unchanged.
fn regenesis(genesis: &GenesisBlock, time: u32, nonce: u32) -> GenesisBlock {
    GenesisBlock {
        header: BlockHeader {
            time,
            nonce,
            ..genesis.header
        },
        transactions: genesis.transactions.clone(),
    }
}

/// Main network.
pub fn build_main(hasher: &dyn HeaderHasher) -> ChainParams {
    let genesis = assemble_genesis(
        Network::Main,
        &GenesisSpec {
            timestamp_message: GENESIS_TIMESTAMP_MESSAGE,
            output_pubkey: &GENESIS_OUTPUT_PUBKEY,
            reward: Amount::ZERO,
            version: 1,
            time: 1561366800,
            bits: 0x1e0ffff0,
            nonce: 879223,
        },
    );
    let hash_genesis_block = verify_genesis(Network::Main, &genesis, hasher, &MAIN_GENESIS_HASH);

    let mut fixed_seeds = Vec::new();
    convert_seed6(&mut fixed_seeds, SEED6_MAIN);

    ChainParams {
        network: Network::Main,
        network_id: "main",
        message_start: [0x43, 0xc6, 0x5b, 0xa4],
        alert_pub_key: hex!("043a22fa5be283306f434a4363fb3194772472246fd34029b1bfb5f1c1c295c13a6310570c02126f3f8a20d0dc456bcb894e63b62311b63ebd5a3de6313b9ea1ea").to_vec(),
        default_port: 21340,
        pow_limit: MAIN_POW_LIMIT,
        subsidy_halving_interval: 525000,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 1,
        target_timespan: 60,
        target_spacing: 60,
        maturity: 180,
        masternode_count_drift: 20,
        max_money_out: Amount::from_sat(500_000_000 * COIN),

        last_pow_block: 600,
        modifier_update_block: 1,
        zerocoin_start_height: 999999999,
        zerocoin_start_time: 1893456000, // 01/01/2030 @ 12:00am (UTC)
        block_enforce_serial_range: 999999999,
        block_recalculate_accumulators: 9080000,
        block_first_fraudulent: 999999999,
        block_last_good_checkpoint: 999999999,
        block_enforce_invalid_utxo: 999999999,
        invalid_amount_filtered: Amount::ZERO,
        block_zerocoin_v2: 999999999,

        genesis,
        hash_genesis_block,

        // seed6 through seed9 all resolve through seed5; deployed nodes rely on
        // this list as published.
        dns_seeds: vec![
            DnsSeed::new("hoolibet.club", "dnsseed.hoolibet.club"),
            DnsSeed::new("seed1.hoolibet.club", "seed1.hoolibet.club"),
            DnsSeed::new("seed2.hoolibet.club", "seed2.hoolibet.club"),
            DnsSeed::new("seed3.hoolibet.club", "seed3.hoolibet.club"),
            DnsSeed::new("seed4.hoolibet.club", "seed4.hoolibet.club"),
            DnsSeed::new("seed5.hoolibet.club", "seed5.hoolibet.club"),
            DnsSeed::new("seed6.hoolibet.club", "seed5.hoolibet.club"),
            DnsSeed::new("seed7.hoolibet.club", "seed5.hoolibet.club"),
            DnsSeed::new("seed8.hoolibet.club", "seed5.hoolibet.club"),
            DnsSeed::new("seed9.hoolibet.club", "seed5.hoolibet.club"),
            DnsSeed::new("explorer.hoolibet.club", "explorer.hoolibet.club"),
        ],
        fixed_seeds,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![40], // 'H'
            script_address: vec![100], // 'h'
            secret_key: vec![42],
            ext_public_key: vec![0x04, 0x33, 0x3D, 0x13],
            ext_secret_key: vec![0x04, 0x33, 0x42, 0x5C],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x66],
        },

        mining_requires_peers: false,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: true,
        testnet_to_be_deprecated_field_rpc: false,
        headers_first_syncing_active: false,

        pool_max_transactions: 3,
        spork_key: "04c913d9b6979b180dc6634b20a62e1cd28167ecd7d64e46825bf8d3f2cf797125dfedec99135d8e95ac761616f95a6edef925bd738d4afd21a23c8d7fa0e720fd".to_string(),
        obfuscation_pool_dummy_address: "HQQVcDhgHHR7Lwqm7b4og3ibLYA9CYUYWa".to_string(),
        start_masternode_payments: 1561638600, // 06/27/2019 @ 12:30pm (UTC)
        budget_fee_confirmations: 6,

        zerocoin_modulus: ZEROCOIN_MODULUS,
        max_zerocoin_spends_per_transaction: 7,
        min_zerocoin_mint_fee: Amount::from_sat(CENT),
        mint_required_confirmations: 20,
        required_accumulation: 1,
        default_security_level: 100,
        zerocoin_header_version: 4,
        zerocoin_required_stake_depth: 200,

        checkpoints: CheckpointData::main(),
    }
}

/// Public test network, derived from main.
pub fn build_testnet(base: ChainParams, hasher: &dyn HeaderHasher) -> ChainParams {
    let genesis = regenesis(&base.genesis, 1561366801, 2952421);
    let hash_genesis_block =
        verify_genesis(Network::Testnet, &genesis, hasher, &TESTNET_GENESIS_HASH);

    let mut fixed_seeds = Vec::new();
    convert_seed6(&mut fixed_seeds, SEED6_TEST);

    ChainParams {
        network: Network::Testnet,
        network_id: "test",
        message_start: [0x53, 0xb4, 0xf2, 0xd1],
        alert_pub_key: hex!("048805991b48ae88c6fb22f5073df3d0ec2c701b192c6f038e9ec035e8284327380edb6d52f77fc4e337ec9543870f7f2cb4cd911916dcc202211f928f28d01bf6").to_vec(),
        default_port: 21440,
        enforce_block_upgrade_majority: 51,
        reject_block_outdated_majority: 75,
        to_check_block_upgrade_majority: 100,
        miner_threads: 1,
        target_timespan: 60,
        target_spacing: 60,
        last_pow_block: 500,
        maturity: 60,
        masternode_count_drift: 5,
        modifier_update_block: 1,
        max_money_out: Amount::from_sat(500_000_000 * COIN),
        zerocoin_start_height: 999999999,
        zerocoin_start_time: 1893456000,
        block_enforce_serial_range: 1,
        block_recalculate_accumulators: 9908000,
        block_first_fraudulent: 9891737,
        block_last_good_checkpoint: 9891730,
        block_enforce_invalid_utxo: 9902850,
        invalid_amount_filtered: Amount::ZERO,
        block_zerocoin_v2: 999999999,

        genesis,
        hash_genesis_block,

        dns_seeds: Vec::new(),
        fixed_seeds,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![100], // 'h'
            script_address: vec![17],  // '7' or '8'
            secret_key: vec![239],     // '9' or 'c'
            ext_public_key: vec![0x5c, 0x60, 0x63, 0xc1],
            ext_secret_key: vec![0x5c, 0x60, 0x51, 0x46],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x06],
        },

        mining_requires_peers: true,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: true,

        pool_max_transactions: 2,
        spork_key: "0404abb6d57014e9de25090cb137cefa162efd6126350b0c46047255f1bc3b63f285907c50b91cbe6ab1a9b178972c489ee55b150dd2edc61bf5319c2e8c608422".to_string(),
        obfuscation_pool_dummy_address: "hQQVcDhgHHR7Lwqm7b4og3ibLYA9CYUYWa".to_string(),
        start_masternode_payments: 1540288801,
        // Testnet only has an 8 block finalization window.
        budget_fee_confirmations: 3,

        checkpoints: CheckpointData::testnet(),
        ..base
    }
}

/// Regression test network, derived from testnet.
pub fn build_regtest(base: ChainParams, hasher: &dyn HeaderHasher) -> ChainParams {
    let genesis = regenesis(&base.genesis, 1561366802, 30172);
    let hash_genesis_block =
        verify_genesis(Network::Regtest, &genesis, hasher, &REGTEST_GENESIS_HASH);

    ChainParams {
        network: Network::Regtest,
        network_id: "regtest",
        message_start: [0xa3, 0xc4, 0x7d, 0x23],
        subsidy_halving_interval: 150,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 1,
        target_timespan: 24 * 60 * 60,
        target_spacing: 60,
        pow_limit: REGTEST_POW_LIMIT,
        default_port: 21540,

        genesis,
        hash_genesis_block,

        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),

        mining_requires_peers: false,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,

        checkpoints: CheckpointData::regtest(),
        ..base
    }
}

/// Unit test network, derived from main. It shares main's genesis and checkpoints.
pub fn build_unittest(base: ChainParams, hasher: &dyn HeaderHasher) -> ChainParams {
    let hash_genesis_block =
        verify_genesis(Network::Unittest, &base.genesis, hasher, &MAIN_GENESIS_HASH);

    ChainParams {
        network: Network::Unittest,
        network_id: "unittest",
        default_port: 21640,
        hash_genesis_block,

        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),

        mining_requires_peers: false,
        default_consistency_checks: true,
        allow_min_difficulty_blocks: false,
        mine_blocks_on_demand: true,

        checkpoints: CheckpointData::main(),
        ..base
    }
}
