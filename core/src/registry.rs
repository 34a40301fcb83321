// Chain Parameters Registry
// =========================
//
// The registry owns the four parameter sets and tracks which network is active.
// It starts unselected; reading the active set before `select` is a programming
// error and panics. Reselection is allowed so that test harnesses can switch
// networks.
//
// Main, testnet and regtest are immutable once built. The unittest set can be
// changed through `ModifiableParams`, which is only handed out while unittest is
// the active network. Changes are copy-on-write: an `Arc<ChainParams>` obtained
// earlier keeps the values it had when it was taken.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::block::HeaderHasher;
use crate::hashes::hash256_to_hex;
use crate::network::{BaseChainParams, Network};
use crate::params::{build_main, build_regtest, build_testnet, build_unittest, ChainParams};

pub struct ChainParamsRegistry {
    main: Arc<ChainParams>,
    testnet: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    unittest: RwLock<Arc<ChainParams>>,
    selection: RwLock<Option<Network>>,
}

impl ChainParamsRegistry {
    /// Builds and verifies every network's parameters.
    ///
    /// `hasher` is the node's block header proof-of-work hash. Panics if any
    /// genesis block does not reproduce its recorded hash.
    pub fn new(hasher: &dyn HeaderHasher) -> Self {
        let main = build_main(hasher);
        let testnet = build_testnet(main.clone(), hasher);
        let regtest = build_regtest(testnet.clone(), hasher);
        let unittest = build_unittest(main.clone(), hasher);

        for params in [&main, &testnet, &regtest, &unittest] {
            info!(
                network = %params.network,
                genesis = %hash256_to_hex(&params.hash_genesis_block),
                "Verified genesis block"
            );
        }

        Self {
            main: Arc::new(main),
            testnet: Arc::new(testnet),
            regtest: Arc::new(regtest),
            unittest: RwLock::new(Arc::new(unittest)),
            selection: RwLock::new(None),
        }
    }

    /// Makes `network` the active network. Panics on `Network::Unknown`.
    pub fn select(&self, network: Network) {
        let base = BaseChainParams::for_network(network);
        *self.selection.write() = Some(network);
        info!(network = %network, data_dir = base.data_dir, "Selected chain parameters");
    }

    /// Selects the network named by the `-regtest` / `-testnet` startup flags.
    ///
    /// Returns false, leaving the selection untouched, when the flags conflict.
    pub fn select_from_flags(&self, regtest: bool, testnet: bool) -> bool {
        let network = Network::from_flags(regtest, testnet);
        if network == Network::Unknown {
            return false;
        }
        self.select(network);
        true
    }

    pub fn active_network(&self) -> Option<Network> {
        *self.selection.read()
    }

    /// The active network's parameters. Panics if no network is selected.
    pub fn params(&self) -> Arc<ChainParams> {
        let network = self
            .active_network()
            .unwrap_or_else(|| panic!("chain parameters read before a network was selected"));
        self.params_for(network)
    }

    /// The parameters of `network`, regardless of the active selection.
    /// Panics on `Network::Unknown`.
    pub fn params_for(&self, network: Network) -> Arc<ChainParams> {
        match network {
            Network::Main => Arc::clone(&self.main),
            Network::Testnet => Arc::clone(&self.testnet),
            Network::Regtest => Arc::clone(&self.regtest),
            Network::Unittest => Arc::clone(&self.unittest.read()),
            Network::Unknown => panic!("Unimplemented network"),
        }
    }

    /// Base parameters of the active network. Panics if no network is selected.
    pub fn base_params(&self) -> BaseChainParams {
        let network = self
            .active_network()
            .unwrap_or_else(|| panic!("base parameters read before a network was selected"));
        BaseChainParams::for_network(network)
    }

    /// Write access to the unittest parameters.
    ///
    /// Panics unless unittest is the active network. Every setter checks the
    /// selection again, so a handle stops working once another network is
    /// selected.
    pub fn modifiable_params(&self) -> ModifiableParams<'_> {
        assert_unittest_active(self.active_network());
        ModifiableParams { registry: self }
    }
}

fn assert_unittest_active(active: Option<Network>) {
    assert_eq!(
        active,
        Some(Network::Unittest),
        "modifiable parameters are only available on the unittest network"
    );
}

/// Setters for the unittest network's tunable values.
pub struct ModifiableParams<'a> {
    registry: &'a ChainParamsRegistry,
}

impl ModifiableParams<'_> {
    fn update(&self, apply: impl FnOnce(&mut ChainParams)) {
        // The selection stays read-locked so it cannot change mid-update.
        let selection = self.registry.selection.read();
        assert_unittest_active(*selection);
        let mut guard = self.registry.unittest.write();
        apply(Arc::make_mut(&mut *guard));
    }

    pub fn set_subsidy_halving_interval(&self, interval: i32) {
        self.update(|params| params.subsidy_halving_interval = interval);
    }

    pub fn set_enforce_block_upgrade_majority(&self, majority: i32) {
        self.update(|params| params.enforce_block_upgrade_majority = majority);
    }

    pub fn set_reject_block_outdated_majority(&self, majority: i32) {
        self.update(|params| params.reject_block_outdated_majority = majority);
    }

    pub fn set_to_check_block_upgrade_majority(&self, window: i32) {
        self.update(|params| params.to_check_block_upgrade_majority = window);
    }

    pub fn set_default_consistency_checks(&self, enabled: bool) {
        self.update(|params| params.default_consistency_checks = enabled);
    }

    pub fn set_allow_min_difficulty_blocks(&self, allowed: bool) {
        self.update(|params| params.allow_min_difficulty_blocks = allowed);
    }

    pub fn set_skip_proof_of_work_check(&self, skip: bool) {
        self.update(|params| params.skip_proof_of_work_check = skip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashes::calculate_double_sha256;
    use crate::params::{MAIN_GENESIS_HASH, REGTEST_GENESIS_HASH, TESTNET_GENESIS_HASH};
    use crate::test_utils::KnownHeaders;

    fn registry() -> ChainParamsRegistry {
        ChainParamsRegistry::new(&KnownHeaders)
    }

    fn unittest_registry() -> ChainParamsRegistry {
        let registry = registry();
        registry.select(Network::Unittest);
        registry
    }

    #[test]
    fn test_starts_unselected() {
        let registry = registry();
        assert_eq!(registry.active_network(), None);
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_params_before_select_panics() {
        registry().params();
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_base_params_before_select_panics() {
        registry().base_params();
    }

    #[test]
    fn test_select_each_network() {
        let registry = registry();
        let expected = [
            (Network::Main, 21340, 1561366800, MAIN_GENESIS_HASH),
            (Network::Testnet, 21440, 1561366801, TESTNET_GENESIS_HASH),
            (Network::Regtest, 21540, 1561366802, REGTEST_GENESIS_HASH),
            (Network::Unittest, 21640, 1561366800, MAIN_GENESIS_HASH),
        ];
        for (network, port, time, genesis) in expected {
            registry.select(network);
            let params = registry.params();
            assert_eq!(registry.active_network(), Some(network));
            assert_eq!(params.network, network);
            assert_eq!(params.default_port, port);
            assert_eq!(params.genesis.header.time, time);
            assert_eq!(params.hash_genesis_block, genesis);
            assert_eq!(registry.base_params().network, network);
        }
    }

    #[test]
    fn test_reselection_switches_active_set() {
        let registry = registry();
        registry.select(Network::Regtest);
        assert_eq!(registry.params().default_port, 21540);
        registry.select(Network::Main);
        assert_eq!(registry.params().default_port, 21340);
        assert_eq!(registry.base_params().data_dir, "");
    }

    #[test]
    fn test_params_for_does_not_change_selection() {
        let registry = registry();
        registry.select(Network::Main);
        let testnet = registry.params_for(Network::Testnet);
        assert_eq!(testnet.base58_prefix(crate::params::Base58Type::PubkeyAddress), &[100]);
        assert_eq!(registry.active_network(), Some(Network::Main));
        assert_eq!(registry.params().network, Network::Main);
    }

    #[test]
    fn test_params_for_shares_immutable_sets() {
        let registry = registry();
        assert!(Arc::ptr_eq(
            &registry.params_for(Network::Main),
            &registry.params_for(Network::Main)
        ));
    }

    #[test]
    #[should_panic(expected = "Unimplemented network")]
    fn test_params_for_unknown_panics() {
        registry().params_for(Network::Unknown);
    }

    #[test]
    #[should_panic(expected = "Unimplemented network")]
    fn test_select_unknown_panics() {
        registry().select(Network::Unknown);
    }

    #[test]
    fn test_select_from_flags() {
        let registry = registry();
        assert!(registry.select_from_flags(true, false));
        assert_eq!(registry.active_network(), Some(Network::Regtest));
        assert!(registry.select_from_flags(false, true));
        assert_eq!(registry.active_network(), Some(Network::Testnet));

        assert!(!registry.select_from_flags(true, true));
        assert_eq!(registry.active_network(), Some(Network::Testnet));

        assert!(registry.select_from_flags(false, false));
        assert_eq!(registry.active_network(), Some(Network::Main));
    }

    #[test]
    fn test_conflicting_flags_leave_registry_unselected() {
        let registry = registry();
        assert!(!registry.select_from_flags(true, true));
        assert_eq!(registry.active_network(), None);
    }

    #[test]
    #[should_panic(expected = "only available on the unittest network")]
    fn test_modifiable_params_unselected_panics() {
        registry().modifiable_params();
    }

    #[test]
    #[should_panic(expected = "only available on the unittest network")]
    fn test_modifiable_params_on_main_panics() {
        let registry = registry();
        registry.select(Network::Main);
        registry.modifiable_params().set_subsidy_halving_interval(10);
    }

    #[test]
    #[should_panic(expected = "only available on the unittest network")]
    fn test_modifiable_params_on_testnet_panics() {
        let registry = registry();
        registry.select(Network::Testnet);
        registry.modifiable_params().set_skip_proof_of_work_check(false);
    }

    #[test]
    #[should_panic(expected = "only available on the unittest network")]
    fn test_modifiable_params_on_regtest_panics() {
        let registry = registry();
        registry.select(Network::Regtest);
        registry.modifiable_params().set_allow_min_difficulty_blocks(false);
    }

    #[test]
    #[should_panic(expected = "only available on the unittest network")]
    fn test_handle_stops_working_after_reselection() {
        let registry = unittest_registry();
        let modifiable = registry.modifiable_params();
        registry.select(Network::Main);
        modifiable.set_subsidy_halving_interval(3);
    }

    #[test]
    fn test_rejected_setter_leaves_unittest_unchanged() {
        let registry = unittest_registry();
        let modifiable = registry.modifiable_params();
        registry.select(Network::Main);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            modifiable.set_subsidy_halving_interval(3);
        }));
        assert!(result.is_err());
        assert_eq!(
            registry.params_for(Network::Unittest).subsidy_halving_interval,
            525000
        );

        registry.select(Network::Unittest);
        modifiable.set_subsidy_halving_interval(3);
        assert_eq!(registry.params().subsidy_halving_interval, 3);
    }

    #[test]
    fn test_setters_update_unittest() {
        let registry = unittest_registry();
        let modifiable = registry.modifiable_params();
        modifiable.set_subsidy_halving_interval(150);
        modifiable.set_enforce_block_upgrade_majority(51);
        modifiable.set_reject_block_outdated_majority(75);
        modifiable.set_to_check_block_upgrade_majority(100);
        modifiable.set_default_consistency_checks(false);
        modifiable.set_allow_min_difficulty_blocks(true);
        modifiable.set_skip_proof_of_work_check(false);

        let params = registry.params();
        assert_eq!(params.subsidy_halving_interval, 150);
        assert_eq!(params.enforce_block_upgrade_majority, 51);
        assert_eq!(params.reject_block_outdated_majority, 75);
        assert_eq!(params.to_check_block_upgrade_majority, 100);
        assert!(!params.default_consistency_checks);
        assert!(params.allow_min_difficulty_blocks);
        assert!(!params.skip_proof_of_work_check);
    }

    #[test]
    fn test_mutation_does_not_leak_into_other_networks() {
        let registry = unittest_registry();
        registry.modifiable_params().set_subsidy_halving_interval(1);
        registry.modifiable_params().set_skip_proof_of_work_check(false);

        let main = registry.params_for(Network::Main);
        assert_eq!(main.subsidy_halving_interval, 525000);
        assert!(main.skip_proof_of_work_check);
        assert_eq!(registry.params_for(Network::Regtest).subsidy_halving_interval, 150);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_mutation() {
        let registry = unittest_registry();
        let before = registry.params();
        registry.modifiable_params().set_subsidy_halving_interval(7);
        let after = registry.params();

        assert_eq!(before.subsidy_halving_interval, 525000);
        assert_eq!(after.subsidy_halving_interval, 7);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_concurrent_readers_see_complete_sets() {
        let registry = unittest_registry();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let params = registry.params();
                        assert_eq!(params.default_port, 21640);
                    }
                });
            }
            for interval in 1..=50 {
                registry.modifiable_params().set_subsidy_halving_interval(interval);
            }
        });
        assert_eq!(registry.params().subsidy_halving_interval, 50);
    }

    #[test]
    #[should_panic(expected = "genesis block failed verification")]
    fn test_wrong_hasher_panics() {
        let double_sha = |header: &[u8; 80]| calculate_double_sha256(header);
        ChainParamsRegistry::new(&double_sha);
    }
}
