// Checkpoints
// ===========
//
// Hard-coded (height, hash) pairs per network, plus the metadata used to
// estimate sync progress. Matching chain blocks against these hashes is the
// validation layer's job; this module only stores and reports them.

use std::collections::BTreeMap;

use hex_literal::hex;
use serde::{Deserialize, Serialize};

use crate::hashes::{hash256_from_display, Hash256};

/// Weight of a transaction verified with signature checks, relative to one below
/// the last checkpoint.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CheckpointData {
    pub checkpoints: BTreeMap<i32, Hash256>,
    /// UNIX timestamp of the last checkpoint block.
    pub time_last_checkpoint: i64,
    /// Total number of transactions between genesis and the last checkpoint.
    pub transactions_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint.
    pub transactions_per_day: f64,
}

impl CheckpointData {
    pub fn main() -> Self {
        Self {
            checkpoints: BTreeMap::from([(
                0,
                hash256_from_display(hex!(
                    "0000037f83314be8e19f8aae8caab9a4ce930b070e9d16521fcfc3a2b91bfc27"
                )),
            )]),
            time_last_checkpoint: 1561366800,
            transactions_last_checkpoint: 0,
            transactions_per_day: 2000.0,
        }
    }

    pub fn testnet() -> Self {
        Self {
            checkpoints: BTreeMap::from([(
                0,
                hash256_from_display(hex!(
                    "00000b0800b88dde842410f3c860fffeb3da4d68a744f1ff57407fac7780f98f"
                )),
            )]),
            time_last_checkpoint: 1561366801,
            transactions_last_checkpoint: 0,
            transactions_per_day: 250.0,
        }
    }

    pub fn regtest() -> Self {
        Self {
            checkpoints: BTreeMap::from([(
                0,
                hash256_from_display(hex!(
                    "0000093d249fde301e0cb906368fe4301ae2921a8f443eae6348e9b4207b73c0"
                )),
            )]),
            time_last_checkpoint: 1561366802,
            transactions_last_checkpoint: 0,
            transactions_per_day: 100.0,
        }
    }

    /// Hash recorded for `height`, if that height is checkpointed.
    pub fn expected_hash(&self, height: i32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Height of the last checkpoint, or 0 for an empty table.
    pub fn total_blocks_estimate(&self) -> i32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// Guesses how far verification has progressed, as a fraction in `[0, 1]`.
    ///
    /// `chain_tx` is the number of transactions up to and including the tip,
    /// `tip_time` the tip's timestamp and `now` the current time. Transactions past
    /// the last checkpoint cost `SIGCHECK_VERIFICATION_FACTOR` times more when
    /// `sigchecks` is set.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        tip_time: i64,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };

        let (work_before, work_after) = if chain_tx <= self.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (self.transactions_last_checkpoint - chain_tx) as f64;
            let expensive_after = (now - self.time_last_checkpoint) as f64 / SECONDS_PER_DAY
                * self.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = self.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - self.transactions_last_checkpoint) as f64;
            let expensive_after =
                (now - tip_time) as f64 / SECONDS_PER_DAY * self.transactions_per_day;
            (
                cheap_before + expensive_before * factor,
                expensive_after * factor,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}
