// Consensus-critical. Changes require spec update + tests.
//! Hard-coded checkpoint anchors and the verification-progress heuristic.
//!
//! A checkpoint pins a (height, block hash) pair every honest node must
//! agree on; reorgs past the last checkpointed ancestor are refused by the
//! acceptance layer. The progress estimate is a user-facing heuristic only
//! and carries no consensus weight.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::ParamsError;
use joule_core::{BlockHash, BlockIndex};
use time::OffsetDateTime;

/// How many times slower we expect to process transactions after the last
/// checkpoint, once signature checking kicks in.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// Immutable sorted table of checkpoint anchors for one network.
#[derive(Clone, Debug)]
pub struct CheckpointSet {
    enabled: bool,
    checkpoints: BTreeMap<u64, BlockHash>,
    /// Unix timestamp of the last checkpointed block.
    time_last_checkpoint: i64,
    /// Total transactions between genesis and the last checkpoint.
    tx_count_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint.
    tx_per_day_after: f64,
}

impl CheckpointSet {
    /// Builds a set from a (height, reversed-hex hash) table.
    ///
    /// Table rows must be strictly ascending in height.
    pub fn from_table(
        table: &[(u64, &str)],
        time_last_checkpoint: i64,
        tx_count_last_checkpoint: u64,
        tx_per_day_after: f64,
    ) -> Result<Self, ParamsError> {
        let mut checkpoints = BTreeMap::new();
        let mut last_height = None;
        for (height, hash) in table {
            if let Some(prev) = last_height {
                if *height <= prev {
                    return Err(ParamsError::InvalidCheckpoints(
                        "heights must be strictly ascending",
                    ));
                }
            }
            last_height = Some(*height);
            checkpoints.insert(*height, hash.parse::<BlockHash>()?);
        }
        Ok(Self {
            enabled: true,
            checkpoints,
            time_last_checkpoint,
            tx_count_last_checkpoint,
            tx_per_day_after,
        })
    }

    /// Turns checkpoint enforcement on or off.
    ///
    /// A disabled set accepts every block and anchors nothing. Only the
    /// startup path may flip this, before the params record is installed.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether checkpoint enforcement is active.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// True if a checkpoint exists at `height`.
    pub fn contains(&self, height: u64) -> bool {
        self.checkpoints.contains_key(&height)
    }

    /// The checkpointed hash at `height`, if any.
    pub fn expected_hash(&self, height: u64) -> Option<BlockHash> {
        self.checkpoints.get(&height).copied()
    }

    /// True unless a checkpoint exists at `height` with a different hash.
    pub fn check(&self, height: u64, hash: &BlockHash) -> bool {
        if !self.enabled {
            return true;
        }
        match self.checkpoints.get(&height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// The greatest checkpointed height, or 0 when disabled or empty.
    pub fn total_blocks_estimate(&self) -> u64 {
        if !self.enabled {
            return 0;
        }
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// The highest checkpointed block present in `block_index`, scanning
    /// entries from the newest down.
    pub fn last_checkpoint_in(
        &self,
        block_index: &HashMap<BlockHash, Arc<BlockIndex>>,
    ) -> Option<Arc<BlockIndex>> {
        if !self.enabled {
            return None;
        }
        for hash in self.checkpoints.values().rev() {
            if let Some(index) = block_index.get(hash) {
                return Some(Arc::clone(index));
            }
        }
        None
    }

    /// Estimates how far block verification has progressed at `index`,
    /// as of the current wall clock. Returns a value in `[0, 1]`.
    pub fn guess_verification_progress(&self, index: &BlockIndex, sig_checks: bool) -> f64 {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        self.guess_verification_progress_at(index, sig_checks, now)
    }

    /// [`Self::guess_verification_progress`] against an explicit clock.
    ///
    /// Work is counted as 1.0 per transaction up to the last checkpoint and
    /// `SIGCHECK_VERIFICATION_FACTOR` per transaction after it.
    pub fn guess_verification_progress_at(
        &self,
        index: &BlockIndex,
        sig_checks: bool,
        now: i64,
    ) -> f64 {
        let factor = if sig_checks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };

        let tx_last = self.tx_count_last_checkpoint as f64;
        let chain_tx = index.chain_tx as f64;

        let (work_before, work_after);
        if index.chain_tx <= self.tx_count_last_checkpoint {
            let cheap_after = tx_last - chain_tx;
            let expensive_after =
                (now - self.time_last_checkpoint) as f64 / 86_400.0 * self.tx_per_day_after;
            work_before = chain_tx;
            work_after = cheap_after + expensive_after * factor;
        } else {
            let expensive_before = chain_tx - tx_last;
            let expensive_after =
                (now - index.block_time()) as f64 / 86_400.0 * self.tx_per_day_after;
            work_before = tx_last + expensive_before * factor;
            work_after = expensive_after * factor;
        }

        work_before / (work_before + work_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "0000077e5cce889f0920029bf89e8ecb16f7be38e1019c3e21c26d4687ce11f5";
    const CP_100: &str = "000000000029b7b1ea497dd917ba5bb78b8453759acc145918c6446205fd7e49";
    const CP_500: &str = "000000000019c6d8dbd8f693077b5b09dc0df722f4b548ca6cbc9e712aa94935";

    fn set() -> CheckpointSet {
        CheckpointSet::from_table(
            &[(0, GENESIS), (100, CP_100), (500, CP_500)],
            1_463_664_285,
            2_000,
            1_920.0,
        )
        .unwrap()
    }

    fn index_at(height: u64, time: u32, chain_tx: u64) -> BlockIndex {
        BlockIndex {
            height,
            time,
            bits: 0x1e0f_ffff,
            chain_tx,
            prev: None,
        }
    }

    #[test]
    fn rejects_unsorted_tables() {
        let err = CheckpointSet::from_table(&[(5, GENESIS), (5, CP_100)], 0, 0, 0.0);
        assert!(err.is_err());
        let err = CheckpointSet::from_table(&[(5, GENESIS), (2, CP_100)], 0, 0, 0.0);
        assert!(err.is_err());
    }

    #[test]
    fn membership_and_check() {
        let set = set();
        assert!(set.contains(100));
        assert!(!set.contains(101));

        let good: BlockHash = CP_100.parse().unwrap();
        let bad: BlockHash = CP_500.parse().unwrap();
        assert!(set.check(100, &good));
        assert!(!set.check(100, &bad));
        // No entry at that height: anything goes.
        assert!(set.check(101, &bad));
    }

    #[test]
    fn disabled_set_anchors_nothing() {
        let mut set = set();
        set.set_enabled(false);

        let bad: BlockHash = CP_500.parse().unwrap();
        assert!(set.check(100, &bad));
        assert_eq!(set.total_blocks_estimate(), 0);
        assert!(set.last_checkpoint_in(&HashMap::new()).is_none());
    }

    #[test]
    fn total_blocks_estimate_is_last_height() {
        assert_eq!(set().total_blocks_estimate(), 500);
    }

    #[test]
    fn last_checkpoint_scans_descending() {
        let set = set();
        let mut block_index = HashMap::new();

        let genesis_hash: BlockHash = GENESIS.parse().unwrap();
        let cp100_hash: BlockHash = CP_100.parse().unwrap();
        block_index.insert(genesis_hash, Arc::new(index_at(0, 1_000, 1)));
        assert_eq!(
            set.last_checkpoint_in(&block_index).map(|i| i.height),
            Some(0)
        );

        block_index.insert(cp100_hash, Arc::new(index_at(100, 5_500, 150)));
        // Height 500 is absent from the map; the newest present entry wins.
        assert_eq!(
            set.last_checkpoint_in(&block_index).map(|i| i.height),
            Some(100)
        );
    }

    #[test]
    fn progress_is_one_at_the_last_checkpoint() {
        let set = set();
        let index = index_at(500, 1_463_664_285 as u32, 2_000);
        let progress = set.guess_verification_progress_at(&index, true, 1_463_664_285);
        assert_eq!(progress, 1.0);
    }

    #[test]
    fn progress_grows_with_chain_tx() {
        let set = set();
        let now = 1_463_664_285 + 86_400;
        let early = set.guess_verification_progress_at(&index_at(10, 10_000, 100), false, now);
        let late = set.guess_verification_progress_at(&index_at(400, 20_000, 1_900), false, now);
        assert!(early < late);
        assert!((0.0..=1.0).contains(&early));
        assert!((0.0..=1.0).contains(&late));
    }

    #[test]
    fn progress_past_the_checkpoint_matches_the_formula() {
        let set = set();
        let start: i64 = 1_463_664_285;
        let now = start + 10 * 86_400;
        let index_time = start + 5 * 86_400;
        let index = index_at(600, index_time as u32, 3_000);

        let progress = set.guess_verification_progress_at(&index, true, now);
        let factor = SIGCHECK_VERIFICATION_FACTOR;
        let before = 2_000.0 + (3_000.0 - 2_000.0) * factor;
        let after = (now - index_time) as f64 / 86_400.0 * 1_920.0 * factor;
        assert!((progress - before / (before + after)).abs() < 1e-12);
    }
}
