//! In-memory chain index node.
//!
//! `BlockIndex` is the view of an accepted block that the difficulty engine
//! and checkpoint logic walk: height, timestamp, compact target, cumulative
//! transaction count, and a parent link. Nodes are shared behind `Arc` so
//! the consensus engine can be called from any thread.

use std::sync::Arc;

/// A node in the in-memory chain of accepted block headers.
#[derive(Clone, Debug)]
pub struct BlockIndex {
    /// Height of this block; genesis is 0.
    pub height: u64,
    /// Block timestamp (Unix seconds).
    pub time: u32,
    /// Compact difficulty target the block was mined against.
    pub bits: u32,
    /// Cumulative number of transactions up to and including this block.
    pub chain_tx: u64,
    /// Parent node; `None` only at genesis.
    pub prev: Option<Arc<BlockIndex>>,
}

impl BlockIndex {
    /// Block time widened for timespan arithmetic.
    pub fn block_time(&self) -> i64 {
        i64::from(self.time)
    }

    /// Walks `steps` parents back, stopping early at genesis.
    pub fn ancestor(&self, steps: u64) -> Option<&BlockIndex> {
        let mut index = self;
        for _ in 0..steps {
            index = index.prev.as_deref()?;
        }
        Some(index)
    }
}
