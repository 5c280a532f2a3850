// Consensus-critical. Changes require spec update + tests.
//! Difficulty retargeting.
//!
//! The chain retargets every block against a trailing averaging window,
//! with three parameter regimes selected by block height. The regime
//! cutover heights and window sizes are hard consensus constants; there is
//! no smoothing across a cutover.

use crate::compact::{decode_compact, encode_compact};
use joule_core::{BlockHeader, BlockIndex};
use joule_params::ChainParams;
use log::debug;

/// Target retarget timespan in seconds.
pub const TARGET_TIMESPAN: i64 = 45;
/// Target block spacing in seconds.
pub const TARGET_SPACING: i64 = 45;
/// Blocks per retarget.
pub const INTERVAL: i64 = TARGET_TIMESPAN / TARGET_SPACING;

/// First regime-change height.
pub const HEIGHT_V2: u64 = 32_000;
/// Second regime-change height.
pub const HEIGHT_V3: u64 = 90_000;

const AVERAGING_INTERVAL_V1: i64 = INTERVAL * 160;
const AVERAGING_TARGET_TIMESPAN_V1: i64 = AVERAGING_INTERVAL_V1 * TARGET_SPACING;

const AVERAGING_INTERVAL_V2: i64 = INTERVAL * 8;
const AVERAGING_TARGET_TIMESPAN_V2: i64 = AVERAGING_INTERVAL_V2 * TARGET_SPACING;

const AVERAGING_INTERVAL_V3: i64 = AVERAGING_INTERVAL_V2;
const AVERAGING_TARGET_TIMESPAN_V3: i64 = AVERAGING_TARGET_TIMESPAN_V2;

const MAX_ADJUST_DOWN_V1: i64 = 10;
const MAX_ADJUST_UP_V1: i64 = 1;

const MAX_ADJUST_DOWN_V2: i64 = 1;
const MAX_ADJUST_UP_V2: i64 = 1;

const MAX_ADJUST_DOWN_V3: i64 = 3;
const MAX_ADJUST_UP_V3: i64 = 1;

const MIN_ACTUAL_TIMESPAN_V1: i64 = AVERAGING_TARGET_TIMESPAN_V1 * (100 - MAX_ADJUST_UP_V1) / 100;
const MAX_ACTUAL_TIMESPAN_V1: i64 = AVERAGING_TARGET_TIMESPAN_V1 * (100 + MAX_ADJUST_DOWN_V1) / 100;

const MIN_ACTUAL_TIMESPAN_V2: i64 = AVERAGING_TARGET_TIMESPAN_V2 * (100 - MAX_ADJUST_UP_V2) / 100;
const MAX_ACTUAL_TIMESPAN_V2: i64 = AVERAGING_TARGET_TIMESPAN_V2 * (100 + MAX_ADJUST_DOWN_V2) / 100;

const MIN_ACTUAL_TIMESPAN_V3: i64 = AVERAGING_TARGET_TIMESPAN_V3 * (100 - MAX_ADJUST_UP_V3) / 100;
const MAX_ACTUAL_TIMESPAN_V3: i64 = AVERAGING_TARGET_TIMESPAN_V3 * (100 + MAX_ADJUST_DOWN_V3) / 100;

struct Regime {
    averaging_interval: i64,
    averaging_target_timespan: i64,
    min_actual_timespan: i64,
    max_actual_timespan: i64,
}

fn regime_for(next_height: u64) -> Regime {
    if next_height >= HEIGHT_V3 {
        Regime {
            averaging_interval: AVERAGING_INTERVAL_V3,
            averaging_target_timespan: AVERAGING_TARGET_TIMESPAN_V3,
            min_actual_timespan: MIN_ACTUAL_TIMESPAN_V3,
            max_actual_timespan: MAX_ACTUAL_TIMESPAN_V3,
        }
    } else if next_height >= HEIGHT_V2 {
        Regime {
            averaging_interval: AVERAGING_INTERVAL_V2,
            averaging_target_timespan: AVERAGING_TARGET_TIMESPAN_V2,
            min_actual_timespan: MIN_ACTUAL_TIMESPAN_V2,
            max_actual_timespan: MAX_ACTUAL_TIMESPAN_V2,
        }
    } else {
        Regime {
            averaging_interval: AVERAGING_INTERVAL_V1,
            averaging_target_timespan: AVERAGING_TARGET_TIMESPAN_V1,
            min_actual_timespan: MIN_ACTUAL_TIMESPAN_V1,
            max_actual_timespan: MAX_ACTUAL_TIMESPAN_V1,
        }
    }
}

/// Computes the compact target required of the block following `tip`.
///
/// `header` is the incoming block; only its timestamp participates, and only
/// on networks that allow minimum-difficulty blocks. A missing `tip` (the
/// genesis block) and a chain shorter than the largest averaging window both
/// yield the proof-of-work limit.
///
/// Panics if the chain below `tip` is shorter than `tip.height` claims.
pub fn next_work_required(
    tip: Option<&BlockIndex>,
    header: &BlockHeader,
    params: &ChainParams,
) -> u32 {
    let pow_limit_bits = encode_compact(&params.consensus.pow_limit);

    let Some(tip) = tip else {
        return pow_limit_bits;
    };
    if tip.height + 1 < AVERAGING_INTERVAL_V1 as u64 {
        return pow_limit_bits;
    }

    if params.consensus.allow_min_difficulty_blocks {
        // If the new block's timestamp is more than twice the spacing ahead
        // of the tip, a minimum-difficulty block is allowed.
        if header.block_time() > tip.block_time() + params.consensus.target_spacing * 2 {
            return pow_limit_bits;
        }
        // Otherwise return the last non-minimum-difficulty target. The walk
        // stops at retarget boundaries; per-network interval, not the
        // engine's, so it still terminates early on slow-spacing networks.
        let interval = params.consensus.interval() as u64;
        let mut index = tip;
        while let Some(prev) = index.prev.as_deref() {
            if index.height % interval == 0 || index.bits != pow_limit_bits {
                break;
            }
            index = prev;
        }
        return index.bits;
    }

    if params.consensus.no_pow_retargeting {
        return tip.bits;
    }

    let next_height = tip.height + 1;
    let regime = regime_for(next_height);

    // Go back by what we want to be a full averaging interval of blocks.
    let first = match tip.ancestor(regime.averaging_interval as u64 - 1) {
        Some(first) => first,
        None => panic!("chain below height {} is too short to retarget", tip.height),
    };

    let mut actual_timespan = tip.block_time() - first.block_time();
    debug!("  actual timespan = {actual_timespan} before bounds");
    actual_timespan = actual_timespan.clamp(regime.min_actual_timespan, regime.max_actual_timespan);

    let prev_target = match decode_compact(tip.bits) {
        Ok(target) => target,
        // A tip with undecodable bits cannot have been accepted; fall back
        // to the easiest target rather than propagate garbage.
        Err(_) => return pow_limit_bits,
    };

    let mut target = prev_target.mul_div_u64(
        actual_timespan as u64,
        regime.averaging_target_timespan as u64,
    );
    if target > params.consensus.pow_limit {
        target = params.consensus.pow_limit;
    }

    let bits = encode_compact(&target);
    debug!("retarget at height {next_height}: actual timespan = {actual_timespan}");
    debug!("before: {:08x}  {}", tip.bits, prev_target);
    debug!("after:  {bits:08x}  {target}");
    bits
}
