// Consensus-critical. Changes require spec update + tests.
//! Proof-of-work validation and per-block chainwork.
//!
//! The PoW condition is `hash <= target(bits)`, with the block hash read as
//! a little-endian 256-bit integer. Chainwork is the expected number of
//! hashes a block's target represents, `floor(2^256 / (target + 1))`.

use crate::compact::decode_compact;
use crate::error::ConsensusError;
use joule_core::{BlockHash, BlockIndex, Uint256};
use joule_params::ChainParams;
use log::warn;

/// Reads a block hash as a 256-bit little-endian integer.
pub fn hash_as_uint(hash: &BlockHash) -> Uint256 {
    Uint256::from_le_bytes(*hash.as_bytes())
}

/// Validates that `hash` satisfies the proof-of-work claimed by `bits`.
///
/// Rejects negative, overflowing, zero, and above-limit targets before the
/// hash comparison. Networks with `skip_pow_check` (unit tests) accept
/// everything.
pub fn check_proof_of_work(
    hash: &BlockHash,
    bits: u32,
    params: &ChainParams,
) -> Result<(), ConsensusError> {
    if params.skip_pow_check {
        return Ok(());
    }

    let target = decode_compact(bits)?;
    if target.is_zero() || target > params.consensus.pow_limit {
        warn!("check_proof_of_work: nBits {bits:08x} below minimum work");
        return Err(ConsensusError::TargetOutOfRange);
    }

    if hash_as_uint(hash) > target {
        warn!("check_proof_of_work: hash {hash} doesn't match nBits {bits:08x}");
        return Err(ConsensusError::InsufficientPoW);
    }

    Ok(())
}

/// Chainwork contributed by one block: `floor(2^256 / (target + 1))`.
///
/// 2^256 itself is not representable, but it equals
/// `((2^256 - target - 1) / (target + 1)) + 1`, i.e.
/// `(~target / (target + 1)) + 1` in 256-bit arithmetic. Blocks whose bits
/// do not decode to a usable target contribute zero work, not an error;
/// chainwork sums must treat them as weightless.
pub fn block_proof(index: &BlockIndex) -> Uint256 {
    let target = match decode_compact(index.bits) {
        Ok(target) if !target.is_zero() => target,
        _ => return Uint256::ZERO,
    };
    let (quotient, _) = (!target).div_rem(&target.wrapping_add_u64(1));
    quotient.wrapping_add_u64(1)
}
