// Consensus-critical. Changes require spec update + tests.
//! Compact difficulty target encoding.
//!
//! A 256-bit target is stored in block headers as a 32-bit "compact" value:
//! an 8-bit byte-length exponent and a 23-bit mantissa, radix 256, offset 3.
//! Bit 23 of the mantissa is a sign flag; a negative target is meaningless
//! for difficulty and is rejected, as is any encoding whose value exceeds
//! 256 bits. A zero mantissa decodes to zero with no flags raised; range
//! rejection of zero targets is the caller's business.

use crate::error::ConsensusError;
use joule_core::Uint256;
use thiserror::Error;

/// Flag conditions detected while decoding a compact target.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CompactError {
    /// The sign bit was set on a non-zero mantissa.
    #[error("negative compact target")]
    Negative,

    /// The decoded value exceeds 256 bits.
    #[error("compact target overflows 256 bits")]
    Overflow,
}

impl From<CompactError> for ConsensusError {
    fn from(_: CompactError) -> Self {
        ConsensusError::InvalidBits
    }
}

/// Decodes compact `bits` into a full 256-bit target.
pub fn decode_compact(bits: u32) -> Result<Uint256, CompactError> {
    let size = bits >> 24;
    let word = bits & 0x007f_ffff;

    if word != 0 && (bits & 0x0080_0000) != 0 {
        return Err(CompactError::Negative);
    }
    if word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32))
    {
        return Err(CompactError::Overflow);
    }

    let target = if size <= 3 {
        Uint256::from_u64(u64::from(word >> (8 * (3 - size))))
    } else {
        Uint256::from_u64(u64::from(word)) << (8 * (size - 3))
    };
    Ok(target)
}

/// Encodes a 256-bit target into its canonical compact form.
///
/// The mantissa is renormalized whenever its top bit would collide with the
/// sign flag, so this never produces a negative encoding.
pub fn encode_compact(target: &Uint256) -> u32 {
    let mut size = target.byte_len();
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (*target >> (8 * (size - 3))).low_u64() as u32
    };

    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    (size << 24) | (compact & 0x007f_ffff)
}
