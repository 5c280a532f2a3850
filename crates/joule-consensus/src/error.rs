//! Consensus error types.

use thiserror::Error;

/// Errors returned by proof-of-work validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsensusError {
    /// Compact `bits` decoded to a negative or overflowing target.
    #[error("invalid compact target bits")]
    InvalidBits,

    /// Target was zero or above the network proof-of-work limit.
    #[error("nBits below minimum work")]
    TargetOutOfRange,

    /// Block hash did not meet the required target.
    #[error("hash doesn't match nBits")]
    InsufficientPoW,
}
