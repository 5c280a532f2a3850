//! Parameter construction and selection errors.

use joule_core::{BlockHash, CoreError};
use thiserror::Error;

/// Errors raised while building or selecting chain parameters.
///
/// Any of these at startup means the process must not come up.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The network tag did not name a known network.
    #[error("unknown network tag: {0}")]
    UnknownNetwork(String),

    /// Mutually exclusive network flags were both set.
    #[error("conflicting network flags: -testnet and -regtest")]
    ConflictingNetworkFlags,

    /// Chain parameters were already selected for a different network.
    #[error("chain parameters already selected")]
    AlreadySelected,

    /// A consensus field violated a construction invariant.
    #[error("invalid consensus parameter: {0}")]
    InvalidConsensus(&'static str),

    /// The rebuilt genesis block does not hash to the baked-in value.
    #[error("genesis hash mismatch: computed {computed}, expected {expected}")]
    GenesisHashMismatch {
        /// Hash recomputed from the constructed genesis block.
        computed: BlockHash,
        /// Baked-in expected hash.
        expected: BlockHash,
    },

    /// The rebuilt genesis Merkle root does not match the baked-in value.
    #[error("genesis merkle root mismatch: computed {computed}, expected {expected}")]
    GenesisMerkleMismatch {
        /// Merkle root recomputed from the genesis transactions.
        computed: BlockHash,
        /// Baked-in expected root.
        expected: BlockHash,
    },

    /// The checkpoint table violated a structural invariant.
    #[error("invalid checkpoint table: {0}")]
    InvalidCheckpoints(&'static str),

    /// A baked-in constant failed to parse.
    #[error("invalid baked-in constant: {0}")]
    BadConstant(#[from] CoreError),
}
