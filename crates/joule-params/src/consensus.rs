// Consensus-critical. Changes require spec update + tests.
//! Numeric consensus constants shared by every node on a network.

use crate::error::ParamsError;
use joule_core::{BlockHash, Uint256};

/// Immutable bundle of the numeric constants that define block validity.
#[derive(Clone, Debug)]
pub struct Consensus {
    /// Number of blocks between subsidy halvings.
    pub subsidy_halving_interval: u64,
    /// Upgraded blocks, out of the last `to_check_block_upgrade_majority`,
    /// required before the new version becomes mandatory.
    pub enforce_block_upgrade_majority: u32,
    /// Upgraded blocks required before outdated-version blocks are rejected.
    pub reject_block_outdated_majority: u32,
    /// Window size for the block-upgrade majority checks.
    pub to_check_block_upgrade_majority: u32,
    /// Highest (easiest) admissible proof-of-work target.
    pub pow_limit: Uint256,
    /// Difficulty adjustment timespan in seconds.
    pub target_timespan: i64,
    /// Expected spacing between blocks in seconds.
    pub target_spacing: i64,
    /// Whether stalled chains may mine minimum-difficulty blocks.
    pub allow_min_difficulty_blocks: bool,
    /// Whether difficulty retargeting is disabled entirely.
    pub no_pow_retargeting: bool,
    /// Height at which coinbase height commitment becomes mandatory, if ever.
    pub bip34_height: Option<u64>,
    /// Expected block hash at `bip34_height`.
    pub bip34_hash: Option<BlockHash>,
}

impl Consensus {
    /// Number of blocks between retargets, `timespan / spacing`.
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Validates the construction invariants.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.target_spacing <= 0 {
            return Err(ParamsError::InvalidConsensus("target spacing must be positive"));
        }
        if self.target_timespan < self.target_spacing {
            return Err(ParamsError::InvalidConsensus(
                "target timespan must be at least the spacing",
            ));
        }
        if self.pow_limit.is_zero() {
            return Err(ParamsError::InvalidConsensus("pow limit must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Consensus {
        Consensus {
            subsidy_halving_interval: 1_401_600,
            enforce_block_upgrade_majority: 7_500,
            reject_block_outdated_majority: 9_500,
            to_check_block_upgrade_majority: 10_000,
            pow_limit: !Uint256::ZERO >> 20,
            target_timespan: 45,
            target_spacing: 45,
            allow_min_difficulty_blocks: false,
            no_pow_retargeting: false,
            bip34_height: None,
            bip34_hash: None,
        }
    }

    #[test]
    fn interval_is_timespan_over_spacing() {
        assert_eq!(base().interval(), 1);

        let mut two_weeks = base();
        two_weeks.target_timespan = 14 * 24 * 60 * 60;
        two_weeks.target_spacing = 10 * 60;
        assert_eq!(two_weeks.interval(), 2016);
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        assert!(base().validate().is_ok());

        let mut zero_spacing = base();
        zero_spacing.target_spacing = 0;
        assert!(zero_spacing.validate().is_err());

        let mut short_timespan = base();
        short_timespan.target_timespan = 10;
        assert!(short_timespan.validate().is_err());
    }
}
