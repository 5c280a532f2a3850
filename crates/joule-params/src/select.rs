//! Process-wide active parameter selection.
//!
//! The active [`ChainParams`] record is installed exactly once at startup
//! and is immutable afterwards; [`params`] before selection is a programmer
//! error and aborts. Pure consensus functions take `&ChainParams` explicitly;
//! this handle exists for wire-level code that cannot thread it through.

use std::sync::OnceLock;

use crate::chainparams::{ChainParams, Network};
use crate::error::ParamsError;

static ACTIVE_PARAMS: OnceLock<ChainParams> = OnceLock::new();

/// Installs the parameters for `network` as the process-wide record.
///
/// Re-selecting the already-active network is a no-op; selecting a
/// different one fails. Construction errors surface before anything is
/// installed.
pub fn select_params(network: Network) -> Result<&'static ChainParams, ParamsError> {
    let built = ChainParams::for_network(network)?;
    match ACTIVE_PARAMS.set(built) {
        Ok(()) => Ok(params()),
        Err(_) => {
            let active = params();
            if active.network == network {
                Ok(active)
            } else {
                Err(ParamsError::AlreadySelected)
            }
        }
    }
}

/// The active parameters.
///
/// Panics if called before [`select_params`].
pub fn params() -> &'static ChainParams {
    match ACTIVE_PARAMS.get() {
        Some(active) => active,
        None => panic!("params() called before select_params()"),
    }
}

/// The active parameters, or `None` before selection.
pub fn try_params() -> Option<&'static ChainParams> {
    ACTIVE_PARAMS.get()
}

/// Resolves the network from the command-line flag pair.
///
/// The flags are mutually exclusive; both set is a configuration error.
pub fn network_from_flags(testnet: bool, regtest: bool) -> Result<Network, ParamsError> {
    match (testnet, regtest) {
        (true, true) => Err(ParamsError::ConflictingNetworkFlags),
        (true, false) => Ok(Network::Testnet),
        (false, true) => Ok(Network::Regtest),
        (false, false) => Ok(Network::Main),
    }
}

/// Resolves the network from the flag pair and installs its parameters.
pub fn select_params_from_flags(
    testnet: bool,
    regtest: bool,
) -> Result<&'static ChainParams, ParamsError> {
    let network = network_from_flags(testnet, regtest)?;
    select_params(network)
}
