#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Joule core: canonical types, fixed-width 256-bit arithmetic, and the
//! bit-exact wire encoding used for block and transaction hashing.
//!
//! This crate is the bottom of the consensus stack. It intentionally does
//! **not** know about networks, difficulty rules, or checkpoints; those live
//! in `joule-params` and `joule-consensus`.

pub mod chain;
pub mod constants;
pub mod serialization;
pub mod types;
pub mod uint256;

pub use chain::*;
pub use constants::*;
pub use serialization::*;
pub use types::*;
pub use uint256::*;
