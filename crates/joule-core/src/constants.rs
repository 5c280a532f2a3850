//! Protocol-wide constants.

/// Length in bytes of a 32-byte hash.
pub const HASH_LEN: usize = 32;

/// Serialized size of a block header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Number of atomic units per one coin.
pub const COIN: u64 = 100_000_000;

/// Sequence number marking a transaction input as final.
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;
