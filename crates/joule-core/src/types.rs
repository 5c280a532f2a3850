// Consensus-critical. Changes require spec update + tests.
//! Canonical protocol types.
//!
//! This module defines the consensus-visible data structures: block hashes,
//! the 80-byte block header, and the minimal transaction model needed to
//! express and hash the genesis coinbase.

use crate::constants::*;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors related to parsing, validation, or construction of core types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Hex string had an unexpected byte length.
    #[error("invalid hex length: expected {expected} bytes, got {got} bytes")]
    InvalidHexLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes provided.
        got: usize,
    },

    /// Hex decoding failed.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A value violated protocol constraints.
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// A 256-bit block or transaction hash.
///
/// Bytes are stored in hash-function output order (little-endian when read
/// as a 256-bit integer). `Display` and `FromStr` use the reversed-hex
/// convention of the original chain, so printed hashes match explorer
/// output and the baked-in network constants.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockHash(pub [u8; HASH_LEN]);

impl BlockHash {
    /// Returns an all-zero hash.
    pub const fn zero() -> Self {
        Self([0u8; HASH_LEN])
    }

    /// True if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_LEN]
    }

    /// Returns the underlying bytes in storage (little-endian) order.
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({self})")
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl From<[u8; HASH_LEN]> for BlockHash {
    fn from(value: [u8; HASH_LEN]) -> Self {
        Self(value)
    }
}

impl From<BlockHash> for [u8; HASH_LEN] {
    fn from(value: BlockHash) -> Self {
        value.0
    }
}

impl FromStr for BlockHash {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        if bytes.len() != HASH_LEN {
            return Err(CoreError::InvalidHexLength {
                expected: HASH_LEN,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; HASH_LEN];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Self(arr))
    }
}

/// Transaction identifier type.
pub type TxId = BlockHash;

/// Block header containing all consensus-critical metadata.
///
/// Serializes to exactly 80 bytes; its double-SHA256 is the block hash.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockHeader {
    /// Block format version.
    pub version: i32,
    /// Hash of the previous block, zero for genesis.
    pub prev: BlockHash,
    /// Merkle root over the block's transaction ids.
    pub merkle_root: BlockHash,
    /// Block timestamp (Unix seconds).
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

impl BlockHeader {
    /// Block time widened for timespan arithmetic.
    pub fn block_time(&self) -> i64 {
        i64::from(self.time)
    }
}

/// Reference to a transaction output.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutPoint {
    /// Transaction the output belongs to.
    pub txid: TxId,
    /// Output index within that transaction.
    pub index: u32,
}

impl OutPoint {
    /// The null outpoint used by coinbase inputs.
    pub const fn null() -> Self {
        Self {
            txid: BlockHash::zero(),
            index: u32::MAX,
        }
    }
}

/// Transaction input.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TxIn {
    /// Output being spent; null for coinbase.
    pub prevout: OutPoint,
    /// Unlocking script bytes.
    pub script_sig: Vec<u8>,
    /// Input sequence number.
    pub sequence: u32,
}

/// Transaction output.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TxOut {
    /// Output value in atomic units.
    pub value: u64,
    /// Locking script bytes.
    pub script_pubkey: Vec<u8>,
}

/// Transaction container.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transaction {
    /// Transaction format version.
    pub version: i32,
    /// Inputs; a coinbase has exactly one with a null prevout.
    pub inputs: Vec<TxIn>,
    /// Outputs.
    pub outputs: Vec<TxOut>,
    /// Absolute lock time.
    pub lock_time: u32,
}

/// Full block (header + transactions).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    /// Block header.
    pub header: BlockHeader,
    /// Transactions included in this block.
    pub txs: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_hash_hex_roundtrip_reverses_bytes() {
        let s = "0000077e5cce889f0920029bf89e8ecb16f7be38e1019c3e21c26d4687ce11f5";
        let hash: BlockHash = s.parse().unwrap();
        // Stored little-endian: the displayed leading zeros are the high bytes.
        assert_eq!(hash.as_bytes()[31], 0x00);
        assert_eq!(hash.as_bytes()[0], 0xf5);
        assert_eq!(hash.to_string(), s);

        let prefixed: BlockHash = format!("0x{s}").parse().unwrap();
        assert_eq!(prefixed, hash);
    }

    #[test]
    fn block_hash_rejects_bad_input() {
        assert!("zz".parse::<BlockHash>().is_err());
        assert!("00ff".parse::<BlockHash>().is_err());
    }

    #[test]
    fn null_outpoint() {
        let null = OutPoint::null();
        assert!(null.txid.is_zero());
        assert_eq!(null.index, u32::MAX);
    }
}
