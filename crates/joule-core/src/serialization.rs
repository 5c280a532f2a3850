// Consensus-critical. Changes require spec update + tests.
//! Bit-exact wire encoding and hashing.
//!
//! Rule: integers are fixed-width little-endian, collection lengths are
//! CompactSize var-ints, hashes are double-SHA256. The genesis-hash network
//! constants depend on every byte produced here.

use crate::constants::*;
use crate::types::{Block, BlockHash, BlockHeader, Transaction, TxId};
use sha2::{Digest, Sha256};

/// Appends a CompactSize var-int.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

fn write_script(out: &mut Vec<u8>, script: &[u8]) {
    write_compact_size(out, script.len() as u64);
    out.extend_from_slice(script);
}

/// Serializes a transaction.
pub fn encode_tx(tx: &Transaction) -> Vec<u8> {
    let mut out = Vec::with_capacity(256);
    out.extend_from_slice(&tx.version.to_le_bytes());
    write_compact_size(&mut out, tx.inputs.len() as u64);
    for input in &tx.inputs {
        out.extend_from_slice(input.prevout.txid.as_bytes());
        out.extend_from_slice(&input.prevout.index.to_le_bytes());
        write_script(&mut out, &input.script_sig);
        out.extend_from_slice(&input.sequence.to_le_bytes());
    }
    write_compact_size(&mut out, tx.outputs.len() as u64);
    for output in &tx.outputs {
        out.extend_from_slice(&output.value.to_le_bytes());
        write_script(&mut out, &output.script_pubkey);
    }
    out.extend_from_slice(&tx.lock_time.to_le_bytes());
    out
}

/// Serializes a block header to its 80-byte wire form.
pub fn encode_header(header: &BlockHeader) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE);
    out.extend_from_slice(&header.version.to_le_bytes());
    out.extend_from_slice(header.prev.as_bytes());
    out.extend_from_slice(header.merkle_root.as_bytes());
    out.extend_from_slice(&header.time.to_le_bytes());
    out.extend_from_slice(&header.bits.to_le_bytes());
    out.extend_from_slice(&header.nonce.to_le_bytes());
    out
}

/// Double-SHA256.
pub fn double_sha256(bytes: &[u8]) -> [u8; HASH_LEN] {
    let first = Sha256::digest(bytes);
    let second = Sha256::digest(first);
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&second);
    out
}

/// Canonical transaction id: double-SHA256 over the serialized transaction.
pub fn txid(tx: &Transaction) -> TxId {
    BlockHash(double_sha256(&encode_tx(tx)))
}

/// Canonical block hash: double-SHA256 over the 80-byte header.
pub fn block_header_hash(header: &BlockHeader) -> BlockHash {
    BlockHash(double_sha256(&encode_header(header)))
}

/// Merkle root over transaction ids; an odd node is paired with itself.
///
/// Returns the zero hash for an empty slice.
pub fn merkle_root(txids: &[TxId]) -> BlockHash {
    if txids.is_empty() {
        return BlockHash::zero();
    }
    let mut level: Vec<BlockHash> = txids.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            let mut buf = [0u8; 2 * HASH_LEN];
            buf[..HASH_LEN].copy_from_slice(left.as_bytes());
            buf[HASH_LEN..].copy_from_slice(right.as_bytes());
            next.push(BlockHash(double_sha256(&buf)));
        }
        level = next;
    }
    level[0]
}

/// Merkle root over a block's transactions.
pub fn block_merkle_root(block: &Block) -> BlockHash {
    let txids: Vec<TxId> = block.txs.iter().map(txid).collect();
    merkle_root(&txids)
}
