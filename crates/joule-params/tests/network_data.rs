//! Checks of the baked-in network data against known chain history.

use joule_core::{BlockHash, BlockIndex};
use joule_params::{ChainParams, Network};
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn main_checkpoint_heights_and_hashes() {
    let params = ChainParams::main().unwrap();
    let checkpoints = &params.checkpoints;

    assert!(checkpoints.contains(0));
    assert!(checkpoints.contains(189_383));
    assert!(checkpoints.contains(2_600_671));
    assert!(!checkpoints.contains(189_384));

    let expected: BlockHash = "0x0000000000013e11c889a3d1ebb0d1833227ffa7fb6d06f7ce42e8d8e1fb7dce"
        .parse()
        .unwrap();
    assert_eq!(checkpoints.expected_hash(189_383), Some(expected));
    assert!(checkpoints.check(189_383, &expected));
    assert!(!checkpoints.check(189_383, &BlockHash::zero()));

    // Unknown heights accept anything.
    assert!(checkpoints.check(189_384, &BlockHash::zero()));

    assert_eq!(checkpoints.total_blocks_estimate(), 2_600_671);
}

#[test]
fn last_checkpoint_respects_the_block_index() {
    let params = ChainParams::main().unwrap();
    let mut block_index: HashMap<BlockHash, Arc<BlockIndex>> = HashMap::new();

    assert!(params.checkpoints.last_checkpoint_in(&block_index).is_none());

    let at = |height: u64| {
        let hash = params.checkpoints.expected_hash(height).unwrap();
        (
            hash,
            Arc::new(BlockIndex {
                height,
                time: 0,
                bits: 0x1e0f_ffff,
                chain_tx: height,
                prev: None,
            }),
        )
    };

    let (genesis_hash, genesis_index) = at(0);
    block_index.insert(genesis_hash, genesis_index);
    let (mid_hash, mid_index) = at(189_383);
    block_index.insert(mid_hash, mid_index);

    // The newest checkpoint known to the index wins, not the newest overall.
    let found = params.checkpoints.last_checkpoint_in(&block_index).unwrap();
    assert_eq!(found.height, 189_383);
}

#[test]
fn unittest_shares_main_checkpoints() {
    let main = ChainParams::main().unwrap();
    let unit = ChainParams::unit_test().unwrap();
    assert_eq!(unit.network, Network::Unittest);
    assert_eq!(
        unit.checkpoints.expected_hash(2_600_671),
        main.checkpoints.expected_hash(2_600_671)
    );
}

#[test]
fn testnet_base58_prefixes() {
    let prefixes = ChainParams::testnet().unwrap().base58_prefixes;
    assert_eq!(prefixes.pubkey_address, vec![83]);
    assert_eq!(prefixes.script_address, vec![13]);
    assert_eq!(prefixes.secret_key, vec![212]);
    assert_eq!(prefixes.ext_public_key, vec![0x04, 0x35, 0x87, 0xcf]);
    assert_eq!(prefixes.ext_secret_key, vec![0x04, 0x35, 0x83, 0x94]);
    // Regtest inherits the testnet table.
    assert_eq!(ChainParams::regtest().unwrap().base58_prefixes, prefixes);
}

#[test]
fn alert_keys_are_uncompressed_points() {
    let main = ChainParams::main().unwrap();
    let testnet = ChainParams::testnet().unwrap();
    assert_eq!(main.alert_pubkey.len(), 65);
    assert_eq!(main.alert_pubkey[0], 0x04);
    assert_eq!(testnet.alert_pubkey.len(), 65);
    assert_ne!(main.alert_pubkey, testnet.alert_pubkey);
    // Regtest inherits the testnet alert key, like its base58 table.
    assert_eq!(
        ChainParams::regtest().unwrap().alert_pubkey,
        testnet.alert_pubkey
    );
}

#[test]
fn progress_estimate_is_complete_at_the_last_checkpoint() {
    let params = ChainParams::main().unwrap();
    let index = BlockIndex {
        height: 2_600_671,
        time: 1_495_074_242,
        bits: 0x1b01_0000,
        chain_tx: 3_142_416,
        prev: None,
    };
    let progress =
        params
            .checkpoints
            .guess_verification_progress_at(&index, true, 1_495_074_242);
    assert_eq!(progress, 1.0);

    // Live estimate stays within the unit interval.
    let live = params.checkpoints.guess_verification_progress(&index, true);
    assert!((0.0..=1.0).contains(&live));
}
