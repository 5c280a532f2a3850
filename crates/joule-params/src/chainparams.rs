// Consensus-critical. Changes require spec update + tests.
//! Per-network chain parameter records.
//!
//! One builder function per network constructs a flat, immutable
//! [`ChainParams`] record; every effective value for a network is visible in
//! its builder. Construction re-derives the genesis hash and Merkle root and
//! refuses to start on any mismatch with the baked-in constants.

use core::fmt;
use core::str::FromStr;

use crate::checkpoints::CheckpointSet;
use crate::consensus::Consensus;
use crate::error::ParamsError;
use crate::seeds::{DnsSeedData, SeedSpec6, FIXED_SEEDS_MAIN, FIXED_SEEDS_TESTNET};
use joule_core::{
    block_header_hash, block_merkle_root, Block, BlockHash, BlockHeader, CoreError, OutPoint,
    Transaction, TxIn, TxOut, Uint256, COIN, SEQUENCE_FINAL,
};

/// The news headline embedded in the genesis coinbase.
const GENESIS_TIMESTAMP_TEXT: &[u8] =
    b"Slashdot 22 Sep 2013 - RSA Warns Developers Not To Use RSA Products";

/// Uncompressed public key paid by the (unspendable) genesis output.
const GENESIS_OUTPUT_PUBKEY: &str =
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

/// Genesis Merkle root, identical on every network (the coinbase does not
/// vary, only the header does).
const GENESIS_MERKLE_ROOT: &str =
    "0x2d089dcbae340c48fef8b956bfe63806c0ffd592d1d333082bfa8da6c4158e83";

const GENESIS_HASH_MAIN: &str =
    "0x0000077e5cce889f0920029bf89e8ecb16f7be38e1019c3e21c26d4687ce11f5";
const GENESIS_HASH_TESTNET: &str =
    "0x00000b82bf616429efb8ef55f10da775bf4a6ea54e72ce9c3d6510dd8af1616e";
const GENESIS_HASH_REGTEST: &str =
    "0x3bea22110f49fdfbb8047ea4296229d7a8303008079c57b218ea3032493b5245";

const ALERT_PUBKEY_MAIN: &str =
    "0404648d5a731fee50c1d7c8044c3c05010a24815d95551de533d63b37f0ee713c2c7a46440dfe3c4d441c3c7353d7291fbacab272406567fa5fa2194d59ef2494";
const ALERT_PUBKEY_TESTNET: &str =
    "048b3afe0ed78e22b6f4cc42f83c287400a253361ae858efdcbe7d24e426e4cca2692408f78aff8406e75c66ff83cef3e1c4cc1552ddd23215d9ff4cd61315e418";

const CHECKPOINTS_MAIN: &[(u64, &str)] = &[
    (0, "0x0000077e5cce889f0920029bf89e8ecb16f7be38e1019c3e21c26d4687ce11f5"),
    (21_998, "0x000000000029b7b1ea497dd917ba5bb78b8453759acc145918c6446205fd7e49"),
    (34_124, "0x000000000019c6d8dbd8f693077b5b09dc0df722f4b548ca6cbc9e712aa94935"),
    (68_073, "0x00000000000ed8b4432909814f2f0a6a699625833d0e4b88fe69a5807f116ae0"),
    (90_016, "0x0000000000156c5c7e98211d60c1bd644ca6cfb0b8ef8b484adc663708d64e5b"),
    (189_383, "0x0000000000013e11c889a3d1ebb0d1833227ffa7fb6d06f7ce42e8d8e1fb7dce"),
    (245_624, "0x00000000000142ce3a43b4304ab6f886c6fd9a806d83a72c344b24a7d24da7fc"),
    (328_190, "0x000000000000f2f362d4f78cad2fa5c03452b90213a29b6be9c94827ce73e1b3"),
    (386_194, "0x000000000001bf145fa37e30dea68857ea0248548f71f02d413ec9a1dd5db3f5"),
    (531_401, "0x000000000000bd31475b4f382103a3f62202dbaf680decb86fa5f8193feda765"),
    (572_400, "0x000000000001d794102460c50af76523672953ca17797624a0c7d6076f7d0023"),
    (661_339, "0x000000000000f17fbee03e58700c625b4a1eca8d41fca6aef505c4d928a88aa4"),
    (957_592, "0x0000000000006461aa6dc976cb61e010b4b794e6ce904146ce3f781df0eeaf60"),
    (1_082_978, "0x000000000000a55c12da9d532c5c19ac53ad7d25b4b67aca77adad8191752e6e"),
    (1_150_502, "0x000000000000660efa747fee365969d424965bfdebbc6feb034863608241e2c3"),
    (1_908_153, "0x00000000000148056ebc887282146af6e0cb267ecd83bb71105afddc5706f066"),
    (2_600_671, "0x0000000000004c3bfb23dca6507f29805f4e42247542e433fdae49d8d5ca6bed"),
];

const CHECKPOINTS_TESTNET: &[(u64, &str)] =
    &[(0, "0x00000b82bf616429efb8ef55f10da775bf4a6ea54e72ce9c3d6510dd8af1616e")];

const CHECKPOINTS_REGTEST: &[(u64, &str)] =
    &[(0, "0x3bea22110f49fdfbb8047ea4296229d7a8303008079c57b218ea3032493b5245")];

/// Network identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Network {
    /// The production network.
    Main,
    /// The public test network.
    Testnet,
    /// The local regression-test network.
    Regtest,
    /// In-process unit-test network (main consensus, mutable knobs).
    Unittest,
}

impl Network {
    /// Canonical string tag for this network.
    pub const fn id(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::Unittest => "unittest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::Unittest),
            other => Err(ParamsError::UnknownNetwork(other.to_owned())),
        }
    }
}

/// Base58 version bytes for the address and key encodings of one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash address prefix.
    pub pubkey_address: Vec<u8>,
    /// Pay-to-script-hash address prefix.
    pub script_address: Vec<u8>,
    /// WIF secret-key prefix.
    pub secret_key: Vec<u8>,
    /// BIP32 extended public key prefix.
    pub ext_public_key: Vec<u8>,
    /// BIP32 extended secret key prefix.
    pub ext_secret_key: Vec<u8>,
}

/// Immutable bundle of everything that defines one network.
#[derive(Clone, Debug)]
pub struct ChainParams {
    /// Which network this record describes.
    pub network: Network,
    /// 4-byte message-start magic prefixing every P2P message.
    pub message_start: [u8; 4],
    /// Public key that signs network alerts.
    pub alert_pubkey: Vec<u8>,
    /// Default P2P listening port.
    pub default_port: u16,
    /// Numeric consensus constants.
    pub consensus: Consensus,
    /// Maximum tip age in seconds before the node reports itself syncing.
    pub max_tip_age: i64,
    /// Height below which blocks are never pruned.
    pub prune_after_height: u64,
    /// The genesis block.
    pub genesis: Block,
    /// Baked-in genesis hash; construction re-derives and compares.
    pub genesis_hash: BlockHash,
    /// DNS seeders queried for peer addresses.
    pub dns_seeds: Vec<DnsSeedData>,
    /// Hard-coded fallback peer addresses.
    pub fixed_seeds: &'static [SeedSpec6],
    /// Base58 version bytes.
    pub base58_prefixes: Base58Prefixes,
    /// Checkpoint anchors for this network.
    pub checkpoints: CheckpointSet,
    /// Whether RPC requires a configured password.
    pub require_rpc_password: bool,
    /// Whether mining requires connected peers.
    pub mining_requires_peers: bool,
    /// Whether expensive consistency checks default to on.
    pub default_consistency_checks: bool,
    /// Whether transactions must be standard.
    pub require_standard: bool,
    /// Whether blocks are mined on demand (no background miner).
    pub mine_blocks_on_demand: bool,
    /// Whether RPC reports this network through the deprecated testnet field.
    pub testnet_to_be_deprecated_field_rpc: bool,
    /// Whether proof-of-work validation is bypassed (unit tests only).
    pub skip_pow_check: bool,
}

// Minimal script building, just enough for the genesis coinbase.

const OP_CHECKSIG: u8 = 0xac;

fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    debug_assert!(data.len() < 0x4c, "direct pushes only");
    script.push(data.len() as u8);
    script.extend_from_slice(data);
}

// Minimal little-endian script-number encoding (positive values only).
fn push_script_num(script: &mut Vec<u8>, mut n: u64) {
    let mut bytes = Vec::new();
    while n > 0 {
        bytes.push((n & 0xff) as u8);
        n >>= 8;
    }
    if let Some(&top) = bytes.last() {
        if top & 0x80 != 0 {
            bytes.push(0);
        }
    }
    push_data(script, &bytes);
}

fn genesis_coinbase() -> Result<Transaction, ParamsError> {
    let mut script_sig = Vec::with_capacity(80);
    push_script_num(&mut script_sig, 486_604_799);
    push_script_num(&mut script_sig, 4);
    push_data(&mut script_sig, GENESIS_TIMESTAMP_TEXT);

    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY).map_err(CoreError::from)?;
    let mut script_pubkey = Vec::with_capacity(pubkey.len() + 2);
    push_data(&mut script_pubkey, &pubkey);
    script_pubkey.push(OP_CHECKSIG);

    Ok(Transaction {
        version: 1,
        inputs: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOut {
            value: 0 * COIN,
            script_pubkey,
        }],
        lock_time: 0,
    })
}

fn genesis_block(time: u32, bits: u32, nonce: u32) -> Result<Block, ParamsError> {
    let txs = vec![genesis_coinbase()?];
    let mut block = Block {
        header: BlockHeader {
            version: 1,
            prev: BlockHash::zero(),
            merkle_root: BlockHash::zero(),
            time,
            bits,
            nonce,
        },
        txs,
    };
    block.header.merkle_root = block_merkle_root(&block);
    Ok(block)
}

fn main_consensus() -> Consensus {
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

fn base58_main() -> Base58Prefixes {
    Base58Prefixes {
        pubkey_address: vec![43],
        script_address: vec![11],
        secret_key: vec![143],
        ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
        ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
    }
}

fn base58_testnet() -> Base58Prefixes {
    Base58Prefixes {
        pubkey_address: vec![83],
        script_address: vec![13],
        secret_key: vec![212],
        ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
        ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
    }
}

impl ChainParams {
    /// Builds the record for `network`.
    pub fn for_network(network: Network) -> Result<Self, ParamsError> {
        match network {
            Network::Main => Self::main(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
            Network::Unittest => Self::unit_test(),
        }
    }

    /// Main network parameters.
    pub fn main() -> Result<Self, ParamsError> {
        let params = Self {
            network: Network::Main,
            // Rarely-used upper-ASCII bytes, invalid as UTF-8, so the magic
            // cannot occur in normal traffic.
            message_start: [0xa5, 0xc0, 0x79, 0x55],
            alert_pubkey: hex::decode(ALERT_PUBKEY_MAIN).map_err(CoreError::from)?,
            default_port: 26_789,
            consensus: main_consensus(),
            max_tip_age: 24 * 60 * 60,
            prune_after_height: 100_000,
            genesis: genesis_block(1_379_833_106, 0x1e0f_ffff, 2_092_237_480)?,
            genesis_hash: GENESIS_HASH_MAIN.parse()?,
            dns_seeds: vec![
                DnsSeedData::new("seed1.jouleco.in", "seed1.jouleco.in"),
                DnsSeedData::new("seed2.jouleco.in", "seed2.jouleco.in"),
                DnsSeedData::new("seed3.jouleco.in", "seed3.jouleco.in"),
                DnsSeedData::new("seed4.jouleco.in", "seed4.jouleco.in"),
                DnsSeedData::new("joulecoin1.chickenkiller.com", "joulecoin1.chickenkiller.com"),
                DnsSeedData::new("joulecoin2.crabdance.com", "joulecoin2.crabdance.com"),
            ],
            fixed_seeds: FIXED_SEEDS_MAIN,
            base58_prefixes: base58_main(),
            checkpoints: CheckpointSet::from_table(CHECKPOINTS_MAIN, 1_495_074_242, 3_142_416, 1_920.0)?,
            require_rpc_password: true,
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: false,
            skip_pow_check: false,
        };
        params.validate()?;
        Ok(params)
    }

    /// Test network parameters.
    pub fn testnet() -> Result<Self, ParamsError> {
        let consensus = Consensus {
            enforce_block_upgrade_majority: 51,
            reject_block_outdated_majority: 75,
            to_check_block_upgrade_majority: 100,
            target_timespan: 14 * 24 * 60 * 60,
            target_spacing: 10 * 60,
            allow_min_difficulty_blocks: true,
            ..main_consensus()
        };
        let params = Self {
            network: Network::Testnet,
            message_start: [0x0a, 0xc0, 0x73, 0x12],
            alert_pubkey: hex::decode(ALERT_PUBKEY_TESTNET).map_err(CoreError::from)?,
            default_port: 26_783,
            consensus,
            max_tip_age: 0x7fff_ffff,
            prune_after_height: 1_000,
            genesis: genesis_block(1_379_797_212, 0x1e0f_ffff, 415_605_766)?,
            genesis_hash: GENESIS_HASH_TESTNET.parse()?,
            dns_seeds: vec![DnsSeedData::new("testseed1.jouleco.in", "testseed1.jouleco.in")],
            fixed_seeds: FIXED_SEEDS_TESTNET,
            base58_prefixes: base58_testnet(),
            checkpoints: CheckpointSet::from_table(CHECKPOINTS_TESTNET, 1_379_797_212, 0, 1_920.0)?,
            require_rpc_password: true,
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
            skip_pow_check: false,
        };
        params.validate()?;
        Ok(params)
    }

    /// Regression-test network parameters.
    pub fn regtest() -> Result<Self, ParamsError> {
        let consensus = Consensus {
            subsidy_halving_interval: 150,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1_000,
            pow_limit: !Uint256::ZERO >> 1,
            target_timespan: 14 * 24 * 60 * 60,
            target_spacing: 10 * 60,
            allow_min_difficulty_blocks: true,
            no_pow_retargeting: true,
            ..main_consensus()
        };
        let params = Self {
            network: Network::Regtest,
            message_start: [0xfa, 0x0f, 0xc5, 0x5c],
            alert_pubkey: hex::decode(ALERT_PUBKEY_TESTNET).map_err(CoreError::from)?,
            default_port: 18_444,
            consensus,
            max_tip_age: 24 * 60 * 60,
            prune_after_height: 1_000,
            genesis: genesis_block(1_296_688_602, 0x207f_ffff, 3)?,
            genesis_hash: GENESIS_HASH_REGTEST.parse()?,
            dns_seeds: Vec::new(),
            fixed_seeds: &[],
            base58_prefixes: base58_testnet(),
            checkpoints: CheckpointSet::from_table(CHECKPOINTS_REGTEST, 0, 0, 0.0)?,
            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            skip_pow_check: false,
        };
        params.validate()?;
        Ok(params)
    }

    /// Unit-test parameters: main-network consensus with mutable knobs.
    pub fn unit_test() -> Result<Self, ParamsError> {
        let mut params = Self::main()?;
        params.network = Network::Unittest;
        params.default_port = 18_445;
        params.dns_seeds = Vec::new();
        params.fixed_seeds = &[];
        params.require_rpc_password = false;
        params.mining_requires_peers = false;
        params.default_consistency_checks = true;
        params.mine_blocks_on_demand = true;
        Ok(params)
    }

    fn validate(&self) -> Result<(), ParamsError> {
        self.consensus.validate()?;

        let computed_hash = block_header_hash(&self.genesis.header);
        if computed_hash != self.genesis_hash {
            return Err(ParamsError::GenesisHashMismatch {
                computed: computed_hash,
                expected: self.genesis_hash,
            });
        }

        let expected_merkle: BlockHash = GENESIS_MERKLE_ROOT.parse()?;
        let computed_merkle = block_merkle_root(&self.genesis);
        if computed_merkle != expected_merkle {
            return Err(ParamsError::GenesisMerkleMismatch {
                computed: computed_merkle,
                expected: expected_merkle,
            });
        }

        if !self.checkpoints.is_empty() {
            match self.checkpoints.expected_hash(0) {
                Some(hash) if hash == self.genesis_hash => {}
                Some(_) => {
                    return Err(ParamsError::InvalidCheckpoints(
                        "entry at height 0 must be the genesis hash",
                    ))
                }
                None => {
                    return Err(ParamsError::InvalidCheckpoints(
                        "table must start at height 0",
                    ))
                }
            }
        }

        Ok(())
    }

    // Knob setters for unit-test parameter copies. The globally installed
    // record is never mutated; tests hold their own copy.

    /// Overrides the subsidy halving interval.
    pub fn set_subsidy_halving_interval(&mut self, blocks: u64) {
        debug_assert_eq!(self.network, Network::Unittest);
        self.consensus.subsidy_halving_interval = blocks;
    }

    /// Overrides the enforce-upgrade majority threshold.
    pub fn set_enforce_block_upgrade_majority(&mut self, blocks: u32) {
        debug_assert_eq!(self.network, Network::Unittest);
        self.consensus.enforce_block_upgrade_majority = blocks;
    }

    /// Overrides the reject-outdated majority threshold.
    pub fn set_reject_block_outdated_majority(&mut self, blocks: u32) {
        debug_assert_eq!(self.network, Network::Unittest);
        self.consensus.reject_block_outdated_majority = blocks;
    }

    /// Overrides the upgrade-majority window.
    pub fn set_to_check_block_upgrade_majority(&mut self, blocks: u32) {
        debug_assert_eq!(self.network, Network::Unittest);
        self.consensus.to_check_block_upgrade_majority = blocks;
    }

    /// Overrides the default-consistency-checks flag.
    pub fn set_default_consistency_checks(&mut self, value: bool) {
        debug_assert_eq!(self.network, Network::Unittest);
        self.default_consistency_checks = value;
    }

    /// Overrides the minimum-difficulty-blocks flag.
    pub fn set_allow_min_difficulty_blocks(&mut self, value: bool) {
        debug_assert_eq!(self.network, Network::Unittest);
        self.consensus.allow_min_difficulty_blocks = value;
    }

    /// Overrides the skip-proof-of-work flag.
    pub fn set_skip_pow_check(&mut self, value: bool) {
        debug_assert_eq!(self.network, Network::Unittest);
        self.skip_pow_check = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_genesis_constants_hold() {
        let params = ChainParams::main().unwrap();
        assert_eq!(
            block_header_hash(&params.genesis.header).to_string(),
            "0000077e5cce889f0920029bf89e8ecb16f7be38e1019c3e21c26d4687ce11f5"
        );
        assert_eq!(
            params.genesis.header.merkle_root.to_string(),
            "2d089dcbae340c48fef8b956bfe63806c0ffd592d1d333082bfa8da6c4158e83"
        );
        assert_eq!(params.genesis.header.time, 1_379_833_106);
        assert_eq!(params.genesis.header.bits, 0x1e0f_ffff);
        assert_eq!(params.genesis.header.nonce, 2_092_237_480);
    }

    #[test]
    fn testnet_genesis_constants_hold() {
        let params = ChainParams::testnet().unwrap();
        assert_eq!(
            block_header_hash(&params.genesis.header).to_string(),
            "00000b82bf616429efb8ef55f10da775bf4a6ea54e72ce9c3d6510dd8af1616e"
        );
        // Same coinbase, same Merkle root as main.
        assert_eq!(
            params.genesis.header.merkle_root,
            ChainParams::main().unwrap().genesis.header.merkle_root
        );
    }

    #[test]
    fn regtest_genesis_recomputes() {
        let params = ChainParams::regtest().unwrap();
        assert_eq!(block_header_hash(&params.genesis.header), params.genesis_hash);
        assert_eq!(params.genesis.header.bits, 0x207f_ffff);
        assert_eq!(params.genesis.header.nonce, 3);
    }

    #[test]
    fn message_start_magic_per_network() {
        assert_eq!(
            ChainParams::main().unwrap().message_start,
            [0xa5, 0xc0, 0x79, 0x55]
        );
        assert_eq!(
            ChainParams::testnet().unwrap().message_start,
            [0x0a, 0xc0, 0x73, 0x12]
        );
        assert_eq!(
            ChainParams::regtest().unwrap().message_start,
            [0xfa, 0x0f, 0xc5, 0x5c]
        );
    }

    #[test]
    fn main_base58_prefixes() {
        let prefixes = ChainParams::main().unwrap().base58_prefixes;
        assert_eq!(prefixes.pubkey_address, vec![43]);
        assert_eq!(prefixes.script_address, vec![11]);
        assert_eq!(prefixes.secret_key, vec![143]);
        assert_eq!(prefixes.ext_public_key, vec![0x04, 0x88, 0xb2, 0x1e]);
        assert_eq!(prefixes.ext_secret_key, vec![0x04, 0x88, 0xad, 0xe4]);
    }

    #[test]
    fn testnet_overrides_only_what_differs() {
        let main = ChainParams::main().unwrap();
        let testnet = ChainParams::testnet().unwrap();

        assert_eq!(testnet.default_port, 26_783);
        assert_eq!(testnet.consensus.target_spacing, 600);
        assert_eq!(testnet.consensus.interval(), 2016);
        assert!(testnet.consensus.allow_min_difficulty_blocks);
        assert!(testnet.testnet_to_be_deprecated_field_rpc);
        // Inherited pieces stay main-valued.
        assert_eq!(
            testnet.consensus.subsidy_halving_interval,
            main.consensus.subsidy_halving_interval
        );
        assert_eq!(testnet.consensus.pow_limit, main.consensus.pow_limit);
    }

    #[test]
    fn regtest_values() {
        let params = ChainParams::regtest().unwrap();
        assert_eq!(params.default_port, 18_444);
        assert_eq!(params.consensus.subsidy_halving_interval, 150);
        assert_eq!(params.consensus.pow_limit, !Uint256::ZERO >> 1);
        assert!(params.consensus.no_pow_retargeting);
        assert!(params.mine_blocks_on_demand);
        assert!(params.dns_seeds.is_empty());
        assert!(params.fixed_seeds.is_empty());
    }

    #[test]
    fn checkpoint_tables_anchor_genesis() {
        for params in [
            ChainParams::main().unwrap(),
            ChainParams::testnet().unwrap(),
            ChainParams::regtest().unwrap(),
        ] {
            assert_eq!(params.checkpoints.expected_hash(0), Some(params.genesis_hash));
        }
        assert_eq!(
            ChainParams::main().unwrap().checkpoints.total_blocks_estimate(),
            2_600_671
        );
    }

    #[test]
    fn unit_test_params_share_main_consensus_until_overridden() {
        let main = ChainParams::main().unwrap();
        let mut unit = ChainParams::unit_test().unwrap();

        assert_eq!(unit.network, Network::Unittest);
        assert_eq!(unit.default_port, 18_445);
        assert_eq!(unit.genesis_hash, main.genesis_hash);
        assert_eq!(
            unit.consensus.subsidy_halving_interval,
            main.consensus.subsidy_halving_interval
        );

        unit.set_subsidy_halving_interval(210_000);
        unit.set_allow_min_difficulty_blocks(true);
        unit.set_skip_pow_check(true);
        assert_eq!(unit.consensus.subsidy_halving_interval, 210_000);
        assert!(unit.consensus.allow_min_difficulty_blocks);
        assert!(unit.skip_pow_check);
    }

    #[test]
    fn network_tags_roundtrip() {
        for network in [Network::Main, Network::Testnet, Network::Regtest, Network::Unittest] {
            assert_eq!(network.id().parse::<Network>().unwrap(), network);
        }
        assert!("lightnet".parse::<Network>().is_err());
    }
}
