#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use anyhow::Result;
use clap::Parser;
use joule_consensus::{check_proof_of_work, encode_compact};
use joule_core::block_header_hash;
use joule_params::select_params_from_flags;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "joule-node", version)]
struct Cli {
    /// Use the test network.
    #[arg(long, conflicts_with = "regtest")]
    testnet: bool,

    /// Use the local regression-test network.
    #[arg(long)]
    regtest: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Builders re-derive the genesis hash and Merkle root; a mismatch with
    // the baked-in constants refuses to start the process.
    let params = select_params_from_flags(cli.testnet, cli.regtest)?;

    let genesis_hash = block_header_hash(&params.genesis.header);
    check_proof_of_work(&genesis_hash, params.genesis.header.bits, params)?;
    info!("genesis proof-of-work verified");

    println!("Starting joule node scaffold");
    println!(
        "Network: {} | magic: {} | port: {}",
        params.network,
        hex::encode(params.message_start),
        params.default_port
    );
    println!("Genesis: {genesis_hash}");
    println!(
        "Pow limit (compact): {:08x}",
        encode_compact(&params.consensus.pow_limit)
    );
    println!(
        "Checkpoints: {} (height estimate {})",
        if params.checkpoints.enabled() { "on" } else { "off" },
        params.checkpoints.total_blocks_estimate()
    );
    println!("DNS seeds: {}", params.dns_seeds.len());

    Ok(())
}
