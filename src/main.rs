//! Pearl chain parameter inspector
//!
//! Builds and verifies every network profile, selects the one requested on
//! the command line, and prints it.

use clap::Parser;
use pearl_core::chainparams::{self, Base58Type, ChainParams};
use pearl_core::constants::CHAIN_NAME;
use pearl_core::node::GenesisInfo;
use pearl_core::telemetry;
use tracing::error;

#[derive(Parser)]
#[command(name = "pearl-params", version, about = "Show the active Pearl chain parameters")]
struct Cli {
    /// Use the test network
    #[arg(long)]
    testnet: bool,

    /// Print the active profile as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    telemetry::init_logging(&cli.log_level, cli.log_json)?;

    let registry = chainparams::bootstrap().inspect_err(|e| {
        error!(error = %e, "chain parameters failed verification");
    })?;
    let params = registry.select_from_flag(cli.testnet);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(params)?);
    } else {
        print_summary(params);
    }

    Ok(())
}

fn print_summary(params: &ChainParams) {
    let genesis = GenesisInfo::new(params.genesis_block());

    println!("{} {} parameters", CHAIN_NAME, params.network());
    println!();
    println!("Network:");
    println!("  Magic:        {}", hex::encode(params.message_start()));
    println!("  Port:         {}", params.default_port());
    println!("  RPC Port:     {}", params.rpc_port());
    println!("  Data Dir:     {:?}", params.data_dir());
    println!("  DNS Seeds:    {}", params.dns_seeds().len());
    for seed in params.fixed_seeds() {
        println!("  Fixed Seed:   {} (last seen {})", seed.socket_addr(), seed.last_seen);
    }
    println!();
    println!("Genesis Block:");
    println!("  Hash:         {}", genesis.hash);
    println!("  Merkle Root:  {}", genesis.merkle_root);
    println!("  Timestamp:    {}", genesis.timestamp);
    println!("  Bits:         0x{:08x}", genesis.bits);
    println!("  Nonce:        {}", genesis.nonce);
    println!();
    println!("Consensus:");
    println!("  PoW Limit:    {:#x}", params.proof_of_work_limit());
    println!("  PoS Limit:    {:#x}", params.proof_of_stake_limit());
    println!("  End PoW:      {}", params.end_pow_block());
    println!("  Start PoS:    {}", params.start_pos_block());
    println!();
    println!("Address Prefixes:");
    for kind in Base58Type::ALL {
        println!("  {:<14}{}", format!("{kind:?}:"), hex::encode(params.base58_prefix(kind)));
    }
}
