//! valuectl: deploy, read and update a value contract over JSON-RPC.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI (create | get | set)
//!        │
//!        ▼
//!   contract ──────▶ abi (selector, string codec, call data)
//!        │
//!        ▼
//!   transaction (submit → poll receipt → timeout / cancel)
//!        │
//!        ▼
//!   rpc (JSON-RPC 2.0 envelope → HTTP POST) ──────▶ node
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use valuectl::config::load_config;
use valuectl::lifecycle::{signals, Cancellation};
use valuectl::observability::init_logging;
use valuectl::{HttpTransport, RpcClient, TransactionFlow, ValueContract};

#[derive(Parser)]
#[command(name = "valuectl")]
#[command(about = "Deploy, read and update a value contract over JSON-RPC", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node JSON-RPC endpoint (overrides config and ETH_RPC_URL).
    #[arg(short, long)]
    rpc_url: Option<String>,

    /// Sender address (overrides config and MY_ETH_ADDR).
    #[arg(short, long)]
    from: Option<String>,

    /// Seconds to wait for a transaction to be mined.
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy compiled contract bytecode read from a file
    Create { bytecode_file: PathBuf },
    /// Read the stored value
    Get { contract: String },
    /// Replace the stored value
    Set { contract: String, value: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), |config| {
        if let Some(url) = &cli.rpc_url {
            config.node.rpc_url = url.clone();
        }
        if let Some(from) = &cli.from {
            config.account.address = from.clone();
        }
        if let Some(secs) = cli.timeout_secs {
            config.confirmation.timeout_secs = secs;
        }
    })?;

    init_logging(&config.observability.log_level);
    tracing::debug!(
        rpc_url = %config.node.rpc_url,
        sender = %config.account.address,
        timeout_secs = config.confirmation.timeout_secs,
        "Configuration loaded"
    );

    let cancellation = Cancellation::new();
    signals::cancel_on_ctrl_c(cancellation.clone());

    let transport = HttpTransport::new(&config.node.rpc_url, config.node.request_timeout())?;
    let flow = TransactionFlow::from_config(RpcClient::new(transport), &config)
        .with_cancellation(cancellation.clone());
    let contract = ValueContract::new(&flow, config.confirmation.timeout());

    match cancellation.run_until_cancelled(run(cli.command, &contract)).await {
        Some(result) => result,
        None => {
            eprintln!("interrupted");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
}

/// Exit status after Ctrl-C, following the 128 + SIGINT shell convention.
const INTERRUPTED_EXIT_CODE: i32 = 130;

async fn run(
    command: Commands,
    contract: &ValueContract<'_, HttpTransport>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Create { bytecode_file } => {
            let bytecode = fs::read_to_string(&bytecode_file).map_err(|e| {
                format!("Failed to read {}: {}", bytecode_file.display(), e)
            })?;

            let tx_hash = contract.submit_deployment(&bytecode).await?;
            println!("created contract on tx {}", tx_hash);
            println!("waiting for contract to be mined...");
            let deployment = contract.await_deployment(tx_hash).await?;
            println!("took {:?} to mine block with contract", deployment.latency);
            println!("new contract address is {}", deployment.contract_address);
        }
        Commands::Get { contract: address } => {
            let value = contract.get_value(&address).await?;
            println!("{}", value);
        }
        Commands::Set {
            contract: address,
            value,
        } => {
            println!("setting value in {} to be {}", address, value);
            let tx_hash = contract.submit_update(&address, &value).await?;
            println!("created transaction: {}", tx_hash);
            println!("waiting for transaction to be mined...");
            let update = contract.await_update(tx_hash).await?;
            println!(
                "transaction mined in block {}",
                update.block_hash.as_deref().unwrap_or("<unknown>")
            );
        }
    }

    Ok(())
}
