//! Ballotchain daemon — entry point for running a vote-ledger node.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use ballot_node::{init_logging, BallotNode, LogFormat, NodeConfig};
use ballot_rpc::RpcServer;

#[derive(Parser)]
#[command(name = "ballot-daemon", about = "Ballotchain vote-ledger daemon")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long, env = "BALLOT_CONFIG")]
    config: Option<PathBuf>,

    /// Proof-of-work difficulty (1..=5).
    #[arg(long, env = "BALLOT_DIFFICULTY")]
    difficulty: Option<u32>,

    /// Cap the mining loop at this many iterations instead of mining to
    /// completion. Capped blocks below target are flagged, not rejected.
    #[arg(long, env = "BALLOT_MINING_CAP")]
    mining_cap: Option<u64>,

    /// Port for the JSON API.
    #[arg(long, env = "BALLOT_RPC_PORT")]
    rpc_port: Option<u16>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NodeConfig::from_toml_file(&path.display().to_string())?,
        None => NodeConfig::default(),
    };

    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(max_iterations) = cli.mining_cap {
        config.mining = ballot_node::MiningPolicy::Capped { max_iterations };
    }
    if let Some(port) = cli.rpc_port {
        config.rpc_port = port;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    init_logging(LogFormat::from_config(&config.log_format), &config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!(config = %path.display(), "loaded configuration file");
    }

    let rpc_port = config.rpc_port;
    let node = Arc::new(BallotNode::new(config)?);

    let server = RpcServer::new(rpc_port);
    server.start(node).await?;
    Ok(())
}
