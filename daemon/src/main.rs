//! Atrium recovery daemon — entry point for serving the privilege-restoration
//! endpoint.

mod config;

use atrium_recovery::{LogNotifier, RecoveryService};
use atrium_rpc::RpcServer;
use atrium_store_memory::MemoryAccountStore;
use atrium_types::Timestamp;
use atrium_utils::LogFormat;
use clap::Parser;
use config::ServiceConfig;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "atrium-daemon", about = "Atrium super-admin recovery daemon")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long, env = "ATRIUM_CONFIG")]
    config: Option<PathBuf>,

    /// Port for the RPC server (defaults to the config file value).
    #[arg(long, env = "ATRIUM_PORT")]
    port: Option<u16>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ATRIUM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ATRIUM_LOG_FORMAT")]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_toml_file(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(port) = cli.port {
        config.listen_port = port;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    atrium_utils::init_logging(LogFormat::parse(&config.log_format), &config.log_level);

    let allowlist = config.allowlist()?;
    let references = config.references();
    if allowlist.is_empty() {
        tracing::warn!("recovery allow-list is empty; every attempt will be rejected");
    }
    if !references.is_complete() {
        tracing::error!(
            "recovery reference secrets are incomplete; the endpoint will \
             answer server-misconfigured until deployment supplies them"
        );
    }

    let store = Arc::new(MemoryAccountStore::new());
    let seeds = config.seed_records(Timestamp::now())?;
    if !seeds.is_empty() {
        tracing::info!(count = seeds.len(), "seeding in-memory account store");
        store.seed(seeds);
    }

    let service = RecoveryService::new(
        allowlist,
        references,
        config.throttle_policy(),
        store,
        Arc::new(LogNotifier),
    );

    tracing::info!(port = config.listen_port, "starting recovery RPC server");
    let server = RpcServer::new(config.listen_port, Arc::new(service));
    server.start().await?;

    tracing::info!("atrium daemon exited cleanly");
    Ok(())
}
