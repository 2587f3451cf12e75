/*
[INPUT]:  CLI arguments, optional YAML configuration, CES_API_KEY, Ctrl-C
[OUTPUT]: Correlation results printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or cancellation handling
*/

use anyhow::{Context, Result, anyhow};
use ces_cli::{Cli, CliConfig};
use ces_sdk::API_KEY_HEADER;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = match &args.config_path {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    config.apply_overrides(std::env::var(API_KEY_HEADER).ok(), args.base_url.clone());
    info!(base_url = %config.base_url, "configuration loaded");

    let client = config.build_client()?;

    let shutdown = CancellationToken::new();
    setup_signal_handler(shutdown.clone());

    let records = args.command.run(&client, &shutdown).await?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn setup_signal_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT, cancelling request");
        shutdown.cancel();
    });
}
