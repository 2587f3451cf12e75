/*
[INPUT]:  Parsed command-line arguments
[OUTPUT]: Correlate inputs and JSON-rendered results
[POS]:    CLI layer - maps subcommands onto client operations
[UPDATE]: When adding new subcommands or flags
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use ces_sdk::{
    CesClient, CoinCorrelateInput, NetworkCorrelateInput, Ticker, TickerCorrelateInput,
    cancellable,
};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "ces", version, about = "Crypto Exchange Standard correlation client")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List exchanges known to the service
    Exchanges,
    /// Correlate a coin across exchanges
    Coin {
        #[command(flatten)]
        exchanges: ExchangeArgs,
        #[arg(long)]
        coin: Option<String>,
        #[arg(long = "coin-base")]
        coin_base: Option<String>,
        #[arg(long = "coin-id")]
        coin_id: Option<Uuid>,
    },
    /// Correlate a network across exchanges
    Network {
        #[command(flatten)]
        exchanges: ExchangeArgs,
        #[arg(long)]
        network: Option<String>,
        #[arg(long = "network-code")]
        network_code: Option<String>,
        #[arg(long = "network-id")]
        network_id: Option<Uuid>,
    },
    /// Correlate a ticker across exchanges
    Ticker {
        #[command(flatten)]
        exchanges: ExchangeArgs,
        #[arg(long)]
        base: Option<String>,
        #[arg(long)]
        quote: Option<String>,
        #[arg(long = "ticker-id")]
        ticker_id: Option<Uuid>,
    },
}

/// Source and target exchanges shared by the correlate subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct ExchangeArgs {
    #[arg(long)]
    pub from: Option<String>,
    #[arg(long = "from-id")]
    pub from_id: Option<Uuid>,
    #[arg(long)]
    pub to: Vec<String>,
    #[arg(long = "to-id")]
    pub to_id: Vec<Uuid>,
}

impl Command {
    pub fn coin_input(
        exchanges: ExchangeArgs,
        coin: Option<String>,
        coin_base: Option<String>,
        coin_id: Option<Uuid>,
    ) -> CoinCorrelateInput {
        CoinCorrelateInput {
            exchange_from: exchanges.from.unwrap_or_default(),
            exchange_from_id: exchanges.from_id,
            exchange_to: exchanges.to,
            exchange_to_id: exchanges.to_id,
            exchange_coin: coin.unwrap_or_default(),
            exchange_coin_base: coin_base.unwrap_or_default(),
            exchange_coin_id: coin_id,
        }
    }

    pub fn network_input(
        exchanges: ExchangeArgs,
        network: Option<String>,
        network_code: Option<String>,
        network_id: Option<Uuid>,
    ) -> NetworkCorrelateInput {
        NetworkCorrelateInput {
            exchange_from: exchanges.from.unwrap_or_default(),
            exchange_from_id: exchanges.from_id,
            exchange_to: exchanges.to,
            exchange_to_id: exchanges.to_id,
            exchange_network: network.unwrap_or_default(),
            exchange_network_code: network_code.unwrap_or_default(),
            exchange_network_id: network_id,
        }
    }

    pub fn ticker_input(
        exchanges: ExchangeArgs,
        base: Option<String>,
        quote: Option<String>,
        ticker_id: Option<Uuid>,
    ) -> TickerCorrelateInput {
        TickerCorrelateInput {
            exchange_from: exchanges.from.unwrap_or_default(),
            exchange_from_id: exchanges.from_id,
            exchange_to: exchanges.to,
            exchange_to_id: exchanges.to_id,
            exchange_ticker: Ticker::new(base.unwrap_or_default(), quote.unwrap_or_default()),
            exchange_ticker_id: ticker_id,
        }
    }

    /// Run the subcommand and render its records as JSON.
    ///
    /// The call is abandoned as soon as `shutdown` is cancelled.
    pub async fn run(self, client: &CesClient, shutdown: &CancellationToken) -> Result<Value> {
        let value = match self {
            Command::Exchanges => {
                let records = cancellable(shutdown, client.list_exchanges())
                    .await
                    .context("list exchanges")?;
                serde_json::to_value(records)?
            }
            Command::Coin {
                exchanges,
                coin,
                coin_base,
                coin_id,
            } => {
                let input = Self::coin_input(exchanges, coin, coin_base, coin_id);
                let records = cancellable(shutdown, client.correlate_coin(&input))
                    .await
                    .context("correlate coin")?;
                serde_json::to_value(records)?
            }
            Command::Network {
                exchanges,
                network,
                network_code,
                network_id,
            } => {
                let input = Self::network_input(exchanges, network, network_code, network_id);
                let records = cancellable(shutdown, client.correlate_network(&input))
                    .await
                    .context("correlate network")?;
                serde_json::to_value(records)?
            }
            Command::Ticker {
                exchanges,
                base,
                quote,
                ticker_id,
            } => {
                let input = Self::ticker_input(exchanges, base, quote, ticker_id);
                let records = cancellable(shutdown, client.correlate_ticker(&input))
                    .await
                    .context("correlate ticker")?;
                serde_json::to_value(records)?
            }
        };
        Ok(value)
    }
}
