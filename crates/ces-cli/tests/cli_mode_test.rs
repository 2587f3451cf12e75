/*
[INPUT]:  Command-line arguments, YAML config files, mock HTTP server
[OUTPUT]: Test results for argument mapping and subcommand execution
[POS]:    Integration tests - CLI
[UPDATE]: When CLI flags or subcommands change
*/

use std::io::Write;

use ces_cli::{Cli, CliConfig, Command};
use ces_sdk::{CesClient, ClientConfig, Ticker, Validate};
use clap::Parser;
use tokio_test::assert_ok;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_coin_flags_map_to_input() {
    let cli = assert_ok!(Cli::try_parse_from([
        "ces", "coin", "--from", "Binance", "--to", "MEXC", "--to", "Gate.io", "--coin", "BENQI",
    ]));

    let Command::Coin {
        exchanges,
        coin,
        coin_base,
        coin_id,
    } = cli.command
    else {
        panic!("expected coin subcommand");
    };
    let input = Command::coin_input(exchanges, coin, coin_base, coin_id);

    assert_eq!(input.exchange_from, "Binance");
    assert_eq!(input.exchange_to, vec!["MEXC".to_string(), "Gate.io".to_string()]);
    assert_eq!(input.exchange_coin, "BENQI");
    assert!(input.exchange_coin_id.is_none());
    assert!(input.validate().is_ok());
}

#[test]
fn test_ticker_flags_with_ids() {
    let from = Uuid::from_bytes([1; 16]);
    let to = Uuid::from_bytes([2; 16]);
    let cli = assert_ok!(Cli::try_parse_from([
        "ces".to_string(),
        "ticker".to_string(),
        "--from-id".to_string(),
        from.to_string(),
        "--to-id".to_string(),
        to.to_string(),
        "--base".to_string(),
        "BTC".to_string(),
        "--quote".to_string(),
        "USDT".to_string(),
    ]));

    let Command::Ticker {
        exchanges,
        base,
        quote,
        ticker_id,
    } = cli.command
    else {
        panic!("expected ticker subcommand");
    };
    let input = Command::ticker_input(exchanges, base, quote, ticker_id);

    assert_eq!(input.exchange_from_id, Some(from));
    assert_eq!(input.exchange_to_id, vec![to]);
    assert_eq!(input.exchange_ticker, Ticker::new("BTC", "USDT"));
}

#[test]
fn test_invalid_uuid_flag_rejected() {
    let result = Cli::try_parse_from(["ces", "network", "--from-id", "nope", "--to", "MEXC"]);
    assert!(result.is_err());
}

#[test]
fn test_config_file_loading() {
    let mut file = assert_ok!(tempfile::NamedTempFile::new());
    assert_ok!(writeln!(
        file,
        "api_key: from-file\nbase_url: http://localhost:9000\ntimeout_secs: 5"
    ));

    let config = assert_ok!(CliConfig::from_file(file.path()));
    assert_eq!(config.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.timeout_secs, Some(5));
}

#[tokio::test]
async fn test_network_subcommand_runs_against_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/network/correlate"))
        .and(header("CES_API_KEY", "cli-key"))
        .and(body_json(serde_json::json!({
            "ExchangeFrom": "Binance",
            "ExchangeTo": ["MEXC"],
            "ExchangeNetworkCode": "ETH"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "ExchangeName": "MEXC",
                "ExchangeID": "12345678-1234-1234-1234-123456789012",
                "ExchangeNetworkID": "11111111-1234-1234-1234-123456789012",
                "ExchangeNetwork": "Ethereum",
                "ExchangeNetworkCode": "ETH",
                "ExchangeNetworkUnsafetyScore": 1
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let cli = assert_ok!(Cli::try_parse_from([
        "ces", "network", "--from", "Binance", "--to", "MEXC", "--network-code", "ETH",
    ]));
    let client = assert_ok!(CesClient::with_config(
        "cli-key",
        ClientConfig::with_base_url(server.uri())
    ));

    let value = assert_ok!(cli.command.run(&client, &CancellationToken::new()).await);
    assert_eq!(value[0]["ExchangeName"], "MEXC");
    assert_eq!(value[0]["ExchangeNetworkUnsafetyScore"], 1);
}

#[tokio::test]
async fn test_cancelled_token_stops_subcommand() {
    let client = assert_ok!(CesClient::with_config(
        "cli-key",
        ClientConfig::with_base_url("http://127.0.0.1:1")
    ));
    let token = CancellationToken::new();
    token.cancel();

    let err = Command::Exchanges.run(&client, &token).await.unwrap_err();
    let cause = err.downcast_ref::<ces_sdk::CesError>().expect("CesError cause");
    assert!(cause.is_cancelled());
}
