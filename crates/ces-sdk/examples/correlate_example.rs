/*
[INPUT]:  CES_API_KEY environment variable
[OUTPUT]: Exchange list and coin/network/ticker correlations printed to stdout
[POS]:    Examples - end-to-end tour of the public endpoints
[UPDATE]: When adding new endpoints
*/

use ces_sdk::*;

/// Example: look up exchanges, then correlate a coin, a network and a ticker
/// from Binance onto MEXC and Gate.io.
#[tokio::main]
async fn main() {
    println!("=== CES Correlate Example ===\n");

    let api_key = std::env::var(API_KEY_HEADER).unwrap_or_else(|_| "your_key".to_string());
    let client = match CesClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    println!("Listing exchanges...");
    match client.list_exchanges().await {
        Ok(exchanges) => {
            for exchange in exchanges {
                println!("  {} ({}) format={}", exchange.name, exchange.id, exchange.ticker_format);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    let targets = vec!["MEXC".to_string(), "Gate.io".to_string()];

    println!("\nCorrelating coin BENQI...");
    let coin = CoinCorrelateInput {
        exchange_from: "Binance".to_string(),
        exchange_to: targets.clone(),
        exchange_coin: "BENQI".to_string(),
        ..Default::default()
    };
    match client.correlate_coin(&coin).await {
        Ok(records) => println!("✓ Coins: {:?}", records),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nCorrelating network ETH...");
    let network = NetworkCorrelateInput {
        exchange_from: "Binance".to_string(),
        exchange_to: targets.clone(),
        exchange_network_code: "ETH".to_string(),
        ..Default::default()
    };
    match client.correlate_network(&network).await {
        Ok(records) => println!("✓ Networks: {:?}", records),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nCorrelating ticker QI/USDT...");
    let ticker = TickerCorrelateInput {
        exchange_from: "Binance".to_string(),
        exchange_to: targets,
        exchange_ticker: Ticker::new("QI", "USDT"),
        ..Default::default()
    };
    match client.correlate_ticker(&ticker).await {
        Ok(records) => println!("✓ Tickers: {:?}", records),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Correlate example complete");
}
