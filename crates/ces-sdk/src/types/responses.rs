/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed response records for exchange listing and correlation
[POS]:    Data layer - response bodies returned by the API
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::requests::Ticker;

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Exchange metadata returned by the exchange list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeListOutput {
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: Uuid,
    /// printf-style pattern, e.g. `%s_%s`
    #[serde(rename = "TickerFormat", deserialize_with = "null_as_default")]
    pub ticker_format: String,
    #[serde(rename = "URL", deserialize_with = "null_as_default")]
    pub url: String,
}

/// Equivalent of the queried coin on one target exchange.
///
/// `exchange_coin` and `exchange_coin_base` are the exchange's own naming,
/// not the standard one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinCorrelateOutput {
    #[serde(rename = "ExchangeName", deserialize_with = "null_as_default")]
    pub exchange_name: String,
    #[serde(rename = "ExchangeID", deserialize_with = "null_as_default")]
    pub exchange_id: Uuid,
    #[serde(rename = "ExchangeCoinID", deserialize_with = "null_as_default")]
    pub exchange_coin_id: Uuid,
    #[serde(rename = "ExchangeCoin", deserialize_with = "null_as_default")]
    pub exchange_coin: String,
    #[serde(rename = "ExchangeCoinBase", deserialize_with = "null_as_default")]
    pub exchange_coin_base: String,
    #[serde(rename = "ExchangeCoinUnsafetyScore", deserialize_with = "null_as_default")]
    pub unsafety_score: i64,
}

/// Equivalent of the queried network on one target exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkCorrelateOutput {
    #[serde(rename = "ExchangeName", deserialize_with = "null_as_default")]
    pub exchange_name: String,
    #[serde(rename = "ExchangeID", deserialize_with = "null_as_default")]
    pub exchange_id: Uuid,
    #[serde(rename = "ExchangeNetworkID", deserialize_with = "null_as_default")]
    pub exchange_network_id: Uuid,
    #[serde(rename = "ExchangeNetwork", deserialize_with = "null_as_default")]
    pub exchange_network: String,
    #[serde(rename = "ExchangeNetworkCode", deserialize_with = "null_as_default")]
    pub exchange_network_code: String,
    #[serde(rename = "ExchangeNetworkUnsafetyScore", deserialize_with = "null_as_default")]
    pub unsafety_score: i64,
}

/// Equivalent of the queried ticker on one target exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerCorrelateOutput {
    #[serde(rename = "ExchangeName", deserialize_with = "null_as_default")]
    pub exchange_name: String,
    #[serde(rename = "ExchangeID", deserialize_with = "null_as_default")]
    pub exchange_id: Uuid,
    #[serde(rename = "ExchangeTickerID", deserialize_with = "null_as_default")]
    pub exchange_ticker_id: Uuid,
    #[serde(rename = "ExchangeTicker", deserialize_with = "null_as_default")]
    pub exchange_ticker: Ticker,
}
