/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed correlate inputs with their identifier slots
[POS]:    Data layer - request bodies for the correlate endpoints
[UPDATE]: When API schema changes or an input gains a new identifying form
*/

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{Operation, Slot, Validate};

/// Trading pair expressed as base/quote symbols
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(rename = "Base", default)]
    pub base: String,
    #[serde(rename = "Quote", default)]
    pub quote: String,
}

impl Ticker {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Neither base nor quote is set
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.quote.is_empty()
    }
}

/// Correlate a coin from one exchange onto others.
///
/// Fill exactly one form per slot: `exchange_from` or `exchange_from_id`,
/// `exchange_to` or `exchange_to_id`, and one of `exchange_coin`,
/// `exchange_coin_base` or `exchange_coin_id`. ID forms are preferred.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinCorrelateInput {
    #[serde(rename = "ExchangeFrom", default, skip_serializing_if = "String::is_empty")]
    pub exchange_from: String,
    #[serde(rename = "ExchangeFromID", default, skip_serializing_if = "Option::is_none")]
    pub exchange_from_id: Option<Uuid>,

    #[serde(rename = "ExchangeTo", default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_to: Vec<String>,
    #[serde(rename = "ExchangeToID", default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_to_id: Vec<Uuid>,

    #[serde(rename = "ExchangeCoin", default, skip_serializing_if = "String::is_empty")]
    pub exchange_coin: String,
    #[serde(rename = "ExchangeCoinBase", default, skip_serializing_if = "String::is_empty")]
    pub exchange_coin_base: String,
    #[serde(rename = "ExchangeCoinID", default, skip_serializing_if = "Option::is_none")]
    pub exchange_coin_id: Option<Uuid>,
}

impl Validate for CoinCorrelateInput {
    const OPERATION: Operation = Operation::CoinCorrelate;

    fn candidates(&self, slot: Slot) -> Vec<bool> {
        match slot {
            Slot::From => vec![!self.exchange_from.is_empty(), self.exchange_from_id.is_some()],
            Slot::To => vec![!self.exchange_to.is_empty(), !self.exchange_to_id.is_empty()],
            Slot::Subject => vec![
                !self.exchange_coin.is_empty(),
                !self.exchange_coin_base.is_empty(),
                self.exchange_coin_id.is_some(),
            ],
        }
    }
}

/// Correlate a blockchain network from one exchange onto others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkCorrelateInput {
    #[serde(rename = "ExchangeFrom", default, skip_serializing_if = "String::is_empty")]
    pub exchange_from: String,
    #[serde(rename = "ExchangeFromID", default, skip_serializing_if = "Option::is_none")]
    pub exchange_from_id: Option<Uuid>,

    #[serde(rename = "ExchangeTo", default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_to: Vec<String>,
    #[serde(rename = "ExchangeToID", default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_to_id: Vec<Uuid>,

    #[serde(rename = "ExchangeNetwork", default, skip_serializing_if = "String::is_empty")]
    pub exchange_network: String,
    #[serde(rename = "ExchangeNetworkCode", default, skip_serializing_if = "String::is_empty")]
    pub exchange_network_code: String,
    #[serde(rename = "ExchangeNetworkID", default, skip_serializing_if = "Option::is_none")]
    pub exchange_network_id: Option<Uuid>,
}

impl Validate for NetworkCorrelateInput {
    const OPERATION: Operation = Operation::NetworkCorrelate;

    fn candidates(&self, slot: Slot) -> Vec<bool> {
        match slot {
            Slot::From => vec![!self.exchange_from.is_empty(), self.exchange_from_id.is_some()],
            Slot::To => vec![!self.exchange_to.is_empty(), !self.exchange_to_id.is_empty()],
            Slot::Subject => vec![
                !self.exchange_network.is_empty(),
                !self.exchange_network_code.is_empty(),
                self.exchange_network_id.is_some(),
            ],
        }
    }
}

/// Correlate a ticker from one exchange onto others.
///
/// The base/quote pair counts as a single form: it is filled as soon as
/// either symbol is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerCorrelateInput {
    #[serde(rename = "ExchangeFrom", default, skip_serializing_if = "String::is_empty")]
    pub exchange_from: String,
    #[serde(rename = "ExchangeFromID", default, skip_serializing_if = "Option::is_none")]
    pub exchange_from_id: Option<Uuid>,

    #[serde(rename = "ExchangeTo", default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_to: Vec<String>,
    #[serde(rename = "ExchangeToID", default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_to_id: Vec<Uuid>,

    #[serde(rename = "ExchangeTicker", default, skip_serializing_if = "Ticker::is_empty")]
    pub exchange_ticker: Ticker,
    #[serde(rename = "ExchangeTickerID", default, skip_serializing_if = "Option::is_none")]
    pub exchange_ticker_id: Option<Uuid>,
}

impl Validate for TickerCorrelateInput {
    const OPERATION: Operation = Operation::TickerCorrelate;

    fn candidates(&self, slot: Slot) -> Vec<bool> {
        match slot {
            Slot::From => vec![!self.exchange_from.is_empty(), self.exchange_from_id.is_some()],
            Slot::To => vec![!self.exchange_to.is_empty(), !self.exchange_to_id.is_empty()],
            Slot::Subject => vec![
                !self.exchange_ticker.is_empty(),
                self.exchange_ticker_id.is_some(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn some_id() -> Uuid {
        Uuid::parse_str("12345678-1234-1234-1234-123456789012").expect("uuid")
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_coin_input_serializes_only_set_fields() {
        let input = CoinCorrelateInput {
            exchange_from: "Binance".to_string(),
            exchange_to: names(&["MEXC", "Gate.io"]),
            exchange_coin: "BENQI".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&input).expect("serialize");
        assert_eq!(
            value,
            json!({
                "ExchangeFrom": "Binance",
                "ExchangeTo": ["MEXC", "Gate.io"],
                "ExchangeCoin": "BENQI"
            })
        );
    }

    #[test]
    fn test_id_fields_use_canonical_uuid_strings() {
        let input = NetworkCorrelateInput {
            exchange_from_id: Some(some_id()),
            exchange_to_id: vec![some_id()],
            exchange_network_code: "ETH".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&input).expect("serialize");
        assert_eq!(
            value,
            json!({
                "ExchangeFromID": "12345678-1234-1234-1234-123456789012",
                "ExchangeToID": ["12345678-1234-1234-1234-123456789012"],
                "ExchangeNetworkCode": "ETH"
            })
        );
    }

    #[test]
    fn test_ticker_input_serializes_pair() {
        let input = TickerCorrelateInput {
            exchange_from: "Binance".to_string(),
            exchange_to: names(&["MEXC"]),
            exchange_ticker: Ticker::new("QI", "USDT"),
            ..Default::default()
        };

        let value = serde_json::to_value(&input).expect("serialize");
        assert_eq!(value["ExchangeTicker"], json!({"Base": "QI", "Quote": "USDT"}));
        assert!(value.get("ExchangeTickerID").is_none());
    }

    #[test]
    fn test_ticker_pair_with_only_base_is_filled() {
        let input = TickerCorrelateInput {
            exchange_from: "Binance".to_string(),
            exchange_to: names(&["MEXC"]),
            exchange_ticker: Ticker::new("BTC", ""),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_nil_uuid_counts_as_provided() {
        let input = CoinCorrelateInput {
            exchange_from: "Binance".to_string(),
            exchange_from_id: Some(Uuid::nil()),
            exchange_to: names(&["MEXC"]),
            exchange_coin: "BENQI".to_string(),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.slot, Slot::From);
    }

    #[test]
    fn test_network_subject_forms_are_exclusive() {
        let input = NetworkCorrelateInput {
            exchange_from: "Binance".to_string(),
            exchange_to: names(&["MEXC"]),
            exchange_network: "Ethereum".to_string(),
            exchange_network_code: "ETH".to_string(),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.operation, Operation::NetworkCorrelate);
        assert_eq!(err.slot, Slot::Subject);
    }
}
