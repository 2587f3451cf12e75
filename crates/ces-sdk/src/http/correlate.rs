/*
[INPUT]:  Coin, network and ticker correlate inputs
[OUTPUT]: Equivalent subject on each requested target exchange
[POS]:    HTTP layer - correlate endpoints (validate, encode, send, decode)
[UPDATE]: When adding a correlate endpoint or changing its request flow
*/

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{CesClient, Result};
use crate::types::{
    CoinCorrelateInput, CoinCorrelateOutput, NetworkCorrelateInput, NetworkCorrelateOutput,
    TickerCorrelateInput, TickerCorrelateOutput,
};
use crate::validate::Validate;

/// A correlate request body together with the records it yields
pub trait CorrelateRequest: Validate + Serialize {
    type Output: DeserializeOwned;
}

impl CorrelateRequest for CoinCorrelateInput {
    type Output = CoinCorrelateOutput;
}

impl CorrelateRequest for NetworkCorrelateInput {
    type Output = NetworkCorrelateOutput;
}

impl CorrelateRequest for TickerCorrelateInput {
    type Output = TickerCorrelateOutput;
}

impl CesClient {
    /// Validate, encode and POST a correlate request.
    ///
    /// Invalid input fails before anything is sent. Records come back in
    /// server order.
    pub async fn correlate<R: CorrelateRequest>(&self, input: &R) -> Result<Vec<R::Output>> {
        input.validate()?;
        let body = serde_json::to_vec(input)?;
        self.send_json(Method::POST, R::OPERATION.path(), Some(body))
            .await
    }

    /// Find the name and base of a coin on other exchanges
    ///
    /// POST /api/v1/coin/correlate
    pub async fn correlate_coin(
        &self,
        input: &CoinCorrelateInput,
    ) -> Result<Vec<CoinCorrelateOutput>> {
        self.correlate(input).await
    }

    /// Find the name and code of a network on other exchanges
    ///
    /// POST /api/v1/network/correlate
    pub async fn correlate_network(
        &self,
        input: &NetworkCorrelateInput,
    ) -> Result<Vec<NetworkCorrelateOutput>> {
        self.correlate(input).await
    }

    /// Find the base and quote of a ticker on other exchanges
    ///
    /// POST /api/v1/ticker/correlate
    pub async fn correlate_ticker(
        &self,
        input: &TickerCorrelateInput,
    ) -> Result<Vec<TickerCorrelateOutput>> {
        self.correlate(input).await
    }
}
