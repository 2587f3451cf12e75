/*
[INPUT]:  None beyond the client's API key
[OUTPUT]: Exchange metadata (name, id, ticker format, url)
[POS]:    HTTP layer - exchange listing endpoint
[UPDATE]: When the exchange list endpoint or its response format changes
*/

use reqwest::Method;

use crate::http::{CesClient, Result};
use crate::types::ExchangeListOutput;
use crate::validate::Operation;

impl CesClient {
    /// List the exchanges known to the service
    ///
    /// GET /api/v1/exchange/list
    pub async fn list_exchanges(&self) -> Result<Vec<ExchangeListOutput>> {
        self.send_json(Method::GET, Operation::ExchangeList.path(), None)
            .await
    }
}
