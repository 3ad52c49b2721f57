/*
[INPUT]:  Validated order requests with signed query parameters
[OUTPUT]: Order responses and confirmation
[POS]:    HTTP layer - trading endpoints (require API key + signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::{BinanceFuturesClient, Result};
use crate::types::{NewOrderRequest, NewOrderResponse};

impl BinanceFuturesClient {
    /// Place a single order
    ///
    /// POST /fapi/v1/order
    /// Requires: X-MBX-APIKEY header + HMAC-SHA256 signed query string
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<NewOrderResponse> {
        self.signed_request(Method::POST, "/fapi/v1/order", request.to_params())
            .await
    }
}
