/*
[INPUT]:  Validated requests and exchange order responses
[OUTPUT]: JSON summaries printed to the console
[POS]:    Reporting layer - human-facing output
[UPDATE]: When summary fields change
*/

use binance_futures_adapter::{
    NewOrderRequest, NewOrderResponse, OrderStatus, OrderType, Side,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// What the tool is about to send, echoed back to the operator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub client_order_id: String,
    pub base_url: String,
}

impl RequestSummary {
    pub fn new(request: &NewOrderRequest, base_url: &str) -> Self {
        Self {
            symbol: request.symbol().to_string(),
            side: request.side(),
            order_type: request.order_type(),
            quantity: request.quantity(),
            price: request.price(),
            stop_price: request.stop_price(),
            client_order_id: request.client_order_id().to_string(),
            base_url: base_url.to_string(),
        }
    }

    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The fields of the order response worth showing on the console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSummary {
    pub order_id: i64,
    pub client_order_id: String,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub price: Decimal,
    pub avg_price: Decimal,
    pub executed_qty: Decimal,
}

impl From<&NewOrderResponse> for ResponseSummary {
    fn from(response: &NewOrderResponse) -> Self {
        Self {
            order_id: response.order_id,
            client_order_id: response.client_order_id.clone(),
            symbol: response.symbol.clone(),
            side: response.side,
            order_type: response.order_type,
            status: response.status,
            price: response.price,
            avg_price: response.avg_price,
            executed_qty: response.executed_qty,
        }
    }
}

impl ResponseSummary {
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
