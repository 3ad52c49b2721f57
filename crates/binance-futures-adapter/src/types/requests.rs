/*
[INPUT]:  Raw order parameters collected by the CLI
[OUTPUT]: Validated immutable order requests
[POS]:    Data layer - input validation and canonical order parameters
[UPDATE]: When order fields or validation rules change
*/

use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use super::enums::{OrderType, Side, TimeInForce};
use crate::http::{BinanceError, Result};

const SYMBOL_MIN_LEN: usize = 6;
const SYMBOL_MAX_LEN: usize = 20;
const CLIENT_ORDER_ID_MAX_LEN: usize = 36;

/// Raw order parameters as collected from the command line.
///
/// Side and type arrive as free-form strings; [`OrderParams::validate`] turns
/// the whole bundle into a [`NewOrderRequest`] or rejects it.
#[derive(Debug, Clone, Default)]
pub struct OrderParams {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub client_order_id: Option<String>,
}

impl OrderParams {
    /// Normalize and validate into an immutable request.
    pub fn validate(self) -> Result<NewOrderRequest> {
        let symbol = normalize_symbol(&self.symbol)?;
        let side: Side = self.side.parse()?;
        let order_type: OrderType = self.order_type.parse()?;

        ensure_positive("quantity", Some(self.quantity))?;

        let price = match order_type {
            OrderType::Limit => {
                ensure_positive("price", self.price)?;
                self.price
            }
            _ => {
                if self.price.is_some() {
                    warn!(%symbol, %order_type, "price ignored for non-LIMIT order");
                }
                None
            }
        };

        let stop_price = match order_type {
            OrderType::StopMarket => {
                ensure_positive("stop-price", self.stop_price)?;
                self.stop_price
            }
            _ => {
                if self.stop_price.is_some() {
                    warn!(%symbol, %order_type, "stop-price ignored for non-STOP_MARKET order");
                }
                None
            }
        };

        let client_order_id = match self.client_order_id {
            Some(id) => validate_client_order_id(id)?,
            None => Uuid::new_v4().to_string(),
        };

        // The exchange requires timeInForce on LIMIT orders.
        let time_in_force = match order_type {
            OrderType::Limit => Some(TimeInForce::Gtc),
            _ => None,
        };

        Ok(NewOrderRequest {
            symbol,
            side,
            order_type,
            quantity: self.quantity,
            price,
            stop_price,
            time_in_force,
            client_order_id,
        })
    }
}

/// A validated order request.
///
/// Only constructible through [`OrderParams::validate`]; fields are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderRequest {
    symbol: String,
    side: Side,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
    stop_price: Option<Decimal>,
    time_in_force: Option<TimeInForce>,
    client_order_id: String,
}

impl NewOrderRequest {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn stop_price(&self) -> Option<Decimal> {
        self.stop_price
    }

    pub fn time_in_force(&self) -> Option<TimeInForce> {
        self.time_in_force
    }

    pub fn client_order_id(&self) -> &str {
        &self.client_order_id
    }

    /// Parameter pairs in the order they are signed and sent.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.to_string()),
            ("type", self.order_type.to_string()),
            ("quantity", self.quantity.to_string()),
        ];
        if let Some(tif) = self.time_in_force {
            params.push(("timeInForce", tif.to_string()));
        }
        if let Some(price) = self.price {
            params.push(("price", price.to_string()));
        }
        if let Some(stop_price) = self.stop_price {
            params.push(("stopPrice", stop_price.to_string()));
        }
        params.push(("newClientOrderId", self.client_order_id.clone()));
        params
    }
}

fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_ascii_uppercase();
    let len_ok = (SYMBOL_MIN_LEN..=SYMBOL_MAX_LEN).contains(&symbol.len());
    let chars_ok = symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !len_ok || !chars_ok {
        return Err(BinanceError::validation(format!(
            "symbol must be uppercase alphanumeric like BTCUSDT \
             ({SYMBOL_MIN_LEN}-{SYMBOL_MAX_LEN} chars), got {raw:?}"
        )));
    }
    Ok(symbol)
}

fn ensure_positive(name: &str, value: Option<Decimal>) -> Result<()> {
    match value {
        None => Err(BinanceError::validation(format!("{name} is required"))),
        Some(v) if v <= Decimal::ZERO => Err(BinanceError::validation(format!(
            "{name} must be > 0, got {v}"
        ))),
        Some(_) => Ok(()),
    }
}

fn validate_client_order_id(id: String) -> Result<String> {
    let chars_ok = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '/' | '_' | '-'));
    if id.is_empty() || id.len() > CLIENT_ORDER_ID_MAX_LEN || !chars_ok {
        return Err(BinanceError::validation(format!(
            "client order id must be 1-{CLIENT_ORDER_ID_MAX_LEN} chars of \
             [a-zA-Z0-9._:/-], got {id:?}"
        )));
    }
    Ok(id)
}
