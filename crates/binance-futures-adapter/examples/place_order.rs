/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET environment variables
[OUTPUT]: A small market order placed on the futures testnet
[POS]:    Example - minimal adapter usage
[UPDATE]: When the order placement API changes
*/

use binance_futures_adapter::{BinanceFuturesClient, Credentials, OrderParams, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let credentials = Credentials {
        api_key: std::env::var("BINANCE_API_KEY").expect("BINANCE_API_KEY not set"),
        api_secret: std::env::var("BINANCE_API_SECRET").expect("BINANCE_API_SECRET not set"),
    };
    let client = BinanceFuturesClient::new(credentials)?;

    client.ping().await?;
    println!("connectivity ok, server time {}", client.server_time().await?.server_time);

    let request = OrderParams {
        symbol: "BTCUSDT".to_string(),
        side: "BUY".to_string(),
        order_type: "MARKET".to_string(),
        quantity: "0.001".parse().expect("quantity"),
        ..OrderParams::default()
    }
    .validate()?;

    let response = client.new_order(&request).await?;
    println!(
        "order {} {:?} executed_qty={}",
        response.order_id, response.status, response.executed_qty
    );

    Ok(())
}
