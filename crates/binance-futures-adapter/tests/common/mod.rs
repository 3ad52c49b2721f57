/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::{BinanceFuturesClient, ClientConfig, Credentials, OrderParams};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_SECRET: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
pub fn test_client(base_url: &str) -> BinanceFuturesClient {
    let credentials = Credentials {
        api_key: TEST_API_KEY.to_string(),
        api_secret: TEST_API_SECRET.to_string(),
    };
    BinanceFuturesClient::with_config_and_base_url(credentials, ClientConfig::default(), base_url)
        .expect("client init")
}

/// Raw parameters for a plain market order
pub fn market_order(symbol: &str) -> OrderParams {
    OrderParams {
        symbol: symbol.to_string(),
        side: "BUY".to_string(),
        order_type: "MARKET".to_string(),
        quantity: "0.01".parse().expect("quantity"),
        ..OrderParams::default()
    }
}
