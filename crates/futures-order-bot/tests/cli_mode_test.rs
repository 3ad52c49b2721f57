use std::process::Command;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn order_command(args: &[&str]) -> Command {
    // Get the path to the binary from Cargo
    let binary_path = env!("CARGO_BIN_EXE_futures-order-bot");
    let log_dir = std::env::temp_dir().join("futures-order-bot-test-logs");

    let mut command = Command::new(binary_path);
    command
        .args(args)
        .arg("--log-dir")
        .arg(log_dir)
        .env_remove("BINANCE_API_KEY")
        .env_remove("BINANCE_API_SECRET")
        .env("RUST_LOG", "error"); // Reduce log output for test
    command
}

const MARKET_ORDER: &[&str] = &[
    "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "0.01",
];

#[test]
fn missing_credentials_exit_with_usage_error() {
    let output = order_command(MARKET_ORDER)
        .output()
        .expect("Failed to start futures-order-bot binary");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Stdout: {}\nStderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing API credentials"), "Stderr: {stderr}");
}

#[test]
fn invalid_symbol_exits_with_usage_error() {
    let output = order_command(&[
        "--symbol", "BTC", "--side", "BUY", "--type", "MARKET", "--quantity", "0.01",
    ])
    .env("BINANCE_API_KEY", "test-key")
    .env("BINANCE_API_SECRET", "test-secret")
    .output()
    .expect("Failed to start futures-order-bot binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("symbol"), "Stderr: {stderr}");
}

#[test]
fn limit_without_price_exits_with_usage_error() {
    let output = order_command(&[
        "--symbol", "BTCUSDT", "--side", "BUY", "--type", "LIMIT", "--quantity", "0.01",
    ])
    .env("BINANCE_API_KEY", "test-key")
    .env("BINANCE_API_SECRET", "test-secret")
    .output()
    .expect("Failed to start futures-order-bot binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("price"), "Stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn places_order_against_mock_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 4055551747_i64,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "order-1",
            "price": "0",
            "avgPrice": "0.00000",
            "origQty": "0.01",
            "executedQty": "0",
            "timeInForce": "GTC",
            "type": "MARKET",
            "side": "BUY",
            "stopPrice": "0",
            "updateTime": 1699717326462_i64,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = order_command(MARKET_ORDER)
        .args(["--base-url", &server.uri()])
        .env("BINANCE_API_KEY", "test-key")
        .env("BINANCE_API_SECRET", "test-secret")
        .output()
        .expect("Failed to start futures-order-bot binary");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Stdout: {}\nStderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Order request summary:"), "Stdout: {stdout}");
    assert!(stdout.contains(r#""orderId": 4055551747"#), "Stdout: {stdout}");
    assert!(stdout.contains("Success: order placed."), "Stdout: {stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn exchange_rejection_exits_with_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -2019,
            "msg": "Margin is insufficient.",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = order_command(MARKET_ORDER)
        .args(["--base-url", &server.uri()])
        .env("BINANCE_API_KEY", "test-key")
        .env("BINANCE_API_SECRET", "test-secret")
        .output()
        .expect("Failed to start futures-order-bot binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-2019"), "Stderr: {stderr}");
    assert!(stderr.contains("Margin is insufficient."), "Stderr: {stderr}");
}
