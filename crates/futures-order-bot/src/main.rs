/*
[INPUT]:  CLI arguments and environment credentials
[OUTPUT]: A single placed futures order with console summary and exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the order flow
*/

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use binance_futures_adapter::{
    BinanceError, BinanceFuturesClient, ClientConfig, Credentials, OrderParams,
};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::EnvFilter;

use futures_order_bot::summary::{RequestSummary, ResponseSummary};

#[derive(Parser, Debug)]
#[command(
    name = "futures-order-bot",
    version,
    about = "Place a single order on Binance USDT-M Futures (MARKET, LIMIT, STOP_MARKET)"
)]
struct Cli {
    /// Trading symbol, e.g. BTCUSDT
    #[arg(long)]
    symbol: String,
    /// Order side: BUY or SELL
    #[arg(long)]
    side: String,
    /// Order type: MARKET, LIMIT or STOP_MARKET
    #[arg(long = "type", value_name = "TYPE")]
    order_type: String,
    /// Order quantity
    #[arg(long)]
    quantity: Decimal,
    /// Limit price (required for LIMIT orders)
    #[arg(long)]
    price: Option<Decimal>,
    /// Trigger price (required for STOP_MARKET orders)
    #[arg(long = "stop-price")]
    stop_price: Option<Decimal>,
    /// Client order id (generated when omitted)
    #[arg(long = "client-order-id")]
    client_order_id: Option<String>,
    /// Base URL (default: testnet)
    #[arg(long = "base-url", default_value = "https://testnet.binancefuture.com")]
    base_url: String,
    /// Window in milliseconds the exchange accepts the signed request for
    #[arg(long = "recv-window", default_value_t = 5_000)]
    recv_window: u64,
    /// Directory for the rolling log file
    #[arg(long = "log-dir", value_name = "PATH", default_value = "logs")]
    log_dir: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// API key (or set BINANCE_API_KEY)
    #[arg(long = "api-key")]
    api_key: Option<String>,
    /// API secret (or set BINANCE_API_SECRET)
    #[arg(long = "api-secret")]
    api_secret: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // Keep the non-blocking writer guard alive for the whole run.
    let _guard = match init_tracing(&args.log_dir, &args.log_level) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "order placement failed");
            eprintln!("Failure: {err:#}");
            exit_code_for(&err)
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let credentials = resolve_credentials(&args)?;

    let request = OrderParams {
        symbol: args.symbol,
        side: args.side,
        order_type: args.order_type,
        quantity: args.quantity,
        price: args.price,
        stop_price: args.stop_price,
        client_order_id: args.client_order_id,
    }
    .validate()?;

    info!(
        symbol = request.symbol(),
        side = %request.side(),
        order_type = %request.order_type(),
        "order validated"
    );

    let config = ClientConfig {
        recv_window: args.recv_window,
        ..ClientConfig::default()
    };
    let client = BinanceFuturesClient::with_config_and_base_url(
        credentials,
        config,
        &args.base_url,
    )?;

    let summary = RequestSummary::new(&request, &args.base_url);
    println!("Order request summary:");
    println!("{}", summary.render().context("render request summary")?);

    let response = client.new_order(&request).await?;
    info!(
        order_id = response.order_id,
        status = ?response.status,
        "order placed"
    );

    println!();
    println!("Order response details:");
    println!(
        "{}",
        ResponseSummary::from(&response)
            .render()
            .context("render response summary")?
    );
    println!();
    println!("Success: order placed.");

    Ok(())
}

fn resolve_credentials(args: &Cli) -> Result<Credentials, BinanceError> {
    let api_key = args.api_key.clone().or_else(|| env_var("BINANCE_API_KEY"));
    let api_secret = args
        .api_secret
        .clone()
        .or_else(|| env_var("BINANCE_API_SECRET"));

    match (api_key, api_secret) {
        (Some(api_key), Some(api_secret)) => Ok(Credentials {
            api_key,
            api_secret,
        }),
        _ => Err(BinanceError::MissingCredentials),
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn init_tracing(log_dir: &Path, log_level: &str) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "futures-order-bot.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over --log-level when set.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("invalid log level")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok(guard)
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<BinanceError>() {
        Some(err) if err.is_usage_error() => ExitCode::from(2),
        _ => ExitCode::from(1),
    }
}
