/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::http::signature::{build_query, RequestSigner};
use crate::http::{BinanceError, Result};
use crate::types::ApiErrorBody;

/// Default base URL (USDT-M futures testnet)
const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key on authenticated requests
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Window in milliseconds within which the exchange accepts a signed request
    pub recv_window: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(10),
            recv_window: 5_000,
        }
    }
}

/// Credentials for authenticated requests
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &masked(&self.api_key))
            .field("api_secret", &"***REDACTED***")
            .finish()
    }
}

fn masked(value: &str) -> String {
    if value.len() > 8 {
        format!("{}...{}", &value[..4], &value[value.len() - 4..])
    } else {
        "***REDACTED***".to_string()
    }
}

/// Main HTTP client for Binance USDT-M Futures
#[derive(Debug)]
pub struct BinanceFuturesClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
    signer: RequestSigner,
    recv_window: u64,
}

impl BinanceFuturesClient {
    /// Create a new client against the default (testnet) base URL
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, DEFAULT_BASE_URL)
    }

    /// Create a new client with custom configuration and base URL
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_key: credentials.api_key,
            signer: RequestSigner::new(&credentials.api_secret),
            recv_window: config.recv_window,
        })
    }

    /// Build a request builder for an endpoint path (query included)
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Issue a signed request.
    ///
    /// Appends `recvWindow` and `timestamp`, signs the canonical query string,
    /// and sends the signed parameters in the query string even for POST.
    pub(crate) async fn signed_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T> {
        params.push(("recvWindow", self.recv_window.to_string()));
        params.push(("timestamp", current_timestamp_ms().to_string()));

        let query = build_query(&params);
        let signed = self.signer.signed_query(&query);

        // The signature stays out of the logs.
        info!(%method, path, query = %query, "sending signed request");

        let builder = self
            .request(method, &format!("{path}?{signed}"))?
            .header(API_KEY_HEADER, self.api_key.as_str());
        self.send_json(path, builder).await
    }

    /// Send a request and decode the JSON response.
    ///
    /// Non-2xx responses are decoded as the exchange error body and surfaced
    /// as [`BinanceError::Api`]; an undecodable error body falls back to the
    /// raw text.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        info!(path, status = status.as_u16(), "response received");
        debug!(path, body = %body, "response body");

        if !status.is_success() {
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => BinanceError::api_error(status, err.code, err.msg),
                Err(_) => BinanceError::api_error(status, i64::from(status.as_u16()), body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|err| BinanceError::InvalidResponse(format!("{err}: {body}")))
    }
}

/// Milliseconds since the Unix epoch, as the exchange expects
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}
