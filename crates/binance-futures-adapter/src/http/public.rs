/*
[INPUT]:  Endpoint paths without authentication requirements
[OUTPUT]: Connectivity and server time data
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{BinanceFuturesClient, Result};
use crate::types::ServerTime;

impl BinanceFuturesClient {
    /// Connectivity check
    ///
    /// GET /fapi/v1/ping
    pub async fn ping(&self) -> Result<()> {
        let builder = self.request(Method::GET, "/fapi/v1/ping")?;
        let _body: serde_json::Value = self.send_json("/fapi/v1/ping", builder).await?;
        Ok(())
    }

    /// Exchange server time
    ///
    /// GET /fapi/v1/time
    pub async fn server_time(&self) -> Result<ServerTime> {
        let builder = self.request(Method::GET, "/fapi/v1/time")?;
        self.send_json("/fapi/v1/time", builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BinanceFuturesClient, ClientConfig, Credentials};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> BinanceFuturesClient {
        let credentials = Credentials {
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
        };
        BinanceFuturesClient::with_config_and_base_url(
            credentials,
            ClientConfig::default(),
            base_url,
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_ping() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v1/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.ping().await.expect("ping failed");
    }

    #[tokio::test]
    async fn test_server_time() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v1/time"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "serverTime": 1_699_717_326_462_u64,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let response = client.server_time().await.expect("server_time failed");
        assert_eq!(response.server_time, 1_699_717_326_462);
    }
}
