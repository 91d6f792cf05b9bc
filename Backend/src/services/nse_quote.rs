use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::gateway::{GatewayError, QuoteGateway};

/// Client de l'API quote-equity de NSE.
/// NSE refuse les clients qui ne ressemblent pas à un navigateur.
pub struct NseQuoteClient {
    client: Client,
    base_url: String,
}

impl NseQuoteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        // Accept-Encoding (gzip, deflate, br) est ajouté par reqwest, qui décompresse aussi la réponse

        let client = Client::builder()
            .user_agent("Mozilla/5.0")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl QuoteGateway for NseQuoteClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Value, GatewayError> {
        debug!(symbol, "Fetching NSE quote");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("symbol", symbol)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}
