use crate::ExchangeConnector;
use async_trait::async_trait;
use common::{
    models::{Credentials, Exchange, TickerPrice},
    Error, Result,
};
use serde::Deserialize;
use tracing::{debug, error};

pub const BINANCE_API_URL: &str = "https://api.binance.com";
pub const BINANCE_TESTNET_API_URL: &str = "https://testnet.binance.vision";

pub struct BinanceConnector {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    testnet: bool,
}

impl BinanceConnector {
    /// Create a client for production or the spot testnet.
    pub fn new(credentials: Credentials, testnet: bool) -> Self {
        let base_url = if testnet {
            BINANCE_TESTNET_API_URL
        } else {
            BINANCE_API_URL
        };
        Self::with_base_url(credentials, testnet, base_url)
    }

    /// Create a client against an explicit REST host.
    pub fn with_base_url(
        credentials: Credentials,
        testnet: bool,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            testnet,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

// Body Binance sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct BinanceErrorBody {
    code: i64,
    msg: String,
}

#[async_trait]
impl ExchangeConnector for BinanceConnector {
    fn exchange(&self) -> Exchange {
        Exchange::Binance
    }

    fn is_testnet(&self) -> bool {
        self.testnet
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice> {
        let url = format!("{}/api/v3/ticker/price", self.base_url);

        debug!("Fetching ticker price from Binance for {}", symbol);

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol)])
            .send()
            .await
            .map_err(Error::HttpError)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Binance API error: {} - {}", status, error_text);

            let detail = match serde_json::from_str::<BinanceErrorBody>(&error_text) {
                Ok(body) => format!("{} ({})", body.msg, body.code),
                Err(_) => error_text,
            };
            return Err(Error::ExchangeError(format!(
                "Binance API error: {} - {}",
                status, detail
            )));
        }

        response.json::<TickerPrice>().await.map_err(|e| {
            Error::ParseError(format!("Failed to parse Binance ticker price: {}", e))
        })
    }
}
