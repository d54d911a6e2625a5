use crate::ExchangeConnector;
use async_trait::async_trait;
use common::{
    models::{Credentials, Exchange, TickerPrice},
    Error, Result,
};
use serde::Deserialize;
use tracing::{debug, error};

pub const BYBIT_API_URL: &str = "https://api.bybit.com";
pub const BYBIT_TESTNET_API_URL: &str = "https://api-testnet.bybit.com";

pub struct BybitConnector {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    testnet: bool,
}

impl BybitConnector {
    pub fn new(credentials: Credentials, testnet: bool) -> Self {
        let base_url = if testnet {
            BYBIT_TESTNET_API_URL
        } else {
            BYBIT_API_URL
        };
        Self::with_base_url(credentials, testnet, base_url)
    }

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

/// v5 envelope wrapping every Bybit REST response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BybitResponse<T> {
    ret_code: i64,
    ret_msg: String,
    #[serde(default)]
    result: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct BybitTickerList {
    #[serde(default)]
    list: Vec<BybitTicker>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BybitTicker {
    symbol: String,
    last_price: String,
}

#[async_trait]
impl ExchangeConnector for BybitConnector {
    fn exchange(&self) -> Exchange {
        Exchange::Bybit
    }

    fn is_testnet(&self) -> bool {
        self.testnet
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice> {
        let url = format!("{}/v5/market/tickers", self.base_url);

        debug!("Fetching spot ticker from Bybit for {}", symbol);

        let response = self
            .client
            .get(&url)
            .query(&[("category", "spot"), ("symbol", symbol)])
            .send()
            .await
            .map_err(Error::HttpError)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Bybit API error: {} - {}", status, error_text);
            return Err(Error::ExchangeError(format!(
                "Bybit API error: {} - {}",
                status, error_text
            )));
        }

        let body: BybitResponse<BybitTickerList> = response.json().await.map_err(|e| {
            Error::ParseError(format!("Failed to parse Bybit tickers: {}", e))
        })?;

        // Bybit reports most failures with HTTP 200 and a non-zero retCode
        if body.ret_code != 0 {
            error!("Bybit API error: {} - {}", body.ret_code, body.ret_msg);
            return Err(Error::ExchangeError(format!(
                "Bybit API error: {} - {}",
                body.ret_code, body.ret_msg
            )));
        }

        let ticker = body
            .result
            .unwrap_or_default()
            .list
            .into_iter()
            .find(|t| t.symbol == symbol)
            .ok_or_else(|| {
                Error::ExchangeError(format!("Bybit returned no ticker for {}", symbol))
            })?;

        Ok(TickerPrice::new(ticker.symbol, ticker.last_price))
    }
}
