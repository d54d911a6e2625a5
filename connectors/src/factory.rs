use crate::{binance::BinanceConnector, bybit::BybitConnector, ExchangeConnector};
use common::models::{Credentials, TradingMode};
use std::sync::Arc;
use tracing::info;

/// Exchange settings, read once at process start
#[derive(Debug, Clone, Default)]
pub struct ExchangeConfig {
    /// Sandbox or production, shared by every client
    pub mode: TradingMode,
    pub binance: Credentials,
    pub bybit: Credentials,
    /// Optional REST host overrides, mainly for local stubs
    pub binance_base_url: Option<String>,
    pub bybit_base_url: Option<String>,
}

impl ExchangeConfig {
    /// Create the exchange configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    ///
    /// Missing credentials become empty strings; nothing is validated.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).unwrap_or_default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            mode: TradingMode::from_env_value(lookup("TRADING_MODE").as_deref()),
            binance: Credentials::new(var("BINANCE_API_KEY"), var("BINANCE_API_SECRET")),
            bybit: Credentials::new(var("BYBIT_API_KEY"), var("BYBIT_API_SECRET")),
            binance_base_url: non_empty("BINANCE_BASE_URL"),
            bybit_base_url: non_empty("BYBIT_BASE_URL"),
        }
    }
}

/// Exchange clients built once and shared by every request
#[derive(Clone)]
pub struct ExchangeClients {
    pub binance: Arc<dyn ExchangeConnector>,
    /// Configured alongside Binance but not used by any route yet
    pub bybit: Arc<dyn ExchangeConnector>,
}

impl ExchangeClients {
    pub fn new(config: &ExchangeConfig) -> Self {
        let binance = binance_connector(config);
        let bybit = bybit_connector(config);

        info!(
            "Exchange clients ready (mode: {}, binance: {}, bybit: {})",
            config.mode,
            binance.base_url(),
            bybit.base_url()
        );

        Self {
            binance: Arc::new(binance),
            bybit: Arc::new(bybit),
        }
    }
}

fn binance_connector(config: &ExchangeConfig) -> BinanceConnector {
    let testnet = config.mode.is_test();
    match &config.binance_base_url {
        Some(url) => BinanceConnector::with_base_url(config.binance.clone(), testnet, url),
        None => BinanceConnector::new(config.binance.clone(), testnet),
    }
}

fn bybit_connector(config: &ExchangeConfig) -> BybitConnector {
    let testnet = config.mode.is_test();
    match &config.bybit_base_url {
        Some(url) => BybitConnector::with_base_url(config.bybit.clone(), testnet, url),
        None => BybitConnector::new(config.bybit.clone(), testnet),
    }
}
