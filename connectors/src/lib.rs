pub mod binance;
pub mod bybit;
pub mod factory;

use async_trait::async_trait;
use common::{
    models::{Exchange, TickerPrice},
    Result,
};

pub use factory::{ExchangeClients, ExchangeConfig};

/// Trait defining the interface for exchange API clients
#[async_trait]
pub trait ExchangeConnector: Send + Sync {
    /// Which exchange this client talks to
    fn exchange(&self) -> Exchange;

    /// Whether calls are routed to the exchange's sandbox network
    fn is_testnet(&self) -> bool;

    /// Get the latest price for a trading pair symbol (e.g., BTCUSDT)
    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice>;
}
