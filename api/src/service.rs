use common::{models::TickerPrice, Result};
use connectors::ExchangeClients;
use tracing::debug;

/// Symbol the price route reports on
pub const PRICE_SYMBOL: &str = "BTCUSDT";

/// Service relaying price queries to the configured exchanges
pub struct PriceService {
    clients: ExchangeClients,
}

impl PriceService {
    pub fn new(clients: ExchangeClients) -> Self {
        Self { clients }
    }

    /// Current BTCUSDT ticker from Binance, exactly as the exchange reported it
    pub async fn binance_price(&self) -> Result<TickerPrice> {
        debug!(
            "Relaying {} price request to Binance (testnet: {})",
            PRICE_SYMBOL,
            self.clients.binance.is_testnet()
        );
        self.clients.binance.ticker_price(PRICE_SYMBOL).await
    }
}
