mod exchange;
mod price;

pub use exchange::{Credentials, Exchange, TradingMode};
pub use price::{PriceValue, TickerPrice};
