use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Price as the exchange sent it: decimal text or a bare JSON number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Number(Number),
}

impl From<&str> for PriceValue {
    fn from(value: &str) -> Self {
        PriceValue::Text(value.to_string())
    }
}

impl From<String> for PriceValue {
    fn from(value: String) -> Self {
        PriceValue::Text(value)
    }
}

impl std::fmt::Display for PriceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceValue::Text(text) => write!(f, "{}", text),
            PriceValue::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Latest traded price for one symbol, as reported by an exchange.
///
/// Fields beyond `symbol` and `price` are kept in `extra` so the object
/// serializes back with everything the exchange sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickerPrice {
    /// Trading pair symbol (e.g., BTCUSDT)
    pub symbol: String,
    pub price: PriceValue,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TickerPrice {
    pub fn new(symbol: impl Into<String>, price: impl Into<PriceValue>) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
            extra: Map::new(),
        }
    }
}
