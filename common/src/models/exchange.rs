use serde::{Deserialize, Serialize};

/// Exchange identifiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Exchange {
    #[serde(rename = "binance")]
    Binance,
    #[serde(rename = "bybit")]
    Bybit,
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exchange::Binance => write!(f, "binance"),
            Exchange::Bybit => write!(f, "bybit"),
        }
    }
}

/// Whether exchange calls go to the sandbox network or to production.
///
/// Resolved once at startup and shared by every client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TradingMode {
    #[default]
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "live")]
    Live,
}

impl TradingMode {
    /// Resolve the mode from the raw `TRADING_MODE` value.
    ///
    /// Unset or empty means test; `"test"` means test; anything else is live.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("test") => TradingMode::Test,
            Some(_) => TradingMode::Live,
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, TradingMode::Test)
    }
}

impl std::fmt::Display for TradingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradingMode::Test => write!(f, "test"),
            TradingMode::Live => write!(f, "live"),
        }
    }
}

/// API key pair for one exchange. Values are passed through unvalidated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

// Keep the secret out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
