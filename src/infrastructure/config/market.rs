//! Market API configuration.

use serde::Deserialize;

/// Settings for the currency-overview endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Currency-overview endpoint, without query string.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// League whose economy is shown.
    #[serde(default = "default_league")]
    pub league: String,
    /// Overview type filter passed as `type=`.
    #[serde(default = "default_currency_type")]
    pub currency_type: String,
    /// Response language passed as `language=`.
    #[serde(default = "default_language")]
    pub language: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    "https://poe.ninja/api/data/currencyoverview".into()
}

fn default_league() -> String {
    "Standard".into()
}

fn default_currency_type() -> String {
    "Currency".into()
}

fn default_language() -> String {
    "en".into()
}

const fn default_timeout_ms() -> u64 {
    15_000
}

pub(crate) fn default_user_agent() -> String {
    "Mozilla/5.0".into()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            league: default_league(),
            currency_type: default_currency_type(),
            language: default_language(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}
