//! poe.ninja currency-overview client.
//!
//! One `GET {api_url}?league=..&type=..&language=..` per build. There is no
//! retry: a timeout or bad status fails the build.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info};
use url::Url;

use super::dto::response::CurrencyOverviewResponse;
use crate::domain::MarketSnapshot;
use crate::error::Result;
use crate::infrastructure::config::market::MarketConfig;
use crate::port::MarketSource;

/// HTTP client for the poe.ninja currency-overview endpoint.
pub struct NinjaClient {
    http: HttpClient,
    endpoint: Url,
}

impl NinjaClient {
    /// Build a client from market configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not a valid URL or the HTTP client
    /// cannot be built with the configured timeout and User-Agent.
    pub fn from_config(config: &MarketConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            endpoint: Self::endpoint(config)?,
        })
    }

    /// Full request URL including the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not a valid URL.
    pub fn endpoint(config: &MarketConfig) -> Result<Url> {
        let url = Url::parse_with_params(
            &config.api_url,
            &[
                ("league", config.league.as_str()),
                ("type", config.currency_type.as_str()),
                ("language", config.language.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Fetch and decode the raw overview response.
    pub async fn get_overview(&self) -> Result<CurrencyOverviewResponse> {
        info!(url = %self.endpoint, "Fetching currency overview");

        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let overview: CurrencyOverviewResponse = serde_json::from_slice(&body)?;
        debug!(lines = overview.lines.len(), "Fetched currency overview");

        Ok(overview)
    }
}

#[async_trait]
impl MarketSource for NinjaClient {
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot> {
        self.get_overview().await?.into_snapshot().into_usable()
    }

    fn source_name(&self) -> &'static str {
        "poe.ninja"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn endpoint_encodes_query_parameters() {
        let config = MarketConfig {
            league: "Dawn of the Hunt".into(),
            ..MarketConfig::default()
        };
        let url = NinjaClient::endpoint(&config).unwrap();
        assert_eq!(
            url.as_str(),
            "https://poe.ninja/api/data/currencyoverview?league=Dawn+of+the+Hunt&type=Currency&language=en"
        );
    }

    #[test]
    fn endpoint_rejects_invalid_base() {
        let config = MarketConfig {
            api_url: "::nope".into(),
            ..MarketConfig::default()
        };
        assert!(matches!(
            NinjaClient::endpoint(&config),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn unusable_user_agent_is_rejected_not_ignored() {
        let config = MarketConfig {
            user_agent: "poewise\nbroken".into(),
            ..MarketConfig::default()
        };
        assert!(matches!(
            NinjaClient::from_config(&config),
            Err(Error::Http(_))
        ));
    }
}
