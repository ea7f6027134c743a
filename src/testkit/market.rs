//! Market source fakes.

use async_trait::async_trait;

use crate::adapter::outbound::ninja::dto::response::CurrencyOverviewResponse;
use crate::domain::MarketSnapshot;
use crate::error::{Error, Result};
use crate::port::MarketSource;

/// Returns a fixed snapshot on every call.
pub struct StaticMarketSource {
    snapshot: MarketSnapshot,
}

impl StaticMarketSource {
    pub fn new(snapshot: MarketSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl MarketSource for StaticMarketSource {
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Fails every fetch, like a timed-out API.
pub struct FailingMarketSource;

#[async_trait]
impl MarketSource for FailingMarketSource {
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot> {
        Err(Error::Fetch("simulated timeout".into()))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

/// Decodes a canned poe.ninja response body through the same conversion the
/// HTTP client uses.
pub struct OverviewBodySource {
    body: String,
}

impl OverviewBodySource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl MarketSource for OverviewBodySource {
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot> {
        let overview: CurrencyOverviewResponse = serde_json::from_str(&self.body)?;
        overview.into_snapshot().into_usable()
    }

    fn source_name(&self) -> &'static str {
        "overview-body"
    }
}
