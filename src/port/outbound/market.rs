//! Market data port.

use async_trait::async_trait;

use crate::domain::MarketSnapshot;
use crate::error::Result;

/// Source of currency quotes.
///
/// Implementations perform one bounded request per call and never retry.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error on any network, HTTP status or decoding failure.
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot>;

    /// Human-readable source name for logging.
    fn source_name(&self) -> &'static str;
}
