//! Icon download port.

use async_trait::async_trait;

use crate::error::IconError;

/// Source of raw icon image bytes.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Download the image at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, times out or answers with a
    /// non-success status.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, IconError>;
}
