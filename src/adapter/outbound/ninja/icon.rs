//! HTTP icon downloader.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use crate::error::{IconError, Result};
use crate::infrastructure::config::icons::IconsConfig;
use crate::port::IconSource;

/// Downloads icon images over HTTP with a bounded timeout.
pub struct HttpIconSource {
    http: HttpClient,
}

impl HttpIconSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built with the
    /// configured timeout and User-Agent.
    pub fn from_config(config: &IconsConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl IconSource for HttpIconSource {
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, IconError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(IconError::Download)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IconError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(IconError::Download)?;
        debug!(url, bytes = bytes.len(), "Downloaded icon");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn builds_from_default_config() {
        assert!(HttpIconSource::from_config(&IconsConfig::default()).is_ok());
    }

    #[test]
    fn unusable_user_agent_is_rejected_not_ignored() {
        let config = IconsConfig {
            user_agent: "poewise\r\nbroken".into(),
            ..IconsConfig::default()
        };
        assert!(matches!(
            HttpIconSource::from_config(&config),
            Err(Error::Http(_))
        ));
    }
}
