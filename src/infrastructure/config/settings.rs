//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section has defaults, so a missing file or an empty one yields a working
//! configuration that builds `index.html` for the Standard league.
//!
//! # Example
//!
//! ```no_run
//! use poewise::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("poewise.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use super::icons::IconsConfig;
use super::logging::LoggingConfig;
use super::market::MarketConfig;
use super::site::SiteConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Currency-overview API settings.
    #[serde(default)]
    pub market: MarketConfig,

    /// Local icon cache settings.
    #[serde(default)]
    pub icons: IconsConfig,

    /// Rendered page settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize the global tracing subscriber.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    ///
    /// Also run after CLI overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.market.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.market.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.market.league.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "league" }.into());
        }
        if self.market.currency_type.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "currency_type",
            }
            .into());
        }
        if self.market.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.icons.directory.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "icons.directory",
            }
            .into());
        }
        if self.icons.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "icons.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.icons.placeholder_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "placeholder_url",
            }
            .into());
        }

        if self.site.output.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "output" }.into());
        }
        if !self.site.min_price.is_finite() || self.site.min_price < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "min_price",
                reason: "must be a finite number >= 0".to_string(),
            }
            .into());
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: e.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
