//! Icon cache configuration.

use serde::Deserialize;
use std::path::PathBuf;

use super::market::default_user_agent;

/// Icon served when a download or transcode fails.
pub const PLACEHOLDER_ICON_URL: &str = "https://web.poecdn.com/gen/image/CurrencyDuplicate.png";

/// Settings for the local icon cache.
#[derive(Debug, Clone, Deserialize)]
pub struct IconsConfig {
    /// Directory holding cached 64×64 PNGs.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Download timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Remote image referenced when an icon cannot be cached.
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_directory() -> PathBuf {
    PathBuf::from("icons")
}

const fn default_timeout_ms() -> u64 {
    10_000
}

fn default_placeholder_url() -> String {
    PLACEHOLDER_ICON_URL.into()
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            timeout_ms: default_timeout_ms(),
            placeholder_url: default_placeholder_url(),
            user_agent: default_user_agent(),
        }
    }
}
