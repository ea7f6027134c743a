//! Page generation configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the rendered dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Output HTML file, overwritten on every build.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Currencies priced below this many Chaos are left off the board.
    #[serde(default = "default_min_price")]
    pub min_price: f64,
    /// Insert the in-list promo block after this many rows. `0` disables it.
    #[serde(default = "default_promo_after")]
    pub promo_after: usize,
}

fn default_output() -> PathBuf {
    PathBuf::from("index.html")
}

const fn default_min_price() -> f64 {
    0.1
}

const fn default_promo_after() -> usize {
    5
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            min_price: default_min_price(),
            promo_after: default_promo_after(),
        }
    }
}
