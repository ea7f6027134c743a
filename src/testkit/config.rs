//! Configurations rooted in a scratch directory.

use std::path::Path;

use crate::application::SiteSettings;
use crate::infrastructure::config::settings::Config;

/// Default configuration with icons and output under `root`.
pub fn config_in(root: &Path) -> Config {
    let mut config = Config::default();
    config.icons.directory = root.join("icons");
    config.site.output = root.join("index.html");
    config
}

/// Site settings matching [`config_in`].
pub fn settings_in(root: &Path) -> SiteSettings {
    let config = config_in(root);
    SiteSettings::from_config(config.market.league.as_str(), &config.site)
}
