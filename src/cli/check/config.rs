use std::path::Path;

use crate::adapter::outbound::ninja::NinjaClient;
use crate::cli::config::{resolve, ConfigOrigin};
use crate::cli::output;
use crate::error::Result;

/// Validate configuration without fetching anything.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let (config, origin) = resolve(config_path)?;

    match origin {
        ConfigOrigin::File(path) => {
            output::success(&format!("Configuration file is valid: {}", path.display()));
        }
        ConfigOrigin::Defaults => {
            output::notice("No configuration file found, using built-in defaults");
        }
    }

    output::heading("Configuration");
    output::field("Endpoint", NinjaClient::endpoint(&config.market)?);
    output::field("League", &config.market.league);
    output::field("Output", config.site.output.display());
    output::field("Icon cache", config.icons.directory.display());
    output::field("Min price", config.site.min_price);
    output::field("Promo after", config.site.promo_after);
    output::field("Log level", &config.logging.level);
    output::field("Log format", config.logging.format.as_str());

    if config.icons.directory.is_dir() {
        output::success("Icon cache directory exists");
    } else {
        output::notice("Icon cache directory will be created on first build");
    }

    Ok(())
}
