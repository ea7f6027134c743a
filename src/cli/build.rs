//! Handler for the `build` command.

use tracing::info;

use crate::adapter::outbound::ninja::{HttpIconSource, NinjaClient};
use crate::application::{BuildReport, IconCache, SiteBuilder, SiteSettings};
use crate::cli::{config, output, BuildArgs};
use crate::error::Result;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;

/// Execute the build command.
pub async fn execute(args: &BuildArgs) -> Result<BuildReport> {
    let (mut config, origin) = config::resolve(args.config.as_deref())?;
    apply_overrides(&mut config, args);
    config.validate()?;

    config.init_logging();
    info!(
        config = ?origin,
        league = %config.market.league,
        output = %config.site.output.display(),
        "poewise build starting"
    );

    let builder = wire(&config)?;
    let report = builder.build().await?;

    output::build_summary(&report);
    Ok(report)
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut Config, args: &BuildArgs) {
    if let Some(ref league) = args.league {
        config.market.league = league.clone();
    }
    if let Some(ref path) = args.output {
        config.site.output = path.clone();
    }
    if let Some(ref dir) = args.icon_dir {
        config.icons.directory = dir.clone();
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }
}

/// Build a [`SiteBuilder`] backed by the poe.ninja adapters.
///
/// # Errors
///
/// Returns an error if the API URL, an HTTP client or the page template
/// cannot be set up.
pub fn wire(config: &Config) -> Result<SiteBuilder> {
    let market = NinjaClient::from_config(&config.market)?;
    let icons = IconCache::new(
        Box::new(HttpIconSource::from_config(&config.icons)?),
        config.icons.directory.clone(),
        config.icons.placeholder_url.clone(),
    );
    let settings = SiteSettings::from_config(config.market.league.as_str(), &config.site);
    SiteBuilder::new(Box::new(market), icons, settings)
}
