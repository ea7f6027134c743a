//! Configuration file resolution for CLI commands.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Configuration file picked up from the working directory when no
/// `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "poewise.toml";

/// Where a configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Defaults,
}

/// Load the configuration for a command.
///
/// An explicit path must exist. Without one, `poewise.toml` is used when
/// present and built-in defaults otherwise.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read, parsed or validated.
pub fn resolve(explicit: Option<&Path>) -> Result<(Config, ConfigOrigin)> {
    resolve_in(explicit, Path::new(DEFAULT_CONFIG_FILE))
}

fn resolve_in(explicit: Option<&Path>, fallback: &Path) -> Result<(Config, ConfigOrigin)> {
    if let Some(path) = explicit {
        return Ok((Config::load(path)?, ConfigOrigin::File(path.to_path_buf())));
    }
    if fallback.is_file() {
        return Ok((Config::load(fallback)?, ConfigOrigin::File(fallback.to_path_buf())));
    }
    Ok((Config::default(), ConfigOrigin::Defaults))
}
