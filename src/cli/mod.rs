//! Command-line interface definitions.

pub mod build;
pub mod check;
pub mod config;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// poewise - static Path of Exile 2 currency dashboard generator.
#[derive(Parser, Debug)]
#[command(name = "poewise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch market data and write the dashboard page
    Build(BuildArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `poewise check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file [default: poewise.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to configuration file [default: poewise.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override league name
    #[arg(long)]
    pub league: Option<String>,

    /// Override output HTML path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override icon cache directory
    #[arg(long)]
    pub icon_dir: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_with_overrides() {
        let cli = Cli::try_parse_from([
            "poewise",
            "build",
            "--league",
            "Hardcore",
            "-o",
            "public/index.html",
            "--json-logs",
        ])
        .unwrap();

        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.league.as_deref(), Some("Hardcore"));
                assert_eq!(args.output, Some(PathBuf::from("public/index.html")));
                assert!(args.json_logs);
                assert!(args.config.is_none());
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn parses_check_config() {
        let cli = Cli::try_parse_from(["poewise", "check", "config", "-c", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Config(ConfigPathArg { config: Some(_) }))
        ));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["poewise", "serve"]).is_err());
    }
}
