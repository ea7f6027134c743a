use clap::Parser;
use tracing::error;

use poewise::cli::{build, check, output, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Build(args) => build::execute(args).await.map(|_| ()),
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(arg.config.as_deref()),
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        output::failure(&e.to_string());
        std::process::exit(1);
    }
}
