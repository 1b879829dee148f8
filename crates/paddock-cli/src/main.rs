//! Paddock CLI - Command-line interface
//!
//! Race schedule, venue map and prediction lookups from the terminal.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use output::OutputWriter;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let output = OutputWriter::new(cli.json);

    // Create async runtime
    let result = tokio::runtime::Runtime::new()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(commands::execute(cli, &output)));

    if let Err(err) = result {
        let cli_error = errors::from_anyhow(err);
        if output.is_json() {
            output.error(&cli_error);
        } else {
            cli_error.display();
        }
        std::process::exit(1);
    }
}
