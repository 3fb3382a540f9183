mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod store;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(exit_code = error.exit_code(), "command failed");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    if let Some(result) = commands::run(&cli).await? {
        output::render(&result, cli.format, cli.pretty)?;
    }
    Ok(())
}
