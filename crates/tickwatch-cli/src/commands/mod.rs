mod format;
mod session;
mod watchlist;

use serde_json::Value;
use tickwatch_core::FixtureQuoteProvider;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::CliError;
use crate::store::FileWatchlist;

/// Output of a one-shot command, rendered by [`crate::output`].
pub struct CommandResult {
    pub data: Value,
    pub table: Vec<String>,
}

impl CommandResult {
    pub fn new(data: Value, table: Vec<String>) -> Self {
        Self { data, table }
    }
}

/// Run the selected command. `None` means the command wrote its own output.
pub async fn run(cli: &Cli) -> Result<Option<CommandResult>, CliError> {
    let config = Config::from_cli(cli);
    let store = FileWatchlist::new(config.store_path);
    let quotes = FixtureQuoteProvider::new();

    match &cli.command {
        Command::Watchlist(args) => watchlist::run(args, &store, &quotes).await.map(Some),
        Command::Format(args) => format::run(args).map(Some),
        Command::Session => {
            session::run_stdio(&store, &quotes).await?;
            Ok(None)
        }
    }
}
