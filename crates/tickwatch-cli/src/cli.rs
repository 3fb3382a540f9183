//! CLI argument definitions for tickwatch.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `watchlist list` | Show watchlist rows with quotes |
//! | `watchlist add` | Add a symbol on a market |
//! | `watchlist remove` | Remove a symbol from a market |
//! | `format` | Render a single value the way the dashboard does |
//! | `session` | Drive the watchlist form from stdin events |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--store` | `$TICKWATCH_HOME/watchlist.json` | Watchlist file |
//!
//! # Examples
//!
//! ```bash
//! tickwatch watchlist add aapl
//! tickwatch watchlist add 7203 --market JP
//! tickwatch watchlist list --format json --pretty
//! tickwatch format volume 2500000
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tickwatch_core::Market;

/// Watchlist and quote formatting for the tickwatch dashboard.
#[derive(Debug, Parser)]
#[command(
    name = "tickwatch",
    author,
    version,
    about = "Watchlist management and market value formatting"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Watchlist file. Defaults to `watchlist.json` under `TICKWATCH_HOME`
    /// (or `~/.tickwatch`).
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for terminal display.
    Table,
    /// Single JSON document.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage watchlist entries.
    Watchlist(WatchlistArgs),

    /// Format a single value.
    ///
    /// Pass `-` as the value to see the placeholder for missing data.
    ///
    /// # Examples
    ///
    ///   tickwatch format price 1234.5 --currency JPY
    ///   tickwatch format percent 0.0567
    Format(FormatArgs),

    /// Interactive watchlist session driven by line events on stdin.
    ///
    /// Events: add, type <text>, backspace, market <US|JP|HK>, enter, esc,
    /// remove <symbol> [market], select <symbol> [market], list, quit.
    Session,
}

/// Arguments for the `watchlist` command group.
#[derive(Debug, Args)]
pub struct WatchlistArgs {
    #[command(subcommand)]
    pub command: WatchlistCommand,
}

/// Watchlist subcommands.
#[derive(Debug, Subcommand)]
pub enum WatchlistCommand {
    /// List entries with price, change, and volume.
    List,
    /// Add a symbol on a market.
    Add(EntryArgs),
    /// Remove a symbol from a market.
    Remove(EntryArgs),
}

/// A `(symbol, market)` pair on the command line.
#[derive(Debug, Args)]
pub struct EntryArgs {
    /// Ticker symbol (case-insensitive).
    pub symbol: String,

    /// Market the symbol trades on.
    #[arg(long, default_value_t = Market::Us)]
    pub market: Market,
}

/// Arguments for the `format` command group.
#[derive(Debug, Args)]
pub struct FormatArgs {
    #[command(subcommand)]
    pub command: FormatCommand,
}

/// Formatting subcommands.
#[derive(Debug, Subcommand)]
pub enum FormatCommand {
    /// Price with currency symbol and two decimals.
    Price {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// ISO currency code; unknown codes render with `$`.
        #[arg(long, default_value = tickwatch_core::format::DEFAULT_CURRENCY)]
        currency: String,
    },
    /// Fraction as a percentage.
    Percent {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Share volume with K/M suffix.
    Volume {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Option greek with four decimals.
    Greek {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
