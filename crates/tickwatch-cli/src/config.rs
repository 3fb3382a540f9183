//! Runtime configuration resolved from flags and environment.
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `TICKWATCH_HOME` | `~/.tickwatch` | Directory holding `watchlist.json` |
//! | `TICKWATCH_LOG_FORMAT` | `pretty` | `pretty` or `json` log lines on stderr |
//! | `RUST_LOG` | `warn` | Log level filter |

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

const STORE_FILE_NAME: &str = "watchlist.json";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli.store.as_deref(), env::var_os("TICKWATCH_HOME"), env::var_os("HOME"))
    }

    fn resolve(
        store: Option<&Path>,
        tickwatch_home: Option<std::ffi::OsString>,
        home: Option<std::ffi::OsString>,
    ) -> Self {
        let store_path = match store {
            Some(path) => path.to_path_buf(),
            None => resolve_home(tickwatch_home, home).join(STORE_FILE_NAME),
        };
        Self { store_path }
    }
}

fn resolve_home(
    tickwatch_home: Option<std::ffi::OsString>,
    home: Option<std::ffi::OsString>,
) -> PathBuf {
    if let Some(path) = tickwatch_home {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = home {
        return PathBuf::from(home).join(".tickwatch");
    }

    PathBuf::from(".tickwatch")
}
