//! JSON file implementation of [`WatchlistRepository`].

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tickwatch_core::{
    CapabilityFuture, Market, RepositoryError, Symbol, WatchlistItem, WatchlistRepository,
};
use tokio::sync::Mutex;
use tracing::debug;

/// Watchlist persisted as a JSON array of `{symbol, market}` objects.
///
/// Each mutation re-reads the file, so edits made by another process
/// between commands are preserved. Writes go to a sibling temp file that is
/// renamed over the old one, so an interrupted write never truncates it.
#[derive(Debug)]
pub struct FileWatchlist {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileWatchlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_items(&self) -> Result<Vec<WatchlistItem>, RepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(storage_error("read", &self.path, error)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|error| {
            RepositoryError::storage(format!(
                "watchlist file '{}' is malformed: {error}",
                self.path.display()
            ))
        })
    }

    async fn write_items(&self, items: &[WatchlistItem]) -> Result<(), RepositoryError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|error| storage_error("create directory for", &self.path, error))?;

        let payload = serde_json::to_vec_pretty(items)
            .map_err(|error| RepositoryError::internal(error.to_string()))?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &path, &payload))
            .await
            .map_err(|error| RepositoryError::internal(format!("watchlist write task: {error}")))??;
        debug!(path = %self.path.display(), entries = items.len(), "watchlist file written");
        Ok(())
    }
}

impl WatchlistRepository for FileWatchlist {
    fn list<'a>(&'a self) -> CapabilityFuture<'a, Result<Vec<WatchlistItem>, RepositoryError>> {
        Box::pin(self.read_items())
    }

    fn add<'a>(
        &'a self,
        symbol: Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<(), RepositoryError>> {
        Box::pin(async move {
            let _guard = self.write_lock.lock().await;
            let mut items = self.read_items().await?;
            if items.iter().any(|item| item.is(&symbol, market)) {
                return Err(RepositoryError::duplicate(&symbol, market));
            }
            items.push(WatchlistItem::new(symbol, market));
            self.write_items(&items).await
        })
    }

    fn remove<'a>(
        &'a self,
        symbol: Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<(), RepositoryError>> {
        Box::pin(async move {
            let _guard = self.write_lock.lock().await;
            let mut items = self.read_items().await?;
            let before = items.len();
            items.retain(|item| !item.is(&symbol, market));
            if items.len() == before {
                return Err(RepositoryError::not_found(&symbol, market));
            }
            self.write_items(&items).await
        })
    }
}

fn replace_file(dir: &Path, path: &Path, payload: &[u8]) -> Result<(), RepositoryError> {
    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|error| storage_error("stage", path, error))?;
    staged
        .write_all(payload)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|error| storage_error("write", path, error))?;
    staged
        .persist(path)
        .map_err(|error| storage_error("replace", path, error.error))?;
    Ok(())
}

fn storage_error(action: &str, path: &Path, error: std::io::Error) -> RepositoryError {
    RepositoryError::storage(format!(
        "failed to {action} watchlist file '{}': {error}",
        path.display()
    ))
}
