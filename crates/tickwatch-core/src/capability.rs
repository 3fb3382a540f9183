//! Capability traits for the external data layer.
//!
//! The watchlist flow never talks to storage or a market data feed directly.
//! It is handed a [`WatchlistRepository`] and a [`QuoteProvider`], which own
//! caching, refresh, and retry policy.
//!
//! | Capability | Operation | Result |
//! |------------|-----------|--------|
//! | [`WatchlistRepository`] | `list` | entries in insertion order |
//! | [`WatchlistRepository`] | `add` | `()` or [`RepositoryError`] |
//! | [`WatchlistRepository`] | `remove` | `()` or [`RepositoryError`] |
//! | [`QuoteProvider`] | `quote` | `Some(Quote)`, or `None` when unavailable |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{Market, Quote, Symbol, WatchlistItem};

/// Boxed future returned by capability methods.
pub type CapabilityFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Classification of a failed capability call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryErrorKind {
    Duplicate,
    NotFound,
    Unavailable,
    Storage,
    Internal,
}

/// Structured error reported by a repository or quote provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    kind: RepositoryErrorKind,
    message: String,
    retryable: bool,
}

impl RepositoryError {
    pub fn duplicate(symbol: &Symbol, market: Market) -> Self {
        Self {
            kind: RepositoryErrorKind::Duplicate,
            message: format!("{symbol} is already on the {market} watchlist"),
            retryable: false,
        }
    }

    pub fn not_found(symbol: &Symbol, market: Market) -> Self {
        Self {
            kind: RepositoryErrorKind::NotFound,
            message: format!("{symbol} is not on the {market} watchlist"),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: RepositoryErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: RepositoryErrorKind::Storage,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: RepositoryErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> RepositoryErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            RepositoryErrorKind::Duplicate => "watchlist.duplicate",
            RepositoryErrorKind::NotFound => "watchlist.not_found",
            RepositoryErrorKind::Unavailable => "watchlist.unavailable",
            RepositoryErrorKind::Storage => "watchlist.storage",
            RepositoryErrorKind::Internal => "watchlist.internal",
        }
    }
}

impl Display for RepositoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for RepositoryError {}

/// Storage of watchlist entries.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a list refresh and a pending add
/// may be in flight at the same time.
pub trait WatchlistRepository: Send + Sync {
    /// Current entries in insertion order.
    fn list<'a>(&'a self) -> CapabilityFuture<'a, Result<Vec<WatchlistItem>, RepositoryError>>;

    /// Adds `(symbol, market)`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the pair is already present or the
    /// backing store cannot be written.
    fn add<'a>(
        &'a self,
        symbol: Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<(), RepositoryError>>;

    /// Removes exactly `(symbol, market)`.
    fn remove<'a>(
        &'a self,
        symbol: Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<(), RepositoryError>>;
}

/// Per-entry quote lookup.
pub trait QuoteProvider: Send + Sync {
    /// Latest quote for `(symbol, market)`.
    ///
    /// `Ok(None)` means the quote is unavailable, which is distinct from a
    /// failed lookup.
    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<Option<Quote>, RepositoryError>>;
}
