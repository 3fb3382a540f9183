//! # Tickwatch Core
//!
//! Domain types, display formatting, and the watchlist interaction flow
//! behind the tickwatch trading dashboard.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`capability`] | Repository and quote provider traits for the external data layer |
//! | [`domain`] | Domain models (Market, Symbol, WatchlistItem, Quote) |
//! | [`error`] | Core error types |
//! | [`format`] | Price, percent, volume, and greek formatting |
//! | [`memory`] | In-memory watchlist and fixture quote provider |
//! | [`watchlist`] | Add/remove/select flow and row projection |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickwatch_core::{load_rows, FixtureQuoteProvider, InMemoryWatchlist, WatchlistFlow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryWatchlist::new();
//!     let mut flow = WatchlistFlow::new();
//!
//!     flow.begin_add();
//!     flow.edit_symbol("aapl");
//!     flow.submit(&store).await?;
//!
//!     for row in load_rows(&store, &FixtureQuoteProvider::new()).await? {
//!         println!("{} {} {}", row.symbol, row.market, row.price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Session  │
//! └────────┬────────┘
//!          │ key events, add/remove/select
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │ WatchlistFlow   │────▶│ WatchlistRepository  │
//! └────────┬────────┘     └──────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │ load_rows       │────▶│ QuoteProvider        │
//! └────────┬────────┘     └──────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ format          │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Formatting never fails. Flow operations return the repository's
//! [`RepositoryError`] untouched so the caller decides how to surface it:
//!
//! ```rust
//! use tickwatch_core::{RepositoryError, RepositoryErrorKind};
//!
//! fn describe(error: &RepositoryError) -> &'static str {
//!     match error.kind() {
//!         RepositoryErrorKind::Duplicate => "already watching",
//!         RepositoryErrorKind::NotFound => "not on the list",
//!         _ if error.retryable() => "try again",
//!         _ => "failed",
//!     }
//! }
//! ```

pub mod capability;
pub mod domain;
pub mod error;
pub mod format;
pub mod memory;
pub mod watchlist;

// Capability traits and errors
pub use capability::{
    CapabilityFuture, QuoteProvider, RepositoryError, RepositoryErrorKind, WatchlistRepository,
};

// Domain models
pub use domain::{currency_for_market, Currency, Market, Quote, Symbol, UtcDateTime, WatchlistItem};

// Error types
pub use error::ValidationError;

// Formatting
pub use format::{
    currency_symbol, format_change, format_greek, format_percent, format_price,
    format_price_default, format_volume, PLACEHOLDER,
};

// Reference capability implementations
pub use memory::{FixtureQuoteProvider, InMemoryWatchlist};

// Interaction flow
pub use watchlist::{
    load_rows, quote_cell, resolve_rows, FormState, Key, KeyOutcome, ListState, QuoteState,
    SubmitOutcome, WatchlistFlow, WatchlistRow, EMPTY_WATCHLIST_MESSAGE, LOADING_INDICATOR,
};
