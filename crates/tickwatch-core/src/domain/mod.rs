//! # Domain Models
//!
//! Canonical domain types for tickwatch.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Market`] | Exchange venue (US, JP, HK) |
//! | [`Currency`] | Display currency derived from a market |
//! | [`Symbol`] | Non-blank, trimmed, uppercase ticker |
//! | [`WatchlistItem`] | `(symbol, market)` watchlist entry |
//! | [`Quote`] | Transient price observation |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Validation happens at construction time; a [`WatchlistItem`] can only
//! hold a known [`Market`], so the currency lookup is always defined.

mod market;
mod models;
mod symbol;
mod timestamp;

pub use market::{currency_for_market, Currency, Market};
pub use models::{Quote, WatchlistItem};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
