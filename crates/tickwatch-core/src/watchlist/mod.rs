//! Watchlist interaction flow and row projection.
//!
//! [`WatchlistFlow`] owns the add form (`Idle` / `Adding`, pending symbol and
//! market) and forwards add, remove, and select actions. The list itself
//! belongs to the injected repository; [`ListState`] shows its entries as
//! pending rows and [`resolve_rows`] replaces them once quotes arrive.

mod flow;
mod rows;

pub use flow::{FormState, Key, KeyOutcome, SelectCallback, SubmitOutcome, WatchlistFlow};
pub use rows::{
    load_rows, quote_cell, resolve_rows, ListState, QuoteState, WatchlistRow,
    EMPTY_WATCHLIST_MESSAGE, LOADING_INDICATOR,
};
