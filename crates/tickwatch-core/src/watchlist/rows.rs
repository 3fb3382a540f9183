use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

use crate::capability::{QuoteProvider, RepositoryError, WatchlistRepository};
use crate::format::{format_change, format_price, format_volume, PLACEHOLDER};
use crate::{currency_for_market, Market, Quote, Symbol, WatchlistItem};

/// Shown in a price cell while its quote is in flight.
pub const LOADING_INDICATOR: &str = "…";

/// Shown instead of rows when the watchlist has no entries.
pub const EMPTY_WATCHLIST_MESSAGE: &str = "No symbols in watchlist";

/// Per-row quote fetch status.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteState {
    Pending,
    Ready(Quote),
    Unavailable,
}

impl From<Option<Quote>> for QuoteState {
    fn from(value: Option<Quote>) -> Self {
        value.map_or(Self::Unavailable, Self::Ready)
    }
}

/// Watchlist fetch status.
///
/// While `Loading` nothing but the indicator is shown. Once `Loaded`, each
/// entry gets a row straight away, drawn from [`ListState::pending_rows`]
/// until [`resolve_rows`] fills in its quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(Vec<WatchlistItem>),
}

impl ListState {
    pub async fn fetch<R>(repository: &R) -> Result<Self, RepositoryError>
    where
        R: WatchlistRepository + ?Sized,
    {
        repository.list().await.map(Self::Loaded)
    }

    pub fn items(&self) -> &[WatchlistItem] {
        match self {
            Self::Loading => &[],
            Self::Loaded(items) => items.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Loaded(items) if items.is_empty())
    }

    /// Line shown in place of rows, if any.
    pub fn status(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_INDICATOR),
            Self::Loaded(items) if items.is_empty() => Some(EMPTY_WATCHLIST_MESSAGE),
            Self::Loaded(_) => None,
        }
    }

    pub fn pending_rows(&self) -> Vec<WatchlistRow> {
        self.items()
            .iter()
            .map(|item| WatchlistRow::project(item, &QuoteState::Pending))
            .collect()
    }
}

/// Price cell for `item`: a loading marker, the formatted price in the
/// market's currency, or the placeholder when no quote exists.
pub fn quote_cell(item: &WatchlistItem, state: &QuoteState) -> String {
    match state {
        QuoteState::Pending => LOADING_INDICATOR.to_owned(),
        QuoteState::Ready(quote) => {
            format_price(Some(quote.price), currency_for_market(item.market))
        }
        QuoteState::Unavailable => PLACEHOLDER.to_owned(),
    }
}

/// Display-ready watchlist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchlistRow {
    pub symbol: Symbol,
    pub market: Market,
    pub price: String,
    pub change: String,
    pub volume: String,
}

impl WatchlistRow {
    pub fn project(item: &WatchlistItem, state: &QuoteState) -> Self {
        let (change, volume) = match state {
            QuoteState::Ready(quote) => (
                format_change(quote.change_percent),
                format_volume(quote.volume),
            ),
            QuoteState::Pending => (LOADING_INDICATOR.to_owned(), LOADING_INDICATOR.to_owned()),
            QuoteState::Unavailable => (PLACEHOLDER.to_owned(), PLACEHOLDER.to_owned()),
        };

        Self {
            symbol: item.symbol.clone(),
            market: item.market,
            price: quote_cell(item, state),
            change,
            volume,
        }
    }

    pub fn item(&self) -> WatchlistItem {
        WatchlistItem::new(self.symbol.clone(), self.market)
    }
}

/// Resolve one quote per entry, keeping the order of `items`.
///
/// Lookups run concurrently and independently; a failed lookup degrades
/// that row to unavailable.
pub async fn resolve_rows<Q>(items: &[WatchlistItem], quotes: &Q) -> Vec<WatchlistRow>
where
    Q: QuoteProvider + ?Sized,
{
    let lookups = items
        .iter()
        .map(|item| quotes.quote(&item.symbol, item.market));
    let results = join_all(lookups).await;

    items
        .iter()
        .zip(results)
        .map(|(item, result)| {
            let state = match result {
                Ok(quote) => QuoteState::from(quote),
                Err(error) => {
                    warn!(%item, code = error.code(), "quote lookup failed: {error}");
                    QuoteState::Unavailable
                }
            };
            WatchlistRow::project(item, &state)
        })
        .collect()
}

/// List the watchlist and resolve every row. Only a failed list is an error.
pub async fn load_rows<R, Q>(
    repository: &R,
    quotes: &Q,
) -> Result<Vec<WatchlistRow>, RepositoryError>
where
    R: WatchlistRepository + ?Sized,
    Q: QuoteProvider + ?Sized,
{
    let list = ListState::fetch(repository).await?;
    Ok(resolve_rows(list.items(), quotes).await)
}
