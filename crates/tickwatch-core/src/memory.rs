//! In-process implementations of the capability traits.
//!
//! [`InMemoryWatchlist`] backs sessions that do not persist anything and
//! [`FixtureQuoteProvider`] serves deterministic quotes in mock mode.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::capability::{CapabilityFuture, QuoteProvider, RepositoryError, WatchlistRepository};
use crate::{Market, Quote, Symbol, UtcDateTime, WatchlistItem};

/// Thread-safe ordered watchlist held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWatchlist {
    items: Arc<RwLock<Vec<WatchlistItem>>>,
    injected_failure: Arc<Mutex<Option<RepositoryError>>>,
}

impl InMemoryWatchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing entries, keeping the first of any
    /// duplicated pair.
    pub fn with_items(items: impl IntoIterator<Item = WatchlistItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.clone()))
            .collect();
        Self {
            items: Arc::new(RwLock::new(items)),
            injected_failure: Arc::default(),
        }
    }

    /// Make the next `add` fail with `error` without touching the entries.
    pub async fn fail_next_add(&self, error: RepositoryError) {
        *self.injected_failure.lock().await = Some(error);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl WatchlistRepository for InMemoryWatchlist {
    fn list<'a>(&'a self) -> CapabilityFuture<'a, Result<Vec<WatchlistItem>, RepositoryError>> {
        Box::pin(async move { Ok(self.items.read().await.clone()) })
    }

    fn add<'a>(
        &'a self,
        symbol: Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<(), RepositoryError>> {
        Box::pin(async move {
            if let Some(error) = self.injected_failure.lock().await.take() {
                return Err(error);
            }

            let mut items = self.items.write().await;
            if items.iter().any(|item| item.is(&symbol, market)) {
                return Err(RepositoryError::duplicate(&symbol, market));
            }
            debug!(%symbol, %market, "watchlist entry stored in memory");
            items.push(WatchlistItem::new(symbol, market));
            Ok(())
        })
    }

    fn remove<'a>(
        &'a self,
        symbol: Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<(), RepositoryError>> {
        Box::pin(async move {
            let mut items = self.items.write().await;
            let before = items.len();
            items.retain(|item| !item.is(&symbol, market));
            if items.len() == before {
                return Err(RepositoryError::not_found(&symbol, market));
            }
            Ok(())
        })
    }
}

/// Deterministic quote source keyed on the symbol text.
#[derive(Debug, Clone, Default)]
pub struct FixtureQuoteProvider {
    unavailable: HashSet<WatchlistItem>,
}

impl FixtureQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `(symbol, market)` as having no quote.
    pub fn with_unavailable(mut self, symbol: Symbol, market: Market) -> Self {
        self.unavailable.insert(WatchlistItem::new(symbol, market));
        self
    }

    /// Price the fixture reports for `(symbol, market)`.
    pub fn fixture_price(symbol: &Symbol, market: Market) -> f64 {
        let seed = symbol_seed(symbol);
        match market {
            Market::Us => 20.0 + (seed % 4_800) as f64 / 10.0,
            Market::Jp => 500.0 + (seed % 9_500) as f64,
            Market::Hk => 2.0 + (seed % 6_000) as f64 / 20.0,
        }
    }
}

impl QuoteProvider for FixtureQuoteProvider {
    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
        market: Market,
    ) -> CapabilityFuture<'a, Result<Option<Quote>, RepositoryError>> {
        Box::pin(async move {
            let key = WatchlistItem::new(symbol.clone(), market);
            if self.unavailable.contains(&key) {
                return Ok(None);
            }

            let seed = symbol_seed(symbol);
            let change = ((seed % 801) as f64 - 400.0) / 10_000.0;
            let volume = 5_000 + (seed % 40) * 125_000;
            Quote::new(
                symbol.clone(),
                market,
                Self::fixture_price(symbol, market),
                Some(change),
                Some(volume),
                UtcDateTime::now(),
            )
            .map(Some)
            .map_err(|error| RepositoryError::internal(error.to_string()))
        })
    }
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol
        .as_str()
        .bytes()
        .fold(0_u64, |acc, byte| acc.wrapping_mul(33).wrapping_add(u64::from(byte)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::RepositoryErrorKind;

    fn symbol(raw: &str) -> Symbol {
        Symbol::parse(raw).expect("valid symbol")
    }

    #[tokio::test]
    async fn same_symbol_is_allowed_once_per_market() {
        let store = InMemoryWatchlist::new();
        store.add(symbol("BABA"), Market::Us).await.expect("first add");
        store.add(symbol("BABA"), Market::Hk).await.expect("other market");

        let err = store
            .add(symbol("BABA"), Market::Us)
            .await
            .expect_err("duplicate pair");
        assert_eq!(err.kind(), RepositoryErrorKind::Duplicate);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn remove_only_touches_the_exact_pair() {
        let store = InMemoryWatchlist::with_items([
            WatchlistItem::new(symbol("BABA"), Market::Us),
            WatchlistItem::new(symbol("BABA"), Market::Hk),
        ]);
        store.remove(symbol("BABA"), Market::Hk).await.expect("remove");

        let items = store.list().await.expect("list");
        assert_eq!(items, vec![WatchlistItem::new(symbol("BABA"), Market::Us)]);

        let err = store
            .remove(symbol("BABA"), Market::Hk)
            .await
            .expect_err("already removed");
        assert_eq!(err.kind(), RepositoryErrorKind::NotFound);
    }

    #[tokio::test]
    async fn injected_failure_applies_once() {
        let store = InMemoryWatchlist::new();
        store
            .fail_next_add(RepositoryError::unavailable("offline"))
            .await;

        assert!(store.add(symbol("AAPL"), Market::Us).await.is_err());
        assert!(store.is_empty().await);
        store.add(symbol("AAPL"), Market::Us).await.expect("second try");
    }

    #[tokio::test]
    async fn fixture_quotes_are_deterministic() {
        let provider = FixtureQuoteProvider::new().with_unavailable(symbol("ZZZ"), Market::Us);
        let aapl = symbol("AAPL");

        let first = provider.quote(&aapl, Market::Us).await.expect("quote");
        let second = provider.quote(&aapl, Market::Us).await.expect("quote");
        let (first, second) = (first.expect("available"), second.expect("available"));
        assert_eq!(first.price, second.price);
        assert!(first.price > 0.0);

        let missing = provider.quote(&symbol("ZZZ"), Market::Us).await.expect("ok");
        assert!(missing.is_none());
    }
}
