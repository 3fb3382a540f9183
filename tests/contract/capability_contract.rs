use std::sync::Arc;

use futures::executor::block_on;
use tickwatch_core::{
    FixtureQuoteProvider, InMemoryWatchlist, Market, QuoteProvider, RepositoryErrorKind, Symbol,
    WatchlistItem, WatchlistRepository,
};

struct RepositoryCase {
    name: &'static str,
    repository: Arc<dyn WatchlistRepository>,
}

fn repository_cases() -> Vec<RepositoryCase> {
    vec![
        RepositoryCase {
            name: "in_memory",
            repository: Arc::new(InMemoryWatchlist::new()),
        },
        RepositoryCase {
            name: "in_memory_seeded_with_duplicates",
            repository: Arc::new(InMemoryWatchlist::with_items([
                WatchlistItem::new(symbol("SPY"), Market::Us),
                WatchlistItem::new(symbol("SPY"), Market::Us),
            ])),
        },
    ]
}

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

#[test]
fn list_preserves_insertion_order() {
    for case in repository_cases() {
        let repository = case.repository.as_ref();
        let baseline = block_on(repository.list()).expect("list");

        for (raw, market) in [("QQQ", Market::Us), ("9984", Market::Jp), ("0005", Market::Hk)] {
            block_on(repository.add(symbol(raw), market))
                .unwrap_or_else(|error| panic!("{}: add {raw} failed: {error}", case.name));
        }

        let items = block_on(repository.list()).expect("list");
        let added: Vec<String> = items[baseline.len()..]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(added, vec!["US:QQQ", "JP:9984", "HK:0005"], "{}", case.name);
    }
}

#[test]
fn pair_is_unique_per_market() {
    for case in repository_cases() {
        let repository = case.repository.as_ref();
        block_on(repository.add(symbol("BABA"), Market::Us)).expect("first add");
        block_on(repository.add(symbol("BABA"), Market::Hk)).expect("other market");

        let err = block_on(repository.add(symbol("BABA"), Market::Us)).expect_err("duplicate");
        assert_eq!(err.kind(), RepositoryErrorKind::Duplicate, "{}", case.name);
        assert_eq!(err.code(), "watchlist.duplicate");
    }
}

#[test]
fn seeded_duplicates_collapse_to_one_entry() {
    let cases = repository_cases();
    let seeded = &cases[1];
    let items = block_on(seeded.repository.list()).expect("list");
    assert_eq!(items.len(), 1, "{}", seeded.name);
}

#[test]
fn remove_of_missing_pair_reports_not_found() {
    for case in repository_cases() {
        let err = block_on(case.repository.remove(symbol("NOPE"), Market::Jp))
            .expect_err("missing pair");
        assert_eq!(err.kind(), RepositoryErrorKind::NotFound, "{}", case.name);
        assert!(!err.retryable());
    }
}

#[test]
fn fixture_quotes_cover_every_market() {
    let provider: Arc<dyn QuoteProvider> = Arc::new(FixtureQuoteProvider::new());
    let ticker = symbol("ABC");

    for market in Market::ALL {
        let quote = block_on(provider.quote(&ticker, market))
            .expect("lookup")
            .unwrap_or_else(|| panic!("fixture quote for {market}"));
        assert_eq!(quote.market, market);
        assert_eq!(quote.symbol, ticker);
        assert!(quote.price > 0.0);
        assert_eq!(quote.currency(), market.currency().code());
        assert!(quote.as_of.unix_timestamp() > 0);
    }
}
