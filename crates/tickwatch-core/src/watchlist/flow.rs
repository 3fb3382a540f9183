use std::fmt::{Debug, Formatter};

use tracing::{debug, info, warn};

use crate::capability::{RepositoryError, WatchlistRepository};
use crate::{Market, Symbol, WatchlistItem};

/// Callback notified with `(symbol, market)` when an entry is selected.
pub type SelectCallback = Box<dyn Fn(&Symbol, Market) + Send + Sync>;

/// Visibility of the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Adding,
}

/// Key-equivalent events routed into the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Char(char),
}

/// Result of a submit attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The repository accepted the entry and the form was reset.
    Added(WatchlistItem),
    /// Nothing was sent: the form was hidden or the symbol was blank.
    Ignored,
}

/// What a key event did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Edited,
    Submitted(SubmitOutcome),
    Cancelled,
    Ignored,
}

/// Local state of the watchlist add/remove interaction.
pub struct WatchlistFlow {
    state: FormState,
    pending_symbol: String,
    pending_market: Market,
    on_select: Option<SelectCallback>,
}

impl Default for WatchlistFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for WatchlistFlow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchlistFlow")
            .field("state", &self.state)
            .field("pending_symbol", &self.pending_symbol)
            .field("pending_market", &self.pending_market)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl WatchlistFlow {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
            pending_symbol: String::new(),
            pending_market: Market::default(),
            on_select: None,
        }
    }

    pub fn with_select_callback(
        mut self,
        callback: impl Fn(&Symbol, Market) + Send + Sync + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    pub const fn is_adding(&self) -> bool {
        matches!(self.state, FormState::Adding)
    }

    pub fn pending_symbol(&self) -> &str {
        &self.pending_symbol
    }

    pub const fn pending_market(&self) -> Market {
        self.pending_market
    }

    /// Reveal the add form.
    pub fn begin_add(&mut self) {
        if self.state == FormState::Idle {
            debug!("watchlist add form opened");
        }
        self.state = FormState::Adding;
    }

    /// Replace the pending symbol, uppercased.
    pub fn edit_symbol(&mut self, text: &str) {
        if self.is_adding() {
            self.pending_symbol = text.to_uppercase();
        }
    }

    pub fn select_market(&mut self, market: Market) {
        self.pending_market = market;
    }

    /// Hide the form and drop whatever was typed.
    pub fn cancel(&mut self) {
        if self.is_adding() {
            debug!(pending = %self.pending_symbol, "watchlist add cancelled");
        }
        self.state = FormState::Idle;
        self.pending_symbol.clear();
    }

    /// Send the pending entry to `repository`.
    ///
    /// The only local check is that the trimmed symbol is non-blank; blank
    /// input is ignored without a repository call. On success the form
    /// resets to idle. On failure it stays open with the input intact and
    /// the repository error is handed back unchanged.
    pub async fn submit<R>(&mut self, repository: &R) -> Result<SubmitOutcome, RepositoryError>
    where
        R: WatchlistRepository + ?Sized,
    {
        if !self.is_adding() {
            return Ok(SubmitOutcome::Ignored);
        }

        let Ok(symbol) = Symbol::parse(&self.pending_symbol) else {
            debug!("blank watchlist symbol ignored");
            return Ok(SubmitOutcome::Ignored);
        };
        let market = self.pending_market;
        match repository.add(symbol.clone(), market).await {
            Ok(()) => {
                info!(%symbol, %market, "watchlist entry added");
                self.pending_symbol.clear();
                self.state = FormState::Idle;
                Ok(SubmitOutcome::Added(WatchlistItem::new(symbol, market)))
            }
            Err(error) => {
                warn!(%symbol, %market, code = error.code(), "watchlist add failed: {error}");
                Err(error)
            }
        }
    }

    /// Route a key event: `Enter` submits, `Escape` cancels, printable keys
    /// edit the pending symbol.
    pub async fn handle_key<R>(
        &mut self,
        key: Key,
        repository: &R,
    ) -> Result<KeyOutcome, RepositoryError>
    where
        R: WatchlistRepository + ?Sized,
    {
        if !self.is_adding() {
            return Ok(KeyOutcome::Ignored);
        }

        match key {
            Key::Enter => self.submit(repository).await.map(KeyOutcome::Submitted),
            Key::Escape => {
                self.cancel();
                Ok(KeyOutcome::Cancelled)
            }
            Key::Backspace => {
                self.pending_symbol.pop();
                Ok(KeyOutcome::Edited)
            }
            Key::Char(ch) => {
                self.pending_symbol.extend(ch.to_uppercase());
                Ok(KeyOutcome::Edited)
            }
        }
    }

    /// Ask `repository` to drop exactly `item`. Local state is untouched;
    /// the list is refreshed by whoever owns it.
    pub async fn remove<R>(
        &self,
        repository: &R,
        item: &WatchlistItem,
    ) -> Result<(), RepositoryError>
    where
        R: WatchlistRepository + ?Sized,
    {
        let result = repository.remove(item.symbol.clone(), item.market).await;
        match &result {
            Ok(()) => info!(symbol = %item.symbol, market = %item.market, "watchlist entry removed"),
            Err(error) => warn!(
                symbol = %item.symbol,
                market = %item.market,
                code = error.code(),
                "watchlist remove failed: {error}"
            ),
        }
        result
    }

    /// Notify the embedding view that `item` was picked.
    pub fn select(&self, item: &WatchlistItem) {
        if let Some(callback) = &self.on_select {
            callback(&item.symbol, item.market);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryWatchlist;

    #[test]
    fn starts_idle_with_us_market() {
        let flow = WatchlistFlow::new();
        assert_eq!(flow.state(), FormState::Idle);
        assert_eq!(flow.pending_symbol(), "");
        assert_eq!(flow.pending_market(), Market::Us);
    }

    #[test]
    fn edits_are_uppercased_and_ignored_while_idle() {
        let mut flow = WatchlistFlow::new();
        flow.edit_symbol("aapl");
        assert_eq!(flow.pending_symbol(), "");

        flow.begin_add();
        flow.edit_symbol("aapl");
        assert_eq!(flow.pending_symbol(), "AAPL");
    }

    #[tokio::test]
    async fn keys_build_symbol_and_escape_discards_it() {
        let store = InMemoryWatchlist::new();
        let mut flow = WatchlistFlow::new();
        flow.begin_add();

        for key in [Key::Char('m'), Key::Char('s'), Key::Char('x'), Key::Backspace] {
            flow.handle_key(key, &store).await.expect("edit");
        }
        assert_eq!(flow.pending_symbol(), "MS");

        let outcome = flow.handle_key(Key::Escape, &store).await.expect("cancel");
        assert_eq!(outcome, KeyOutcome::Cancelled);
        assert_eq!(flow.state(), FormState::Idle);
        assert_eq!(flow.pending_symbol(), "");
    }

    #[tokio::test]
    async fn any_non_blank_symbol_reaches_the_repository() {
        let store = InMemoryWatchlist::new();
        let mut flow = WatchlistFlow::new();

        for typed in ["^n225", "brk/b", " BRK B ", "averyveryverylongticker"] {
            flow.begin_add();
            flow.select_market(Market::Jp);
            flow.edit_symbol(typed);

            let outcome = flow.submit(&store).await.expect("add");
            let expected = Symbol::parse(typed).expect("non-blank");
            assert_eq!(
                outcome,
                SubmitOutcome::Added(WatchlistItem::new(expected, Market::Jp))
            );
            assert_eq!(flow.state(), FormState::Idle);
        }

        let stored: Vec<String> = store
            .list()
            .await
            .expect("list")
            .iter()
            .map(|item| item.symbol.to_string())
            .collect();
        assert_eq!(stored, ["^N225", "BRK/B", "BRK B", "AVERYVERYVERYLONGTICKER"]);
    }

    #[tokio::test]
    async fn enter_while_idle_is_ignored() {
        let store = InMemoryWatchlist::new();
        let mut flow = WatchlistFlow::new();
        let outcome = flow.handle_key(Key::Enter, &store).await.expect("no error");
        assert_eq!(outcome, KeyOutcome::Ignored);
    }
}
