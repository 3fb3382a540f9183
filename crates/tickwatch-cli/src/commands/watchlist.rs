use serde::Serialize;
use serde_json::json;
use tickwatch_core::{
    load_rows, QuoteProvider, SubmitOutcome, WatchlistFlow, WatchlistItem, WatchlistRow,
    EMPTY_WATCHLIST_MESSAGE,
};

use crate::cli::{EntryArgs, WatchlistArgs, WatchlistCommand};
use crate::error::CliError;
use crate::output::row_table;
use crate::store::FileWatchlist;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ListResponseData<'a> {
    store: String,
    rows: &'a [WatchlistRow],
}

pub async fn run<Q>(
    args: &WatchlistArgs,
    store: &FileWatchlist,
    quotes: &Q,
) -> Result<CommandResult, CliError>
where
    Q: QuoteProvider + ?Sized,
{
    match &args.command {
        WatchlistCommand::List => list(store, quotes).await,
        WatchlistCommand::Add(entry) => add(entry, store).await,
        WatchlistCommand::Remove(entry) => remove(entry, store).await,
    }
}

async fn list<Q>(store: &FileWatchlist, quotes: &Q) -> Result<CommandResult, CliError>
where
    Q: QuoteProvider + ?Sized,
{
    let rows = load_rows(store, quotes).await?;
    let data = serde_json::to_value(ListResponseData {
        store: store.path().display().to_string(),
        rows: &rows,
    })?;

    let table = if rows.is_empty() {
        vec![EMPTY_WATCHLIST_MESSAGE.to_owned()]
    } else {
        row_table(&rows)
    };
    Ok(CommandResult::new(data, table))
}

/// One-shot add through the same submit path the interactive form uses.
async fn add(entry: &EntryArgs, store: &FileWatchlist) -> Result<CommandResult, CliError> {
    let mut flow = WatchlistFlow::new();
    flow.begin_add();
    flow.select_market(entry.market);
    flow.edit_symbol(&entry.symbol);

    match flow.submit(store).await? {
        SubmitOutcome::Added(item) => Ok(entry_result("added", &item)),
        SubmitOutcome::Ignored => Err(tickwatch_core::ValidationError::EmptySymbol.into()),
    }
}

async fn remove(entry: &EntryArgs, store: &FileWatchlist) -> Result<CommandResult, CliError> {
    let item = WatchlistItem::new(tickwatch_core::Symbol::parse(&entry.symbol)?, entry.market);
    WatchlistFlow::new().remove(store, &item).await?;
    Ok(entry_result("removed", &item))
}

fn entry_result(action: &str, item: &WatchlistItem) -> CommandResult {
    CommandResult::new(
        json!({ "action": action, "entry": item }),
        vec![format!("{action} {item}")],
    )
}
