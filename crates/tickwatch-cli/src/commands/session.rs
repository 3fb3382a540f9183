//! Line-driven watchlist session.
//!
//! Each input line is one UI event fed into [`WatchlistFlow`]. The session
//! plays the embedding view: it owns the list refresh and receives
//! selections through the flow's callback.

use std::io::Write;
use std::str::FromStr;

use tickwatch_core::{
    resolve_rows, Key, KeyOutcome, ListState, Market, QuoteProvider, SubmitOutcome, Symbol,
    WatchlistFlow, WatchlistItem, WatchlistRepository, WatchlistRow,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::CliError;
use crate::output::row_table;

const HELP: &str = "events: add | type <text> | backspace | market <US|JP|HK> | enter | esc | \
remove <symbol> [market] | select <symbol> [market] | list | help | quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Add,
    Type(String),
    Key(Key),
    Market(Market),
    Remove(WatchlistItem),
    Select(WatchlistItem),
    List,
    Help,
    Quit,
}

pub async fn run_stdio<R, Q>(repository: &R, quotes: &Q) -> Result<(), CliError>
where
    R: WatchlistRepository + ?Sized,
    Q: QuoteProvider + ?Sized,
{
    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout().lock();
    run_script(input, &mut output, repository, quotes).await
}

pub async fn run_script<I, W, R, Q>(
    input: I,
    output: &mut W,
    repository: &R,
    quotes: &Q,
) -> Result<(), CliError>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: WatchlistRepository + ?Sized,
    Q: QuoteProvider + ?Sized,
{
    let (selected_tx, mut selected_rx) = mpsc::unbounded_channel();
    let mut flow = WatchlistFlow::new().with_select_callback(move |symbol, market| {
        // The receiver lives as long as the session loop.
        let _ = selected_tx.send(WatchlistItem::new(symbol.clone(), market));
    });

    writeln!(output, "{HELP}")?;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_event(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "error: {message}")?;
                continue;
            }
        };
        debug!(?event, state = ?flow.state(), "session event");

        match event {
            Event::Quit => break,
            Event::Help => writeln!(output, "{HELP}")?,
            Event::Add => {
                flow.begin_add();
                writeln!(output, "adding on {}", flow.pending_market())?;
            }
            Event::Type(text) => {
                for ch in text.chars() {
                    flow.handle_key(Key::Char(ch), repository).await?;
                }
                report_form(output, &flow)?;
            }
            Event::Market(market) => {
                flow.select_market(market);
                report_form(output, &flow)?;
            }
            Event::Key(key) => match flow.handle_key(key, repository).await {
                Ok(KeyOutcome::Submitted(SubmitOutcome::Added(item))) => {
                    writeln!(output, "added {item}")?;
                }
                Ok(KeyOutcome::Submitted(SubmitOutcome::Ignored)) | Ok(KeyOutcome::Ignored) => {
                    writeln!(output, "ignored")?;
                }
                Ok(KeyOutcome::Cancelled) => writeln!(output, "cancelled")?,
                Ok(KeyOutcome::Edited) => report_form(output, &flow)?,
                Err(error) => {
                    writeln!(output, "error: {error}")?;
                    report_form(output, &flow)?;
                }
            },
            Event::Remove(item) => match flow.remove(repository, &item).await {
                Ok(()) => writeln!(output, "removed {item}")?,
                Err(error) => writeln!(output, "error: {error}")?,
            },
            Event::Select(item) => flow.select(&item),
            Event::List => {
                draw_list(output, &ListState::Loading)?;
                match ListState::fetch(repository).await {
                    Ok(list) => {
                        draw_list(output, &list)?;
                        if !list.is_empty() {
                            draw_rows(output, &resolve_rows(list.items(), quotes).await)?;
                        }
                    }
                    Err(error) => writeln!(output, "error: {error}")?,
                }
            }
        }

        while let Ok(item) = selected_rx.try_recv() {
            writeln!(output, "selected {item}")?;
        }
    }

    output.flush()?;
    Ok(())
}

/// Status line, or the entries with their quotes still pending.
fn draw_list<W: Write>(output: &mut W, list: &ListState) -> Result<(), CliError> {
    match list.status() {
        Some(status) => writeln!(output, "{status}")?,
        None => draw_rows(output, &list.pending_rows())?,
    }
    Ok(())
}

fn draw_rows<W: Write>(output: &mut W, rows: &[WatchlistRow]) -> Result<(), CliError> {
    for line in row_table(rows) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

fn report_form<W: Write>(output: &mut W, flow: &WatchlistFlow) -> Result<(), CliError> {
    if flow.is_adding() {
        writeln!(
            output,
            "symbol: {} market: {}",
            flow.pending_symbol(),
            flow.pending_market()
        )?;
    } else {
        writeln!(output, "not adding (use 'add' first)")?;
    }
    Ok(())
}

fn parse_event(line: &str) -> Result<Option<Event>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    let event = match name.to_ascii_lowercase().as_str() {
        "add" => Event::Add,
        "type" => Event::Type(rest.to_owned()),
        "backspace" => Event::Key(Key::Backspace),
        "enter" => Event::Key(Key::Enter),
        "esc" | "escape" => Event::Key(Key::Escape),
        "market" => Event::Market(Market::from_str(rest).map_err(|error| error.to_string())?),
        "remove" => Event::Remove(parse_entry(rest)?),
        "select" => Event::Select(parse_entry(rest)?),
        "list" => Event::List,
        "help" => Event::Help,
        "quit" | "exit" => Event::Quit,
        other => return Err(format!("unknown event '{other}'")),
    };
    Ok(Some(event))
}

fn parse_entry(rest: &str) -> Result<WatchlistItem, String> {
    let mut parts = rest.split_whitespace();
    let symbol = Symbol::parse(parts.next().unwrap_or_default()).map_err(|e| e.to_string())?;
    let market = match parts.next() {
        Some(raw) => Market::from_str(raw).map_err(|e| e.to_string())?,
        None => Market::default(),
    };
    Ok(WatchlistItem::new(symbol, market))
}
