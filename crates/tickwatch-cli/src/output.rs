use tickwatch_core::WatchlistRow;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

const HEADERS: [&str; 5] = ["SYMBOL", "MARKET", "PRICE", "CHANGE", "VOLUME"];

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in &result.table {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Left-aligned text columns with a header line.
pub fn row_table(rows: &[WatchlistRow]) -> Vec<String> {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.symbol.to_string(),
                row.market.to_string(),
                row.price.clone(),
                row.change.clone(),
                row.volume.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_owned);
    std::iter::once(&header)
        .chain(cells.iter())
        .map(|line| {
            line.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_owned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickwatch_core::{Market, QuoteState, Symbol, WatchlistItem};

    #[test]
    fn aligns_columns_by_widest_cell() {
        let item = WatchlistItem::new(Symbol::parse("GOOGL").expect("valid"), Market::Us);
        let row = WatchlistRow::project(&item, &QuoteState::Unavailable);

        let lines = row_table(&[row]);
        assert_eq!(lines[0], "SYMBOL  MARKET  PRICE  CHANGE  VOLUME");
        assert_eq!(lines[1], "GOOGL   US      -      -       -");
    }
}
