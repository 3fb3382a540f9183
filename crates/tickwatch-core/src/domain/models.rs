use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Market, Symbol, UtcDateTime, ValidationError};

/// A `(symbol, market)` pair tracked on the watchlist.
///
/// The pair is the identity: a symbol may be listed once per market.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub symbol: Symbol,
    pub market: Market,
}

impl WatchlistItem {
    pub fn new(symbol: Symbol, market: Market) -> Self {
        Self { symbol, market }
    }

    /// Whether this entry is the given `(symbol, market)` pair.
    pub fn is(&self, symbol: &Symbol, market: Market) -> bool {
        self.market == market && &self.symbol == symbol
    }
}

impl Display for WatchlistItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.market, self.symbol)
    }
}

/// Point-in-time price observation for one watchlist entry.
///
/// Currency is implied by `market`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub market: Market,
    pub price: f64,
    /// Session change as a fraction (`0.0123` is 1.23%).
    pub change_percent: Option<f64>,
    pub volume: Option<u64>,
    pub as_of: UtcDateTime,
}

impl Quote {
    pub fn new(
        symbol: Symbol,
        market: Market,
        price: f64,
        change_percent: Option<f64>,
        volume: Option<u64>,
        as_of: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        if let Some(change) = change_percent {
            if !change.is_finite() {
                return Err(ValidationError::NonFiniteValue {
                    field: "change_percent",
                });
            }
        }

        Ok(Self {
            symbol,
            market,
            price,
            change_percent,
            volume,
            as_of,
        })
    }

    pub const fn currency(&self) -> &'static str {
        crate::currency_for_market(self.market)
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
