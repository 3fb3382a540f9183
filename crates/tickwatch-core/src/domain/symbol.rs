use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Watchlist ticker as typed by the user: trimmed and uppercased.
///
/// Any non-blank text is accepted. Exchange codes (`7203`), index tickers
/// (`^N225`) and share classes (`BRK/B`) all pass through unchanged apart
/// from case; rejecting unknown symbols is the repository's call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "" => Err(ValidationError::EmptySymbol),
            text => Ok(Self(text.to_uppercase())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        let parsed = Symbol::parse("  brk/b ").expect("non-blank");
        assert_eq!(parsed.as_str(), "BRK/B");
    }

    #[test]
    fn keeps_index_and_exchange_codes() {
        for raw in ["^n225", "0700", "7203", "BRK B", "ABCDEFGHIJKLMNOPQ"] {
            let parsed = Symbol::parse(raw).expect("non-blank");
            assert_eq!(parsed.as_str(), raw.to_uppercase());
        }
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(Symbol::parse(""), Err(ValidationError::EmptySymbol));
        assert_eq!(Symbol::parse(" \t "), Err(ValidationError::EmptySymbol));
    }

    #[test]
    fn blank_json_symbol_fails_to_deserialize() {
        assert!(serde_json::from_str::<Symbol>("\"  \"").is_err());
        let parsed: Symbol = serde_json::from_str("\"msft\"").expect("deserialize");
        assert_eq!(parsed.to_string(), "MSFT");
    }
}
