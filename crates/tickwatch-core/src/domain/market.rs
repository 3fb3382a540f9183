use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Exchange venue a watchlist entry is tracked on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    #[default]
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "JP")]
    Jp,
    #[serde(rename = "HK")]
    Hk,
}

impl Market {
    pub const ALL: [Self; 3] = [Self::Us, Self::Jp, Self::Hk];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Jp => "JP",
            Self::Hk => "HK",
        }
    }

    /// Display currency for quotes on this market.
    pub const fn currency(self) -> Currency {
        match self {
            Self::Us => Currency::Usd,
            Self::Jp => Currency::Jpy,
            Self::Hk => Currency::Hkd,
        }
    }
}

impl Display for Market {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "JP" => Ok(Self::Jp),
            "HK" => Ok(Self::Hk),
            other => Err(ValidationError::InvalidMarket {
                value: other.to_owned(),
            }),
        }
    }
}

/// Display currency, derived from [`Market`] and never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Jpy,
    Hkd,
}

impl Currency {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Jpy => "JPY",
            Self::Hkd => "HKD",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Currency code used when rendering prices for `market`.
pub const fn currency_for_market(market: Market) -> &'static str {
    market.currency().code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_market_case_insensitively() {
        assert_eq!(Market::from_str("jp").expect("must parse"), Market::Jp);
        assert_eq!(Market::from_str(" HK ").expect("must parse"), Market::Hk);
    }

    #[test]
    fn rejects_unknown_market() {
        let err = Market::from_str("SG").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidMarket { .. }));
    }

    #[test]
    fn maps_every_market_to_its_currency() {
        assert_eq!(currency_for_market(Market::Us), "USD");
        assert_eq!(currency_for_market(Market::Jp), "JPY");
        assert_eq!(currency_for_market(Market::Hk), "HKD");
    }

    #[test]
    fn serializes_as_uppercase_code() {
        let json = serde_json::to_string(&Market::Hk).expect("serialize");
        assert_eq!(json, "\"HK\"");
        let parsed: Market = serde_json::from_str("\"JP\"").expect("deserialize");
        assert_eq!(parsed, Market::Jp);
    }
}
