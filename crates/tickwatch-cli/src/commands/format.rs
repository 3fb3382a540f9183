use serde_json::json;
use tickwatch_core::format::{
    currency_symbol, format_greek, format_percent, format_price, format_volume, PLACEHOLDER,
};

use crate::cli::{FormatArgs, FormatCommand};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &FormatArgs) -> Result<CommandResult, CliError> {
    let (kind, input, rendered) = match &args.command {
        FormatCommand::Price { value, currency } => {
            let rendered = format_price(parse_decimal(value)?, currency);
            ("price", value, rendered)
        }
        FormatCommand::Percent { value } => ("percent", value, format_percent(parse_decimal(value)?)),
        FormatCommand::Volume { value } => ("volume", value, format_volume(parse_volume(value)?)),
        FormatCommand::Greek { value } => ("greek", value, format_greek(parse_decimal(value)?)),
    };

    let mut data = json!({ "kind": kind, "input": input, "formatted": rendered });
    if let FormatCommand::Price { currency, .. } = &args.command {
        data["currency_symbol"] = json!(currency_symbol(currency));
    }
    Ok(CommandResult::new(data, vec![rendered]))
}

fn parse_decimal(raw: &str) -> Result<Option<f64>, CliError> {
    parse_optional(raw, "number")
}

fn parse_volume(raw: &str) -> Result<Option<u64>, CliError> {
    parse_optional(raw, "volume (non-negative integer)")
}

/// `-` and the empty string stand for an absent value.
fn parse_optional<T: std::str::FromStr>(
    raw: &str,
    expected: &'static str,
) -> Result<Option<T>, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER {
        return Ok(None);
    }
    let cleaned = trimmed.replace('_', "");
    cleaned
        .parse()
        .map(Some)
        .map_err(|_| CliError::InvalidNumber {
            value: raw.to_owned(),
            expected,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(command: FormatCommand) -> CommandResult {
        run(&FormatArgs { command }).expect("format succeeds")
    }

    #[test]
    fn dash_means_absent() {
        let result = format(FormatCommand::Greek {
            value: String::from("-"),
        });
        assert_eq!(result.table, vec!["-"]);
    }

    #[test]
    fn price_reports_currency_symbol() {
        let result = format(FormatCommand::Price {
            value: String::from("1234.5"),
            currency: String::from("HKD"),
        });
        assert_eq!(result.data["formatted"], "HK$1,234.50");
        assert_eq!(result.data["currency_symbol"], "HK$");
    }

    #[test]
    fn volume_accepts_digit_separators() {
        let result = format(FormatCommand::Volume {
            value: String::from("2_500_000"),
        });
        assert_eq!(result.table, vec!["2.5M"]);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = run(&FormatArgs {
            command: FormatCommand::Volume {
                value: String::from("-5"),
            },
        })
        .err()
        .expect("negative volume is invalid");
        assert_eq!(err.exit_code(), 2);
    }
}
