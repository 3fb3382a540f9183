//! Display formatting for market values.
//!
//! Every function here is total: an absent value (`None`) or a non-finite
//! one renders as [`PLACEHOLDER`] instead of failing.
//!
//! | Function | Example |
//! |----------|---------|
//! | [`format_price`] | `Some(1234.5), "JPY"` → `¥1,234.50` |
//! | [`format_percent`] | `Some(0.0567)` → `5.67%` |
//! | [`format_change`] | `Some(0.0123)` → `+1.23%` |
//! | [`format_volume`] | `Some(2_500_000)` → `2.5M` |
//! | [`format_greek`] | `Some(0.1234567)` → `0.1235` |
//!
//! Fixed-digit rendering rounds the exact binary value, so `0.015` (stored
//! just below the tie) prints `0.01`. Exact ties round away from zero.

/// Rendered in place of any absent value.
pub const PLACEHOLDER: &str = "-";

/// Currency assumed by [`format_price_default`].
pub const DEFAULT_CURRENCY: &str = "USD";

/// Symbol used for currency codes outside the known set.
pub const FALLBACK_CURRENCY_SYMBOL: &str = "$";

const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;

/// Fraction digits after which every finite `f64` prints exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Resolve the display symbol for an ISO currency code.
pub fn currency_symbol(code: &str) -> &'static str {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" => "$",
        "JPY" => "¥",
        "HKD" => "HK$",
        _ => FALLBACK_CURRENCY_SYMBOL,
    }
}

/// Price with currency symbol, two decimals, and `,` thousands separators.
pub fn format_price(price: Option<f64>, currency: &str) -> String {
    match finite(price) {
        Some(price) => format!(
            "{}{}",
            currency_symbol(currency),
            group_thousands(&fixed(price, 2))
        ),
        None => PLACEHOLDER.to_owned(),
    }
}

/// [`format_price`] in [`DEFAULT_CURRENCY`].
pub fn format_price_default(price: Option<f64>) -> String {
    format_price(price, DEFAULT_CURRENCY)
}

/// Fraction rendered as a percentage with two decimals.
pub fn format_percent(value: Option<f64>) -> String {
    match finite(value) {
        Some(value) => format!("{}%", fixed(value * 100.0, 2)),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Like [`format_percent`] but always signed, for change columns.
pub fn format_change(value: Option<f64>) -> String {
    match finite(value) {
        Some(value) => {
            let sign = if value > 0.0 { "+" } else { "" };
            format!("{sign}{}%", fixed(value * 100.0, 2))
        }
        None => PLACEHOLDER.to_owned(),
    }
}

/// Share volume with `K` / `M` magnitude suffixes.
///
/// Thresholds are inclusive: exactly 1,000 is `1.0K` and exactly
/// 1,000,000 is `1.0M`.
pub fn format_volume(volume: Option<u64>) -> String {
    match volume {
        Some(volume) if volume >= MILLION => {
            format!("{}M", fixed(volume as f64 / MILLION as f64, 1))
        }
        Some(volume) if volume >= THOUSAND => {
            format!("{}K", fixed(volume as f64 / THOUSAND as f64, 1))
        }
        Some(volume) => volume.to_string(),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Option greek with four decimals.
pub fn format_greek(value: Option<f64>) -> String {
    match finite(value) {
        Some(value) => fixed(value, 4),
        None => PLACEHOLDER.to_owned(),
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    // `+ 0.0` turns -0.0 into 0.0.
    value.filter(|value| value.is_finite()).map(|value| value + 0.0)
}

fn fixed(value: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    // The expansion is exact, so a 5 in the first dropped place is at or
    // above the halfway point.
    if fraction.as_bytes().get(digits).is_some_and(|next| *next >= b'5') {
        round_up(&mut kept);
    }

    let split = kept.len() - digits;
    let (integer, fraction) = kept.split_at(split);
    let mut rendered = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(integer.iter().map(|digit| char::from(*digit)));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(fraction.iter().map(|digit| char::from(*digit)));
    }
    rendered
}

fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
