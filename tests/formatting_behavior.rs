//! Behavior-driven tests for display formatting
//!
//! These tests pin down WHAT a user sees in a price, percent, volume, or
//! greek column, including the placeholder for missing data.

use tickwatch_core::format::{
    currency_symbol, format_greek, format_percent, format_price, format_price_default,
    format_volume, DEFAULT_CURRENCY, PLACEHOLDER,
};
use tickwatch_core::{currency_for_market, Market};

// =============================================================================
// Prices
// =============================================================================

#[test]
fn every_usd_price_starts_with_dollar_and_has_two_decimals() {
    // Given: A spread of prices from sub-cent to millions, positive and negative
    let prices = [
        0.0, 0.004, 0.005, 1.0, 9.999, 12.3, 999.995, 1_000.0, 65_432.1, 1_234_567.891, -42.125,
    ];

    for price in prices {
        // When: Each price is rendered in USD
        let rendered = format_price(Some(price), "USD");

        // Then: It starts with "$" and carries exactly two fraction digits
        assert!(rendered.starts_with('$'), "{rendered} should start with $");
        let (_, fraction) = rendered
            .rsplit_once('.')
            .unwrap_or_else(|| panic!("{rendered} should have a decimal point"));
        assert_eq!(fraction.len(), 2, "{rendered} should have two decimals");
        assert!(fraction.chars().all(|ch| ch.is_ascii_digit()));
    }
}

#[test]
fn yen_price_uses_yen_symbol_and_thousands_separator() {
    assert_eq!(format_price(Some(1234.5), "JPY"), "¥1,234.50");
}

#[test]
fn price_currency_follows_watchlist_market() {
    // Given: The same price on each market
    let rendered: Vec<String> = Market::ALL
        .iter()
        .map(|market| format_price(Some(88.0), currency_for_market(*market)))
        .collect();

    // Then: Each market shows its own currency symbol
    assert_eq!(rendered, vec!["$88.00", "¥88.00", "HK$88.00"]);
}

#[test]
fn unknown_currency_never_fails() {
    assert_eq!(currency_symbol("XYZ"), "$");
    assert_eq!(format_price(Some(5.0), "GBP"), "$5.00");
    assert_eq!(DEFAULT_CURRENCY, "USD");
    assert_eq!(format_price_default(Some(5.0)), "$5.00");
}

// =============================================================================
// Absent values
// =============================================================================

#[test]
fn absent_values_render_placeholder_in_every_column() {
    assert_eq!(PLACEHOLDER, "-");
    assert_eq!(format_price(None, "USD"), "-");
    assert_eq!(format_price_default(None), "-");
    assert_eq!(format_percent(None), "-");
    assert_eq!(format_volume(None), "-");
    assert_eq!(format_greek(None), "-");
}

// =============================================================================
// Percent, volume, greeks
// =============================================================================

#[test]
fn percent_scales_fraction_by_one_hundred() {
    assert_eq!(format_percent(Some(0.0567)), "5.67%");
    assert_eq!(format_percent(Some(0.0)), "0.00%");
    assert_eq!(format_percent(Some(1.0)), "100.00%");
}

#[test]
fn volume_switches_suffix_exactly_at_thresholds() {
    assert_eq!(format_volume(Some(500)), "500");
    assert_eq!(format_volume(Some(999)), "999");
    assert_eq!(format_volume(Some(1_000)), "1.0K");
    assert_eq!(format_volume(Some(999_999)), "1000.0K");
    assert_eq!(format_volume(Some(1_000_000)), "1.0M");
    assert_eq!(format_volume(Some(2_500_000)), "2.5M");
}

#[test]
fn greeks_have_four_decimals() {
    assert_eq!(format_greek(Some(0.1234567)), "0.1235");
    assert_eq!(format_greek(Some(-0.5)), "-0.5000");
    assert_eq!(format_greek(Some(1.0)), "1.0000");
}

#[test]
fn prices_round_from_the_stored_value_not_the_typed_one() {
    // Given: Prices that look like ties but are stored just below them
    let below_tie = [(0.015, "$0.01"), (0.075, "$0.07"), (2.675, "$2.67")];

    for (price, expected) in below_tie {
        // When: They are rendered
        // Then: They round down, as the stored binary value dictates
        assert_eq!(format_price(Some(price), "USD"), expected);
    }

    // And: A true tie still rounds away from zero
    assert_eq!(format_volume(Some(1_250_000)), "1.3M");
    assert_eq!(format_greek(Some(-0.0)), "0.0000");
}
