//! Display formatting shared by the chart renderer, metric cards and export.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_SYMBOL, DISPLAY_DECIMAL_PRECISION};

const THOUSAND: Decimal = Decimal::ONE_THOUSAND;

/// Rounds a monetary amount for display, half away from zero. Never yields `-0`.
pub fn round_display(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Formats an amount as full currency with grouping, e.g. `$1,234,567.89`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_display(value);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(whole),
        fraction
    )
}

/// Formats an amount abbreviated to thousands for the value axis, e.g. `$125k`.
pub fn format_compact_currency(value: Decimal) -> String {
    let thousands = (value / THOUSAND)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if thousands.is_zero() {
        return format!("{}0k", CURRENCY_SYMBOL);
    }
    let sign = if thousands.is_sign_negative() { "-" } else { "" };
    format!(
        "{}{}{}k",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(&thousands.abs().normalize().to_string())
    )
}

/// Formats a percentage value (already multiplied by 100), e.g. `12.50%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", round_display(value))
}

/// Date axis label: abbreviated month and two-digit year, e.g. `Mar 24`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %y").to_string()
}

/// Tooltip header: e.g. `Mar 5, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
