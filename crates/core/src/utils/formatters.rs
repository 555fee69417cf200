//! Display formatting for monetary values.
//!
//! Stored values are in the base currency (INR); USD display divides by
//! the static conversion rate. INR amounts use Indian digit grouping
//! (thousand, then lakh/crore pairs), USD uses thousands grouping.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use marketdeck_market_data::FiatCurrency;

/// Static USD to INR conversion rate used for display.
pub const USD_TO_INR_RATE: Decimal = dec!(83.12);

const CRORE: Decimal = dec!(10000000);
const MILLION: Decimal = dec!(1000000);

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

fn grouped_amount(value: Decimal, currency: FiatCurrency) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let grouped = match currency {
        FiatCurrency::Inr => group_indian(int_part),
        FiatCurrency::Usd => group_thousands(int_part),
    };
    format!("{}.{}", grouped, frac_part)
}

/// Format a base-currency value in the requested display currency.
pub fn format_currency(value: Decimal, currency: FiatCurrency) -> String {
    let converted = match currency {
        FiatCurrency::Usd => value / USD_TO_INR_RATE,
        FiatCurrency::Inr => value,
    };
    let sign = if converted < Decimal::ZERO { "-" } else { "" };
    let symbol = match currency {
        FiatCurrency::Inr => "₹",
        FiatCurrency::Usd => "$",
    };
    format!("{}{}{}", sign, symbol, grouped_amount(converted, currency))
}

/// Sign-prefixed percentage with two decimals, e.g. "+1.25%".
pub fn format_percentage(value: Decimal) -> String {
    let sign = if value >= Decimal::ZERO { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// Compact market-cap rendering: millions for USD, crores for INR.
pub fn format_market_cap(value: Decimal, currency: FiatCurrency) -> String {
    match currency {
        FiatCurrency::Usd => {
            format!("${:.2}M", value / USD_TO_INR_RATE / MILLION)
        }
        FiatCurrency::Inr => {
            format!("₹{:.2}Cr", value / CRORE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_inr_uses_indian_grouping() {
        assert_eq!(format_currency(dec!(532.5), FiatCurrency::Inr), "₹532.50");
        assert_eq!(format_currency(dec!(1234.56), FiatCurrency::Inr), "₹1,234.56");
        assert_eq!(format_currency(dec!(123456.78), FiatCurrency::Inr), "₹1,23,456.78");
        assert_eq!(format_currency(dec!(12345678.9), FiatCurrency::Inr), "₹1,23,45,678.90");
    }

    #[test]
    fn test_format_currency_usd_converts_from_base() {
        assert_eq!(format_currency(dec!(8312), FiatCurrency::Usd), "$100.00");
        assert_eq!(format_currency(dec!(83120000), FiatCurrency::Usd), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.5), FiatCurrency::Inr), "-₹1,234.50");
    }

    #[test]
    fn test_format_percentage_signs() {
        assert_eq!(format_percentage(dec!(1.254)), "+1.25%");
        assert_eq!(format_percentage(dec!(0)), "+0.00%");
        assert_eq!(format_percentage(dec!(-0.5)), "-0.50%");
    }

    #[test]
    fn test_format_market_cap() {
        assert_eq!(format_market_cap(dec!(10000000), FiatCurrency::Inr), "₹1.00Cr");
        assert_eq!(format_market_cap(dec!(83120000), FiatCurrency::Usd), "$1.00M");
    }
}
