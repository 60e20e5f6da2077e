//! Locale-fixed presentation formatting for amounts and dates.
//!
//! Everything here is pure and total: a negative amount never occurs in the
//! live collection, but it still formats without error.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("MXN")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "es-MX".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "MXN" | "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Fixed-precision number body with grouping separators, no symbol.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Renders an amount in the given currency and locale, sign before symbol.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Renders an amount with the crate's fixed locale/currency pair (es-MX, MXN).
pub fn format_currency(amount: f64) -> String {
    format_currency_value(amount, &CurrencyCode::default(), &LocaleConfig::default())
}

/// Short day-and-month axis label in the fixed display locale, e.g. `1 ene`.
pub fn format_short_day(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_label(date.month()))
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "ene",
        2 => "feb",
        3 => "mar",
        4 => "abr",
        5 => "may",
        6 => "jun",
        7 => "jul",
        8 => "ago",
        9 => "sep",
        10 => "oct",
        11 => "nov",
        12 => "dic",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_default_currency_with_grouping() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn negative_amounts_format_with_leading_sign() {
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
    }

    #[test]
    fn respects_minor_units_per_currency() {
        let locale = LocaleConfig::default();
        let yen = CurrencyCode::new("JPY");
        assert_eq!(format_currency_value(1500.0, &yen, &locale), "¥1,500");
        let dinar = CurrencyCode::new("KWD");
        assert_eq!(format_currency_value(2.5, &dinar, &locale), "KWD2.500");
    }

    #[test]
    fn format_number_applies_locale_separators() {
        let locale = LocaleConfig {
            language_tag: "es-AR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(format_number(&locale, 1234567.891, 2), "1.234.567,89");
    }

    #[test]
    fn short_day_uses_spanish_month_labels() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_short_day(jan), "1 ene");
        let dec = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_short_day(dec), "31 dic");
    }
}
