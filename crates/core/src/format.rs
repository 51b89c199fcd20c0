use regex::Regex;
use std::sync::OnceLock;

pub const CURRENCY_SYMBOL: &str = "$";

fn float_prefix() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").ok())
        .as_ref()
}

fn integer_prefix() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?\d+").ok()).as_ref()
}

/// Parses the longest numeric prefix of `text`, the way form inputs are read.
///
/// Anything without a numeric prefix, and anything that does not land on a
/// finite value, reads as zero.
pub fn parse_number_or_zero(text: &str) -> f64 {
    float_prefix()
        .and_then(|pattern| pattern.find(text.trim_start()))
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_integer_prefix(text: &str) -> Option<i64> {
    integer_prefix()
        .and_then(|pattern| pattern.find(text.trim_start()))
        .and_then(|found| found.as_str().parse::<i64>().ok())
}

/// Two decimals, halves rounded away from zero.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let cents = (value * 100.0).round();
    // adding zero folds -0.0 into 0.0
    format!("{:.2}", cents / 100.0 + 0.0)
}

pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_price(value))
}

pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit(|c: char| c == '\\' || c == '/')
        .next()
        .unwrap_or(path)
}
