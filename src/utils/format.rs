use chrono::{DateTime, Utc};
use serde_json::Number;

pub const NOT_AVAILABLE: &str = "N/A";

/// Prefix for amounts quoted in INR.
pub const CURRENCY_SYMBOL: &str = "₹";

/// `₹` followed by the amount with two decimals, or `N/A`.
pub fn money(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value.is_finite() => format!("{}{:.2}", CURRENCY_SYMBOL, value),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn text_or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Upstream number exactly as it appeared in the JSON, or `N/A`.
pub fn number_or_na(value: Option<&Number>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), Number::to_string)
}

/// RFC 3339 timestamps as `YYYY-MM-DD HH:MM:SS UTC`; anything else verbatim.
pub fn timestamp_or_na(value: Option<&str>) -> String {
    match value {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed
                .with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            Err(_) => raw.to_string(),
        },
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
