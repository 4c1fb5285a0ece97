//! Per-field coercion
//!
//! Every parser returns `Option`; `None` means "use the field default".
//! Nothing here can fail the pipeline.

use crate::types::JsonValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Plain date layouts, tried in order (month-first before day-first)
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

/// Date-time layouts; only the date part is kept
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Best-effort date parsing
///
/// Accepts RFC 3339 timestamps, the layouts above, compact `YYYYMMDD` and
/// `YYYY-MM` (first of month). Anything else, including non-string values,
/// is `None`.
pub fn parse_date(value: &JsonValue) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(date);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.date());
    }

    parse_compact_date(text)
}

/// `YYYYMMDD` and `YYYY-MM`
fn parse_compact_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() == 8 && bytes.iter().all(u8::is_ascii_digit) {
        let year = text[0..4].parse().ok()?;
        let month = text[4..6].parse().ok()?;
        let day = text[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if bytes.len() == 7 && bytes[4] == b'-' {
        let year = text[0..4].parse().ok()?;
        let month = text[5..7].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    None
}

/// Parse any numeric-looking value into a finite `f64`
fn parse_number(value: &JsonValue) -> Option<f64> {
    let n = match value {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
        JsonValue::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Parse a transaction count, truncating fractions toward zero
///
/// Negative or out-of-range counts are `None`.
pub fn parse_count(value: &JsonValue) -> Option<u64> {
    // Exact integers first so large counts keep full precision
    match value {
        JsonValue::Number(n) if n.is_u64() => return n.as_u64(),
        JsonValue::String(s) => {
            if let Ok(n) = s.trim().parse::<u64>() {
                return Some(n);
            }
        }
        _ => {}
    }

    let truncated = parse_number(value)?.trunc();
    if truncated < 0.0 || truncated >= u64::MAX as f64 {
        return None;
    }
    Some(truncated as u64)
}

/// Parse a transaction amount
pub fn parse_amount(value: &JsonValue) -> Option<f64> {
    parse_number(value)
}

/// String form of a value; `null` renders as the empty string
pub fn stringify(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
