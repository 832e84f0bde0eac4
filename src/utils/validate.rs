use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub static THEME_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

pub static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-1][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2}|\d{2}-\d{2})$").unwrap());

static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-\d{2}$").unwrap());

/// Parses a full `YYYY-MM-DD` date, or a bare `MM-DD` expanded to the
/// current year. The expanded string is parsed again with chrono, so an
/// impossible date (02-29 outside a leap year, 04-31) is rejected rather
/// than wrapped into the next month.
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(input) {
        return None;
    }
    let expanded = if MONTH_DAY_RE.is_match(input) {
        format!("{}-{}", Local::now().year(), input)
    } else {
        input.to_string()
    };
    NaiveDate::parse_from_str(&expanded, "%Y-%m-%d").ok()
}

/// JavaScript-style boolean coercion, used for the tag `pinned` flag.
pub fn truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
