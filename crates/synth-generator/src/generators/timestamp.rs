//! Calendar date shifting.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;
use serde_json::Value;

/// Serialization format for shifted dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shift a date-like string by a whole number of days drawn uniformly from
/// `[-max_shift_days, max_shift_days]`.
///
/// - Empty input yields `None`.
/// - Unparseable input, or a shift past the representable calendar, is
///   returned unchanged.
/// - Any time-of-day component is discarded; output is `YYYY-MM-DD`.
pub fn shift_date<R: Rng>(rng: &mut R, input: &str, max_shift_days: i64) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let Some(date) = parse_date(input) else {
        return Some(input.to_string());
    };

    let span = max_shift_days.saturating_abs();
    let offset = rng.gen_range(-span..=span);

    // Offsets beyond chrono's range leave the date as it was
    match Duration::try_days(offset).and_then(|delta| date.checked_add_signed(delta)) {
        Some(shifted) => Some(shifted.format(DATE_FORMAT).to_string()),
        None => Some(input.to_string()),
    }
}

/// Shift a JSON value holding a date.
///
/// Null, `false` and the empty string become null. Strings are shifted with
/// [`shift_date`]. Any other value is returned unchanged.
pub fn shift_date_value<R: Rng>(rng: &mut R, value: &Value, max_shift_days: i64) -> Value {
    match value {
        Value::Null | Value::Bool(false) => Value::Null,
        Value::String(s) => shift_date(rng, s, max_shift_days)
            .map(Value::String)
            .unwrap_or(Value::Null),
        other => other.clone(),
    }
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parse a date string in various formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    for format in [DATE_FORMAT, "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    None
}
