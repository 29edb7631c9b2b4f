//! Date parsing and calendar arithmetic for loan documents.
//!
//! Dates arrive from LOS exports, credit reports, and title documents in a
//! handful of US and ISO layouts. Parsing tries a fixed ordered format list
//! first, then a permissive free-text fallback; failures are `None`, never a
//! panic. The two duration helpers are the exception: they signal an
//! explicit error for unparseable input, and callers inside validators fall
//! back to NOT_APPLICABLE.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use thiserror::Error;

/// Explicit formats tried in order before the free-text fallback.
pub const SUPPORTED_FORMATS: &[&str] = &[
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Free-text fallback layouts: ISO datetimes, written month forms,
/// two-digit years, compact dates.
const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d %Y",
    "%m/%d/%y",
    "%m-%d-%y",
    "%Y%m%d",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("unparseable date: {0}")]
    Unparseable(String),
}

/// Parse a raw field value into a date/time.
///
/// Empty or absent input and non-scalar values are `None`; so is anything no
/// format accepts.
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(text) => parse_date_str(text),
        Value::Number(number) => parse_date_str(&number.to_string()),
        _ => None,
    }
}

/// Parse a raw string into a date/time.
pub fn parse_date_str(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in SUPPORTED_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    parse_freeform(trimmed)
}

fn parse_freeform(trimmed: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.naive_local());
    }
    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime);
        }
    }
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Absolute calendar-month difference, ignoring day-of-month entirely.
///
/// Two dates in the same calendar month yield 0 regardless of their days.
pub fn months_between_dates(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let years = i64::from(b.date().year()) - i64::from(a.date().year());
    let months = i64::from(b.date().month()) - i64::from(a.date().month());
    (years * 12 + months).abs()
}

/// Absolute day difference.
pub fn days_between_dates(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (b - a).num_days().abs()
}

/// Absolute calendar-month difference between two raw values.
///
/// Unlike [`parse_date`], unparseable input here is a caller error, not a
/// null result: validators that need this difference must already have
/// decided both dates are required.
pub fn months_between(a: &Value, b: &Value) -> Result<i64, DateError> {
    Ok(months_between_dates(require_date(a)?, require_date(b)?))
}

/// Absolute day difference between two raw values.
pub fn days_between(a: &Value, b: &Value) -> Result<i64, DateError> {
    Ok(days_between_dates(require_date(a)?, require_date(b)?))
}

/// Absolute calendar-month difference between a raw value and now.
pub fn months_since(value: &Value) -> Result<i64, DateError> {
    Ok(months_between_dates(require_date(value)?, now()))
}

/// Absolute day difference between a raw value and now.
pub fn days_since(value: &Value) -> Result<i64, DateError> {
    Ok(days_between_dates(require_date(value)?, now()))
}

fn require_date(value: &Value) -> Result<NaiveDateTime, DateError> {
    parse_date(value).ok_or_else(|| DateError::Unparseable(value.to_string()))
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    #[test]
    fn supported_formats_parse_in_order() {
        for raw in [
            "01-15-2024",
            "2024-01-15",
            "15-01-2024",
            "01/15/2024",
            "2024/01/15",
        ] {
            let parsed = parse_date_str(raw).expect(raw);
            assert_eq!(parsed.date().year(), 2024, "{raw}");
        }
    }

    #[test]
    fn freeform_fallback_handles_written_months() {
        let parsed = parse_date_str("January 15, 2024").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(parse_date_str("not a date").is_none());
        assert!(parse_date_str("").is_none());
    }

    #[test]
    fn parse_date_ignores_non_scalars() {
        assert!(parse_date(&json!(null)).is_none());
        assert!(parse_date(&json!({"d": "2024-01-01"})).is_none());
        assert!(parse_date(&json!("2024-01-01")).is_some());
    }

    #[test]
    fn month_difference_is_calendar_arithmetic() {
        // Same month, different days.
        assert_eq!(
            months_between(&json!("2024-01-01"), &json!("2024-01-31")).unwrap(),
            0
        );
        assert_eq!(
            months_between(&json!("2020-01-01"), &json!("2021-02-15")).unwrap(),
            13
        );
    }

    #[test]
    fn differences_are_symmetric() {
        let a = json!("2020-01-01");
        let b = json!("2025-12-31");
        assert_eq!(
            months_between(&a, &b).unwrap(),
            months_between(&b, &a).unwrap()
        );
        assert_eq!(days_between(&a, &b).unwrap(), days_between(&b, &a).unwrap());
    }

    #[test]
    fn duration_helpers_error_on_unparseable_input() {
        let result = months_between(&json!("garbage"), &json!("2024-01-01"));
        assert_eq!(result, Err(DateError::Unparseable("\"garbage\"".to_string())));
        assert!(days_between(&json!(null), &json!("2024-01-01")).is_err());
    }
}
