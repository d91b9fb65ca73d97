//! Calendar date helpers.
//!
//! Release dates are plain calendar dates. Clients may send them as
//! `YYYY-MM-DD`, as a full RFC 3339 timestamp, or as milliseconds since the
//! Unix epoch; all three collapse to the UTC calendar day.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Calendar date used for `releaseDate`.
pub type Date = NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a textual date in either `YYYY-MM-DD` or RFC 3339 form.
#[must_use]
pub fn parse_date(text: &str) -> Option<Date> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|ts| ts.to_utc().date_naive())
        })
}

/// Interpret a JSON value as a date, accepting strings and epoch milliseconds.
#[must_use]
pub fn date_from_json(value: &serde_json::Value) -> Option<Date> {
    match value {
        serde_json::Value::String(text) => parse_date(text),
        serde_json::Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|ts| ts.date_naive()),
        _ => None,
    }
}

/// Render a date the way it is stored and returned.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `deserialize_with` helper accepting every form [`date_from_json`] does.
///
/// # Errors
///
/// Fails when the value is not a recognisable date.
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    date_from_json(&value).ok_or_else(|| serde::de::Error::custom("invalid date"))
}
