//! Serde helpers for the optional `dueDate` field.
//!
//! The persisted form is an ISO calendar date (`YYYY-MM-DD`). An empty
//! string, `null` or a missing field all mean "no due date". Full RFC 3339
//! timestamps are accepted and truncated to their calendar date.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer, de};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(super) fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
        None => serializer.serialize_str(""),
    }
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(value) = raw.as_deref().map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    parse_due_date(value)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid due date '{value}'")))
}

fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}
