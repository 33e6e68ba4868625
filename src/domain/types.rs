//! Strongly-typed value objects and lenient wire helpers used by domain entities.
//!
//! The remote API is loosely typed: date fields may be missing, empty or in one
//! of several textual formats. Everything here turns that input into values the
//! listing engine can trust, degrading to `None` instead of failing a whole
//! payload.
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Base address of the remote REST API, without a trailing slash.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Validates the url and strips trailing slashes.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !trimmed.validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Joins a collection path (e.g. `events`) onto the base url.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ApiBaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApiBaseUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ApiBaseUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a date or date-time string as sent by the API.
///
/// Offsets are converted to UTC. A bare date is read as midnight. Returns `None`
/// for anything else.
pub fn parse_api_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Serde helper for optional date fields that must never fail deserialization.
///
/// Use with `#[serde(default, deserialize_with = "lenient_datetime")]`.
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match &raw {
        Some(serde_json::Value::String(text)) => parse_api_datetime(text),
        _ => None,
    };
    if parsed.is_none()
        && let Some(value) = raw.filter(|v| !v.is_null())
    {
        log::debug!("Ignoring unparseable date value: {value}");
    }
    Ok(parsed)
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Null => None,
        other => {
            log::debug!("Ignoring non-text value: {other}");
            None
        }
    }
}

/// Serde helper for optional text fields. Numbers and booleans are kept as
/// their textual form; `null`, arrays and objects become `None`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(value_to_text))
}

/// Like [`lenient_text`] for required text such as names; anything unusable
/// becomes an empty string.
pub fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Serde helper for amounts sent either as JSON numbers or numeric strings.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match &raw {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    if parsed.is_none()
        && let Some(value) = raw.filter(|v| !v.is_null())
    {
        log::debug!("Ignoring unparseable amount: {value}");
    }
    Ok(parsed.filter(|amount| amount.is_finite()))
}

fn value_to_id(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        serde_json::Value::Object(map) => map.get("id").and_then(value_to_id),
        _ => None,
    }
}

/// Serde helper for optional foreign keys sent as numbers or numeric strings.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_to_id))
}

/// Serde helper for lists of related records, given either as ids or as
/// objects carrying an `id`. Entries without a usable id are skipped; a value
/// that is not an array at all becomes `None`.
pub fn lenient_ids<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(values)) => {
            Some(values.iter().filter_map(value_to_id).collect())
        }
        Some(serde_json::Value::Null) | None => None,
        Some(other) => {
            log::debug!("Ignoring non-list value: {other}");
            None
        }
    })
}
