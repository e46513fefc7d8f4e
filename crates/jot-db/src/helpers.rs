//! Row-to-entity parsing helpers.
//!
//! `libsql::Row` is column-indexed and loosely typed. These helpers isolate
//! the conversions and accept both timestamp formats found in the table
//! (`SQLite`'s `datetime('now')` and RFC 3339).

use chrono::{DateTime, Utc};
use jot_core::entities::Subtask;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all jot-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse a nullable enum column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string matches no variant.
pub fn parse_optional_enum<T: serde::de::DeserializeOwned>(
    s: Option<&str>,
) -> Result<Option<T>, DatabaseError> {
    s.map(parse_enum::<T>).transpose()
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable INTEGER column into an unsigned type.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for negative or out-of-range values.
pub fn get_opt_unsigned<T: TryFrom<i64>>(
    row: &libsql::Row,
    idx: i32,
) -> Result<Option<T>, DatabaseError> {
    row.get::<Option<i64>>(idx)?
        .map(|n| {
            T::try_from(n)
                .map_err(|_| DatabaseError::Query(format!("Integer {n} out of range in column {idx}")))
        })
        .transpose()
}

/// Decode the `subtasks` JSON column. NULL and empty mean no subtasks.
///
/// # Errors
///
/// Returns `DatabaseError::MalformedRow` if the column holds anything other
/// than a JSON array of subtasks.
pub fn parse_subtasks(item_id: &str, s: Option<&str>) -> Result<Vec<Subtask>, DatabaseError> {
    match s {
        Some(s) if !s.trim().is_empty() => {
            serde_json::from_str(s).map_err(|e| DatabaseError::MalformedRow {
                id: item_id.to_string(),
                reason: format!("invalid subtasks JSON: {e}"),
            })
        }
        _ => Ok(Vec::new()),
    }
}

/// Encode subtasks for storage. An empty list is stored as NULL.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn encode_subtasks(subtasks: &[Subtask]) -> Result<Option<String>, DatabaseError> {
    if subtasks.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(subtasks)
        .map(Some)
        .map_err(|e| DatabaseError::Other(e.into()))
}

/// Wrap an optional value for positional params.
pub fn opt_value<T: Into<libsql::Value>>(v: Option<T>) -> libsql::Value {
    v.map_or(libsql::Value::Null, Into::into)
}
