//! Record parser: one raw row in, one [`Work`] out.
//!
//! A row carries four raw values:
//! - `movie_id`: decimal work identifier
//! - `title`: display string
//! - `cast`: JSON array of `{id, name, character}` objects
//! - `crew`: JSON array of `{id, name, department, job}` objects
//!
//! Field splitting and quote unescaping happen before this point (see
//! [`crate::loader`]); the values here are already unescaped.
//!
//! Only the identifier can reject a row. The cast and crew fields degrade
//! independently: one that does not decode as a JSON array becomes an empty
//! list. Inside an object each key is read on its own, so a missing or
//! mistyped key defaults to zero or the empty string without affecting its
//! neighbours.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde_json::Value;
use tracing::debug;

/// Unescaped field values of a single data row
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub cast: &'a str,
    pub crew: &'a str,
}

/// Parse one row into a work.
///
/// Fails only when the identifier is not a non-negative integer.
pub fn parse_work(row: RawRow<'_>) -> Result<Work> {
    Ok(Work {
        id: parse_work_id(row.id)?,
        title: row.title.to_string(),
        cast: decode_cast(row.cast),
        crew: decode_crew(row.crew),
    })
}

fn parse_work_id(raw: &str) -> Result<WorkId> {
    raw.trim().parse().map_err(|_| DataLoadError::InvalidValue {
        field: "movie_id".to_string(),
        value: raw.to_string(),
    })
}

/// Decode the cast field, yielding an empty list when it isn't a JSON array.
pub fn decode_cast(text: &str) -> Vec<CastAppearance> {
    entries(text, "cast")
        .iter()
        .map(|e| CastAppearance {
            id: person_id(e.get("id")),
            name: text_field(e, "name"),
            character: text_field(e, "character"),
        })
        .collect()
}

/// Decode the crew field, yielding an empty list when it isn't a JSON array.
pub fn decode_crew(text: &str) -> Vec<CrewAppearance> {
    entries(text, "crew")
        .iter()
        .map(|e| CrewAppearance {
            id: person_id(e.get("id")),
            name: text_field(e, "name"),
            department: text_field(e, "department"),
            job: text_field(e, "job"),
        })
        .collect()
}

/// The objects of a JSON array; other elements are ignored.
fn entries(text: &str, field: &str) -> Vec<Value> {
    match serde_json::from_str::<Vec<Value>>(text) {
        Ok(values) => values.into_iter().filter(Value::is_object).collect(),
        Err(e) => {
            debug!("{} field did not decode, using empty list: {}", field, e);
            Vec::new()
        }
    }
}

// Strings as-is, numbers and booleans in their JSON form, anything else empty.
fn text_field(entry: &Value, key: &str) -> String {
    match entry.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

// Anything that isn't a non-negative integer (null, string, float) is zero.
fn person_id(value: Option<&Value>) -> PersonId {
    value.and_then(Value::as_u64).unwrap_or(0)
}
