//! JSON import and export of MCQ records.
//!
//! Import accepts either a single record object or an array of records:
//! ```json
//! [
//!   {
//!     "title": "Pythagorean theorem",
//!     "slug": "pythagorean-theorem",
//!     "content": "# Which sides does the theorem relate?\n\n- [x] Legs and hypotenuse"
//!   }
//! ]
//! ```

use serde_json::{Map, Value};

use crate::error::{ParseError, Result};
use crate::types::McqJsonRecord;

/// Parse an import payload into validated records.
///
/// Every entry must carry non-empty string `title` and `content` fields; one
/// invalid entry rejects the whole batch.
pub fn parse_mcq_json(raw: &str) -> Result<Vec<McqJsonRecord>> {
    let data: Value =
        serde_json::from_str(raw).map_err(|e| ParseError::MalformedInput(e.to_string()))?;

    let entries = match data {
        Value::Array(items) => items,
        other => vec![other],
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| record_from_value(index, entry))
        .collect()
}

/// Serialize records as an indented JSON array that `parse_mcq_json` accepts.
pub fn to_mcq_json(records: &[McqJsonRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| ParseError::Serialize(e.to_string()))
}

fn record_from_value(index: usize, entry: &Value) -> Result<McqJsonRecord> {
    let empty = Map::new();
    let fields = entry.as_object().unwrap_or(&empty);

    let title = required_str(fields, "title").ok_or(ParseError::MissingField {
        index,
        field: "title",
    })?;
    let content = required_str(fields, "content").ok_or(ParseError::MissingField {
        index,
        field: "content",
    })?;

    Ok(McqJsonRecord {
        id: optional_str(fields, "id"),
        title,
        slug: optional_str(fields, "slug"),
        content,
    })
}

fn required_str(fields: &Map<String, Value>, key: &str) -> Option<String> {
    optional_str(fields, key).filter(|s| !s.is_empty())
}

fn optional_str(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}
