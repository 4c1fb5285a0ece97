//! Decoder implementations
//!
//! Each decoder handles a specific source format.

use super::types::RecordDecoder;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Record};
use serde_json::Value;

/// Cell texts that read as missing values
///
/// Matches the defaults dataframe readers use, so dumps exported from
/// notebooks round-trip their gaps as nulls.
const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ============================================================================
// CSV Decoder
// ============================================================================

/// Comma-separated decoder
///
/// Cells stay strings; typing is left to the normalizer. Header names are
/// trimmed, so a padded `" state_name"` still hits the alias table.
#[derive(Debug, Clone, Default)]
pub struct CsvDecoder;

impl CsvDecoder {
    /// Create a new CSV decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for CsvDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let body = body.strip_prefix('\u{feff}').unwrap_or(body);

        // Trimming headers widens the exact alias match to padded names
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(body.as_bytes());

        let headers = dedupe_headers(reader.headers()?.iter());
        let mut records = Vec::new();

        for row in reader.records() {
            let row = row?;
            // A line holding one empty field carries no data
            if row.len() == 1 && row.get(0) == Some("") && headers.len() > 1 {
                continue;
            }

            let mut obj = Record::new();
            for (i, header) in headers.iter().enumerate() {
                obj.insert(header.clone(), parse_csv_value(row.get(i)));
            }
            records.push(obj);
        }

        Ok(records)
    }
}

/// Suffix repeated header names with `.1`, `.2`, ... so no column is lost
fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for name in raw {
        let mut candidate = name.to_string();
        let mut n = 0;
        while headers.contains(&candidate) {
            n += 1;
            candidate = format!("{name}.{n}");
        }
        headers.push(candidate);
    }
    headers
}

/// Parse a CSV cell into a JSON value (string or null)
fn parse_csv_value(value: Option<&str>) -> Value {
    match value {
        Some(v) if !NULL_MARKERS.contains(&v) => Value::String(v.to_string()),
        _ => Value::Null,
    }
}

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON document decoder
///
/// Accepts an array of objects, a columns-oriented object
/// (`{"col": [..]}` or `{"col": {"0": ..}}`), or one flat object. Bodies that
/// are really JSON Lines are decoded as such.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let body = body.strip_prefix('\u{feff}').unwrap_or(body);
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => {
                // Several top-level values: maybe it is JSON Lines after all
                if body.lines().filter(|l| !l.trim().is_empty()).count() > 1 {
                    if let Ok(records) = JsonlDecoder.decode(body) {
                        return Ok(records);
                    }
                }
                return Err(Error::Decode {
                    message: format!("Failed to parse JSON: {e}"),
                });
            }
        };

        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(obj) => Ok(obj),
                    other => Err(Error::decode(format!(
                        "Expected an object at index {i}, found {}",
                        type_name(&other)
                    ))),
                })
                .collect(),
            Value::Object(obj) if is_columns_oriented(&obj) => Ok(columns_to_records(obj)),
            Value::Object(obj) => Ok(vec![obj]),
            other => Err(Error::decode(format!(
                "Expected an array or object, found {}",
                type_name(&other)
            ))),
        }
    }
}

/// True when every value is an array or an object (one entry per column)
fn is_columns_oriented(obj: &Record) -> bool {
    !obj.is_empty()
        && obj
            .values()
            .all(|v| matches!(v, Value::Array(_) | Value::Object(_)))
}

/// Pivot `{"col": [v0, v1]}` / `{"col": {"0": v0}}` into row records
fn columns_to_records(obj: Record) -> Vec<Record> {
    // Row keys in first-seen order across columns
    let mut row_keys: Vec<String> = Vec::new();
    for column in obj.values() {
        let keys: Vec<String> = match column {
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        };
        for key in keys {
            if !row_keys.contains(&key) {
                row_keys.push(key);
            }
        }
    }

    let mut rows: Vec<Record> = row_keys.iter().map(|_| Record::new()).collect();
    for (name, column) in obj {
        for (row, key) in rows.iter_mut().zip(&row_keys) {
            let cell = match &column {
                Value::Array(items) => key
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get(i))
                    .cloned(),
                Value::Object(map) => map.get(key).cloned(),
                _ => None,
            };
            row.insert(name.clone(), cell.unwrap_or(JsonValue::Null));
        }
    }
    rows
}

// ============================================================================
// JSONL Decoder
// ============================================================================

/// JSON Lines decoder (one JSON object per line)
#[derive(Debug, Clone, Default)]
pub struct JsonlDecoder;

impl JsonlDecoder {
    /// Create a new JSONL decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonlDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let body = body.strip_prefix('\u{feff}').unwrap_or(body);
        let mut records = Vec::new();

        for (line_num, line) in body.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let value: Value = serde_json::from_str(line).map_err(|e| Error::Decode {
                message: format!("Failed to parse JSONL at line {}: {e}", line_num + 1),
            })?;

            match value {
                Value::Object(obj) => records.push(obj),
                other => {
                    return Err(Error::decode(format!(
                        "Expected an object at line {}, found {}",
                        line_num + 1,
                        type_name(&other)
                    )))
                }
            }
        }

        Ok(records)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
