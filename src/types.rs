//! Common types used throughout txn-prep
//!
//! Records travel through the pipeline as JSON objects so that CSV cells,
//! JSON documents and JSON Lines rows share one representation.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One raw source row: column name to value, in source column order
pub type Record = serde_json::Map<String, JsonValue>;

// ============================================================================
// Raw Table
// ============================================================================

/// Concatenation of every source file's rows
///
/// `columns` is the union of all column names in first-seen order. Every
/// record carries every union column; values a source file did not have are
/// `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Union column list
    pub columns: Vec<String>,
    /// Rows in file order, then row order
    pub records: Vec<Record>,
}

impl RawTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no rows were loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one file's rows, widening the column union
    pub fn extend(&mut self, records: Vec<Record>) {
        for record in &records {
            for key in record.keys() {
                if !self.columns.iter().any(|c| c == key) {
                    self.columns.push(key.clone());
                }
            }
        }
        self.records.extend(records);
    }

    /// Fill every record's missing union columns with `null`
    pub fn backfill_nulls(&mut self) {
        for record in &mut self.records {
            for column in &self.columns {
                if !record.contains_key(column) {
                    record.insert(column.clone(), JsonValue::Null);
                }
            }
        }
    }

    /// Consume the table, yielding its records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
