//! Canonical transaction record

use crate::types::{JsonValue, Record};
use chrono::NaiveDate;

/// Output columns, in output order
pub const CANONICAL_COLUMNS: [&str; 6] = [
    "state",
    "district",
    "date",
    "transaction_count",
    "transaction_amount",
    "category",
];

/// One normalized transaction row
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub state: String,
    pub district: String,
    pub date: Option<NaiveDate>,
    pub transaction_count: u64,
    pub transaction_amount: f64,
    pub category: String,
}

impl TransactionRecord {
    /// Convert back into a raw record carrying all six columns
    ///
    /// Normalizing the result yields an equal `TransactionRecord`.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("state".into(), JsonValue::String(self.state.clone()));
        record.insert("district".into(), JsonValue::String(self.district.clone()));
        record.insert(
            "date".into(),
            self.date
                .map_or(JsonValue::Null, |d| JsonValue::String(d.to_string())),
        );
        record.insert(
            "transaction_count".into(),
            JsonValue::from(self.transaction_count),
        );
        record.insert(
            "transaction_amount".into(),
            serde_json::Number::from_f64(self.transaction_amount)
                .map_or(JsonValue::Null, JsonValue::Number),
        );
        record.insert(
            "category".into(),
            JsonValue::String(self.category.clone()),
        );
        record
    }

    /// Render the row as CSV fields, in [`CANONICAL_COLUMNS`] order
    pub fn to_csv_fields(&self) -> [String; 6] {
        [
            self.state.clone(),
            self.district.clone(),
            self.date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            self.transaction_count.to_string(),
            format_amount(self.transaction_amount),
            self.category.clone(),
        ]
    }
}

/// Shortest round-trip text for an amount, always with a decimal point
fn format_amount(amount: f64) -> String {
    let text = amount.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
