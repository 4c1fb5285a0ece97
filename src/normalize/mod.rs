//! Transaction normalizer
//!
//! Maps heterogeneous source rows onto the canonical six-column schema.
//!
//! # Overview
//!
//! Per record, in order:
//! 1. rename known alias columns and drop everything else
//! 2. backfill absent base columns with `null`
//! 3. coerce `date`, `transaction_count` and `transaction_amount`
//! 4. default `category` to `"unknown"` when the source never had it
//! 5. trim `state`, `district` and `category`
//!
//! Bad values never fail the run: each field falls back to its documented
//! default through an explicit `Option` fallback in [`normalize_record`].

mod aliases;
mod coerce;
mod record;

pub use aliases::{canonical_name, rename_columns};
pub use coerce::{parse_amount, parse_count, parse_date, stringify};
pub use record::{TransactionRecord, CANONICAL_COLUMNS};

use crate::types::{JsonValue, Record};

/// Category used when the source never carried a `category` column
pub const DEFAULT_CATEGORY: &str = "unknown";

/// Count used when `transaction_count` is missing or unparseable
pub const DEFAULT_COUNT: u64 = 0;

/// Amount used when `transaction_amount` is missing or unparseable
pub const DEFAULT_AMOUNT: f64 = 0.0;

/// Base columns created as `null` when absent after renaming
const BASE_COLUMNS: [&str; 5] = [
    "state",
    "district",
    "date",
    "transaction_count",
    "transaction_amount",
];

/// Normalize a sequence of raw records
///
/// Pure and deterministic: the output has the same length and order as the
/// input.
pub fn normalize_transactions(records: Vec<Record>) -> Vec<TransactionRecord> {
    records.into_iter().map(normalize_record).collect()
}

/// Normalize one raw record into the canonical shape
pub fn normalize_record(record: Record) -> TransactionRecord {
    // Checked on the source record, before any renaming
    let had_category = record.contains_key("category");

    let mut row = rename_columns(record);
    for column in BASE_COLUMNS {
        row.entry(column).or_insert(JsonValue::Null);
    }

    let date = parse_date(&row["date"]);
    let transaction_count = parse_count(&row["transaction_count"]).unwrap_or(DEFAULT_COUNT);
    let transaction_amount = parse_amount(&row["transaction_amount"]).unwrap_or(DEFAULT_AMOUNT);

    let category = if had_category {
        row.get("category").map(stringify).unwrap_or_default()
    } else {
        DEFAULT_CATEGORY.to_string()
    };

    TransactionRecord {
        state: stringify(&row["state"]).trim().to_string(),
        district: stringify(&row["district"]).trim().to_string(),
        date,
        transaction_count,
        transaction_amount,
        category: category.trim().to_string(),
    }
}
