//! Column alias table

use super::record::CANONICAL_COLUMNS;
use crate::types::Record;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Known alternate source column names, case-sensitive
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Location
    m.insert("state_name", "state");
    m.insert("district_name", "district");

    // Counts
    m.insert("transactions", "transaction_count");
    m.insert("txn_count", "transaction_count");

    // Amounts
    m.insert("amount", "transaction_amount");
    m.insert("txn_amount", "transaction_amount");

    m
});

/// Canonical name for a source column (the name itself when not an alias)
pub fn canonical_name(column: &str) -> &str {
    ALIASES.get(column).copied().unwrap_or(column)
}

/// Rename alias columns and keep only canonical ones
///
/// When several source columns land on the same canonical name, the first
/// non-null value in source column order wins.
pub fn rename_columns(record: Record) -> Record {
    let mut out = Record::new();

    for (column, value) in record {
        let target = canonical_name(&column);
        if !CANONICAL_COLUMNS.contains(&target) {
            continue;
        }

        match out.get_mut(target) {
            Some(existing) if existing.is_null() && !value.is_null() => *existing = value,
            Some(_) => {}
            None => {
                out.insert(target.to_string(), value);
            }
        }
    }

    out
}

