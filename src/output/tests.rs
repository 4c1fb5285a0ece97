//! Tests for output module

use super::*;
use crate::normalize::TransactionRecord;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn sample(state: &str, count: u64, amount: f64) -> TransactionRecord {
    TransactionRecord {
        state: state.to_string(),
        district: "Central".to_string(),
        date: NaiveDate::from_ymd_opt(2021, 1, 1),
        transaction_count: count,
        transaction_amount: amount,
        category: "recharge".to_string(),
    }
}

fn leftover_temp_files(dir: &std::path::Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count()
}

// ============================================================================
// save_processed Tests
// ============================================================================

#[test]
fn test_save_processed_writes_header_and_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let records = [sample("Goa", 10, 100.5), sample("Kerala", 0, 0.0)];
    let rows = save_processed(&records, &path).unwrap();
    assert_eq!(rows, 2);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "state,district,date,transaction_count,transaction_amount,category\n\
         Goa,Central,2021-01-01,10,100.5,recharge\n\
         Kerala,Central,2021-01-01,0,0.0,recharge\n"
    );
    assert_eq!(leftover_temp_files(dir.path()), 0);
}

#[test]
fn test_save_processed_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("processed").join("2021").join("out.csv");

    save_processed(&[sample("Goa", 1, 1.0)], &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_save_processed_empty_table_has_header_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let rows = save_processed(&[], &path).unwrap();
    assert_eq!(rows, 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "state,district,date,transaction_count,transaction_amount,category\n"
    );
}

#[test]
fn test_save_processed_quotes_and_empty_date() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let record = TransactionRecord {
        state: "Delhi, NCT".to_string(),
        district: String::new(),
        date: None,
        transaction_count: 3,
        transaction_amount: 2.5,
        category: "unknown".to_string(),
    };

    save_processed(&[record], &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with("\"Delhi, NCT\",,,3,2.5,unknown\n"));
}

#[test]
fn test_save_processed_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale contents that are longer than the new file\n".repeat(50)).unwrap();

    save_processed(&[sample("Goa", 1, 1.0)], &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_save_processed_parent_is_a_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("out.csv");

    let err = save_processed(&[sample("Goa", 1, 1.0)], &path).unwrap_err();
    assert!(matches!(err, crate::error::Error::Output { .. }));
    assert!(!path.exists());
}

#[test]
fn test_save_processed_destination_is_a_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("taken");
    fs::create_dir(&path).unwrap();

    let err = save_processed(&[sample("Goa", 1, 1.0)], &path).unwrap_err();
    assert!(err.to_string().contains("Failed to create"));
    assert!(path.is_dir());
    assert_eq!(leftover_temp_files(dir.path()), 0);
}

// ============================================================================
// ProcessedWriter Tests
// ============================================================================

#[test]
fn test_writer_dropped_without_close_leaves_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    {
        let mut writer = ProcessedWriter::new(&path).unwrap();
        writer.write(&sample("Goa", 1, 1.0)).unwrap();
        assert_eq!(writer.rows_written(), 1);
    }

    assert!(!path.exists());
    assert_eq!(leftover_temp_files(dir.path()), 0);
}

#[test]
fn test_writer_close_moves_file_into_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut writer = ProcessedWriter::new(&path).unwrap();
    assert!(!path.exists());
    writer.write(&sample("Goa", 1, 1.0)).unwrap();
    writer.write(&sample("Kerala", 2, 2.0)).unwrap();
    assert_eq!(writer.close().unwrap(), 2);

    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
    assert_eq!(leftover_temp_files(dir.path()), 0);
}

#[test]
fn test_output_header_matches_canonical_columns() {
    assert_eq!(
        OUTPUT_HEADER.join(","),
        "state,district,date,transaction_count,transaction_amount,category"
    );
}
