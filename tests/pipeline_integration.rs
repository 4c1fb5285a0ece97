//! Integration tests for the full preparation run
//!
//! Tests the end-to-end flow: raw CSV/JSON tree → normalized records → processed CSV

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use txn_prep::decode::{CsvDecoder, RecordDecoder};
use txn_prep::normalize::{normalize_record, CANONICAL_COLUMNS};
use txn_prep::{
    load_raw_transactions, normalize_transactions, prepare_transactions, resolve_paths,
    save_processed, Error, PrepConfig,
};

fn write(dir: &Path, rel: &str, body: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

// ============================================================================
// End-to-end Tests
// ============================================================================

#[test]
fn test_prepare_mixed_sources() {
    let raw = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("processed").join("transactions.csv");

    write(
        raw.path(),
        "aggregated/2021/1.csv",
        "state_name,district_name,date,transactions,amount,category\n\
         \x20Karnataka ,Bengaluru,2021-01-01,10,100.5,recharge\n\
         Goa,North Goa,not a date,abc,12,\n",
    );
    write(
        raw.path(),
        "aggregated/2021/2.json",
        r#"[{"state": "Kerala", "district": "Kochi", "date": "2021-02-01", "txn_count": 4.9, "txn_amount": 7}]"#,
    );

    let stats = prepare_transactions(raw.path(), &out).unwrap();
    assert_eq!(stats.records_loaded, 3);
    assert_eq!(stats.rows_written, 3);

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "state,district,date,transaction_count,transaction_amount,category\n\
         Karnataka,Bengaluru,2021-01-01,10,100.5,recharge\n\
         Goa,North Goa,,0,12.0,\n\
         Kerala,Kochi,2021-02-01,4,7.0,\n"
    );
}

#[test]
fn test_prepare_without_category_anywhere() {
    let raw = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.csv");
    write(raw.path(), "rows.jsonl", "{\"state\": \"Goa\", \"amount\": \"3.5\"}\n");

    prepare_transactions(raw.path(), &out).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().nth(1), Some("Goa,,,0,3.5,unknown"));
}

#[test]
fn test_empty_source_dir_creates_no_output() {
    let raw = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("nested").join("out.csv");

    let err = prepare_transactions(raw.path(), &out).unwrap_err();
    assert!(matches!(err, Error::NoInputFiles { .. }));
    assert!(!out.exists());
    assert!(!out.parent().unwrap().exists());
}

#[test]
fn test_unwritable_destination_is_output_error() {
    let raw = tempdir().unwrap();
    write(raw.path(), "a.csv", "state\nGoa\n");
    let out_dir = tempdir().unwrap();
    let blocker = out_dir.path().join("file");
    fs::write(&blocker, "x").unwrap();

    let err = prepare_transactions(raw.path(), &blocker.join("out.csv")).unwrap_err();
    assert!(matches!(err, Error::Output { .. }));
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_reference_record_round_trip() {
    let raw = tempdir().unwrap();
    write(
        raw.path(),
        "sample.csv",
        "state,district,date,transaction_count,transaction_amount,category\n\
         TestState,TestDistrict,2021-01-01,10,100.5,recharge\n",
    );

    let table = load_raw_transactions(raw.path()).unwrap();
    let normalized = normalize_transactions(table.into_records());
    assert_eq!(normalized[0].transaction_count, 10);
    assert_eq!(normalized[0].transaction_amount, 100.5);
    assert_eq!(normalized[0].state, "TestState");
    assert_eq!(normalized[0].district, "TestDistrict");
    assert_eq!(
        normalized[0].date.map(|d| d.to_string()).as_deref(),
        Some("2021-01-01")
    );

    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.csv");
    save_processed(&normalized, &out).unwrap();

    let reread = CsvDecoder::new()
        .decode(&fs::read_to_string(&out).unwrap())
        .unwrap();
    let keys: Vec<&str> = reread[0].keys().map(String::as_str).collect();
    assert_eq!(keys, CANONICAL_COLUMNS.to_vec());
    assert_eq!(reread[0]["transaction_count"], "10");
}

#[test]
fn test_write_reread_preserves_numbers() {
    let raw = tempdir().unwrap();
    write(
        raw.path(),
        "numbers.csv",
        "txn_count,txn_amount\n1,0.1\n2.5,1e-7\n99999999999,123456789.123\n,-0.0\n",
    );

    let table = load_raw_transactions(raw.path()).unwrap();
    let normalized = normalize_transactions(table.into_records());

    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.csv");
    save_processed(&normalized, &out).unwrap();

    let reread = CsvDecoder::new()
        .decode(&fs::read_to_string(&out).unwrap())
        .unwrap();
    let again: Vec<_> = reread.into_iter().map(normalize_record).collect();

    assert_eq!(again.len(), normalized.len());
    for (before, after) in normalized.iter().zip(&again) {
        assert_eq!(before.transaction_count, after.transaction_count);
        assert!((before.transaction_amount - after.transaction_amount).abs() < 1e-12);
    }
}

#[test]
fn test_every_output_row_has_six_fields() {
    let raw = tempdir().unwrap();
    write(raw.path(), "a.json", r#"[{}, {"foo": 1}, {"category": null}]"#);
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.csv");

    prepare_transactions(raw.path(), &out).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    for line in content.lines() {
        assert_eq!(line.split(',').count(), 6, "row: {line}");
    }
}

// ============================================================================
// Config Resolution Tests
// ============================================================================

#[test]
fn test_config_file_drives_run() {
    let work = tempdir().unwrap();
    let raw = work.path().join("raw");
    write(&raw, "a.csv", "state\nGoa\n");
    let out = work.path().join("out").join("p.csv");

    let yaml = format!(
        "raw_dir: {}\nprocessed_path: {}\n",
        raw.display(),
        out.display()
    );
    let config = PrepConfig::from_yaml(&yaml).unwrap();
    let paths = resolve_paths(Some(&config), None, None).unwrap();

    txn_prep::run_pipeline(&paths).unwrap();
    assert!(out.exists());
}

#[test]
fn test_padded_alias_header_maps_to_canonical_column() {
    let records = CsvDecoder::new()
        .decode(" state_name ,txn_count \nGoa,4\n")
        .unwrap();

    let normalized = normalize_record(records[0].clone());
    assert_eq!(normalized.state, "Goa");
    assert_eq!(normalized.transaction_count, 4);
}
