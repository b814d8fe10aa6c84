//! Property-based tests for row materialization using proptest

use proptest::prelude::*;
use rust_sqlite_handle::prelude::*;

fn sql_text(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn sql_blob(bytes: &[u8]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    format!("X'{}'", hex)
}

// ============================================================================
// Round Trip Tests
// ============================================================================

proptest! {
    /// Integers come back at full width
    #[test]
    fn test_integer_round_trip(value in (i64::MIN + 1)..=i64::MAX) {
        let db = SqliteDatabase::connect(":memory:").unwrap();
        db.exec("CREATE TABLE t (v INTEGER)").unwrap();
        db.exec(&format!("INSERT INTO t VALUES ({})", value)).unwrap();

        let rows = db.query("SELECT v FROM t").unwrap();
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(&rows[0]["v"], &Cell::Integer(value));
    }

    /// Text, including quotes and non-ASCII, comes back unchanged
    #[test]
    fn test_text_round_trip(value in "[a-zA-Z0-9 '\u{e9}\u{4e2d}]{0,40}") {
        let db = SqliteDatabase::connect(":memory:").unwrap();
        db.exec("CREATE TABLE t (v TEXT)").unwrap();
        db.exec(&format!("INSERT INTO t VALUES ({})", sql_text(&value))).unwrap();

        let rows = db.query("SELECT v FROM t").unwrap();
        prop_assert_eq!(rows[0]["v"].as_text(), Some(value.as_str()));
    }

    /// Blobs keep their exact length, embedded zero bytes included
    #[test]
    fn test_blob_round_trip(value in prop::collection::vec(any::<u8>(), 1..256)) {
        let db = SqliteDatabase::connect(":memory:").unwrap();
        db.exec("CREATE TABLE t (v BLOB)").unwrap();
        db.exec(&format!("INSERT INTO t VALUES ({})", sql_blob(&value))).unwrap();

        let rows = db.query("SELECT v FROM t").unwrap();
        prop_assert_eq!(rows[0]["v"].as_blob(), Some(value.as_slice()));
    }

    /// Rows come back in insertion order with every column present
    #[test]
    fn test_rows_keep_insertion_order(
        records in prop::collection::vec((any::<i32>(), "[a-z]{1,8}"), 0..50)
    ) {
        let db = SqliteDatabase::connect(":memory:").unwrap();
        db.exec("CREATE TABLE t (n INTEGER, s TEXT)").unwrap();
        for (n, s) in &records {
            db.exec(&format!("INSERT INTO t VALUES ({}, {})", n, sql_text(s))).unwrap();
        }

        let rows = db.query("SELECT n, s FROM t").unwrap();
        prop_assert_eq!(rows.len(), records.len());
        for (row, (n, s)) in rows.iter().zip(&records) {
            prop_assert_eq!(row.len(), 2);
            prop_assert_eq!(row["n"].as_int(), Some(*n));
            prop_assert_eq!(row["s"].as_text(), Some(s.as_str()));
        }
    }
}

// ============================================================================
// Row Set Replacement Tests
// ============================================================================

proptest! {
    /// A capture call never appends to what was already in the row set
    #[test]
    fn test_capture_replaces_contents(first in 0usize..20, second in 0usize..20) {
        let db = SqliteDatabase::connect(":memory:").unwrap();
        db.exec("CREATE TABLE t (v INTEGER)").unwrap();
        for i in 0..first.max(second) {
            db.exec(&format!("INSERT INTO t VALUES ({})", i)).unwrap();
        }

        let mut rows = RowSet::new();
        db.exec_into(&format!("SELECT v FROM t LIMIT {}", first), &mut rows).unwrap();
        prop_assert_eq!(rows.len(), first);

        db.exec_into(&format!("SELECT v FROM t LIMIT {}", second), &mut rows).unwrap();
        prop_assert_eq!(rows.len(), second);
    }
}

// ============================================================================
// Safety Tests (No Panics)
// ============================================================================

proptest! {
    /// Arbitrary statement text yields Ok or an error, never a panic
    #[test]
    fn test_arbitrary_sql_no_panic(sql in "[ -~]{0,64}") {
        let db = SqliteDatabase::connect(":memory:").unwrap();
        let _ = db.query(&sql);
        let _ = db.exec(&sql);
        prop_assert!(db.is_open());
    }

    /// Cell accessors are total
    #[test]
    fn test_accessors_no_panic(value in prop_oneof![
        any::<i64>().prop_map(Cell::from),
        any::<f64>().prop_filter("finite", |v| v.is_finite()).prop_map(Cell::from),
        ".*".prop_map(Cell::from),
        prop::collection::vec(any::<u8>(), 0..100).prop_map(Cell::from),
        Just(Cell::Null),
    ]) {
        let _ = value.as_integer();
        let _ = value.as_int();
        let _ = value.as_float();
        let _ = value.as_text();
        let _ = value.as_blob();
        let _ = value.type_name();
        let _ = value.to_string();
        prop_assert!(serde_json::to_string(&value).is_ok());
    }
}
