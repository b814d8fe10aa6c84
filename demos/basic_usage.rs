//! Basic handle usage example
//!
//! This example demonstrates:
//! - Opening a database file
//! - Creating a table and inserting rows
//! - Selecting rows and reading typed cells
//! - Dumping a row set as JSON
//!
//! Run with: RUST_LOG=debug cargo run --example basic_usage [path]

use rust_sqlite_handle::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "test.db".to_string());

    if let Err(e) = run(&path) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(path: &str) -> Result<()> {
    let mut db = SqliteDatabase::connect(path)?;
    println!("Using database {}...", path);

    db.exec(
        "CREATE TABLE IF NOT EXISTS test (id INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE, name \
         TEXT, value REAL);",
    )?;
    db.exec(
        "INSERT OR REPLACE INTO test VALUES (4, 'one', 4.3), (5, 'two', 2.8), (6, 'three', 5.1), \
         (12, 'three', 5.1), (13, 'four', 8.1), (14, 'six', 1.0), (15, 'seven', 0), \
         (16, 'eight', 0.1);",
    )?;

    let mut rows = RowSet::new();
    db.exec_into("SELECT * FROM test;", &mut rows)?;

    if rows.is_empty() {
        println!("result is empty!");
    } else {
        for row in &rows {
            let id = row.get("id").and_then(Cell::as_integer).unwrap_or_default();
            let name = row.get("name").and_then(Cell::as_text).unwrap_or_default();
            let value = row.get("value").and_then(Cell::as_float).unwrap_or_default();
            println!("{} - {} - {}", id, name, value);
        }
    }

    match serde_json::to_string_pretty(&rows) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Unable to render rows as JSON: {}", e),
    }

    db.close()
}
