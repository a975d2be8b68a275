//! End-to-end extraction tests: seed a real database, extract its schema
//! template, and re-apply the template to verify the idempotence property
//! the IF NOT EXISTS guards are there to provide.

use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use schema_extract::commands::{Execute, ExtractCmd};

const SEED_SCHEMA: &str = "CREATE TABLE \"notes\" (id INTEGER PRIMARY KEY, body TEXT);\
    CREATE UNIQUE INDEX \"notes_id\" ON \"notes\" (id);\
    CREATE VIEW \"note_bodies\" AS SELECT body FROM \"notes\";\
    CREATE TRIGGER \"touch\" AFTER UPDATE ON \"notes\" BEGIN SELECT 1; END;";

fn seed_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("seed.db");
    let conn = Connection::open(&path).expect("Failed to create db");
    conn.execute_batch(SEED_SCHEMA).expect("Failed to seed schema");
    conn.close().expect("Failed to close db");
    path
}

fn object_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_schema WHERE name NOT LIKE 'sqlite_%' ORDER BY name")
        .expect("Prepare should succeed");
    let names = stmt
        .query_map([], |row| row.get(0))
        .expect("Query should succeed")
        .collect::<Result<Vec<String>, _>>()
        .expect("Rows should decode");
    names
}

#[test]
fn extracted_template_applies_to_fresh_and_seeded_databases() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = seed_db(&dir);
    let output = dir.path().join("db_schema.sql");

    let result = ExtractCmd {
        db_path: db_path.clone(),
        output: output.clone(),
    }
    .execute()
    .expect("Extract should succeed");

    assert_eq!(result.statements_written, 4);
    assert_eq!(result.rewritten, 4);
    assert!(!db_path.exists());

    let template = fs::read_to_string(&output).expect("Template should exist");

    // Apply twice against the same database: the first run creates every
    // object, the second is a no-op thanks to the IF NOT EXISTS guards.
    let conn = Connection::open_in_memory().expect("Failed to open db");
    conn.execute_batch(&template)
        .expect("First apply should succeed");
    conn.execute_batch(&template)
        .expect("Second apply should succeed");

    assert_eq!(
        object_names(&conn),
        vec!["note_bodies", "notes", "notes_id", "touch"]
    );
}

#[test]
fn template_applies_to_partially_initialized_database() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = seed_db(&dir);
    let output = dir.path().join("db_schema.sql");

    ExtractCmd {
        db_path,
        output: output.clone(),
    }
    .execute()
    .expect("Extract should succeed");

    let template = fs::read_to_string(&output).expect("Template should exist");

    // A database that already holds the first object must accept the
    // whole template without error.
    let conn = Connection::open_in_memory().expect("Failed to open db");
    conn.execute_batch("CREATE TABLE \"notes\" (id INTEGER PRIMARY KEY, body TEXT);")
        .expect("Partial seed should succeed");
    conn.execute_batch(&template)
        .expect("Apply over partial schema should succeed");

    assert_eq!(
        object_names(&conn),
        vec!["note_bodies", "notes", "notes_id", "touch"]
    );
}
