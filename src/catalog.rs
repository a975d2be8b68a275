//! SQLite catalog access.
//!
//! Reads object definitions out of `sqlite_schema` and owns the two
//! filesystem seams around them: opening the source database and deleting
//! it once the catalog has been read.
//!
//! # Ordering
//!
//! The catalog query carries no ORDER BY, so rows come back in catalog
//! storage order and the schema template preserves that order. The order
//! is implementation-defined and not guaranteed stable across SQLite
//! versions.
//!
//! # Exclusion rule
//!
//! Internal objects are filtered by name prefix in Rust rather than in the
//! query string, so the rule is testable on bare names. Two prefixes are
//! reserved: `sqlite_` (engine bookkeeping such as `sqlite_sequence` and
//! automatic indexes) and `sqlean_` (objects installed by the bundled
//! sqlean extension).

use std::fs;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

/// Name prefix reserved by the engine for its own bookkeeping objects.
pub const ENGINE_PREFIX: &str = "sqlite_";

/// Name prefix used by the bundled sqlean extension.
pub const EXTENSION_PREFIX: &str = "sqlean_";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Failed to read schema catalog: {message}")]
    ReadFailed { message: String },

    #[error("Failed to delete source database '{path}': {message}")]
    DeleteFailed { path: String, message: String },
}

/// One retained catalog row: an object name and its stored definition.
#[derive(Debug, Clone)]
pub struct SchemaRecord {
    pub name: String,
    pub definition: String,
}

/// Result of reading the catalog: retained records in catalog order, plus
/// the number of rows dropped by the exclusion rules.
#[derive(Debug)]
pub struct CatalogSnapshot {
    pub records: Vec<SchemaRecord>,
    pub skipped: usize,
}

/// Whether an object belongs to the engine or the bundled extension
/// rather than to the application schema.
pub fn is_internal_object(name: &str) -> bool {
    name.starts_with(ENGINE_PREFIX) || name.starts_with(EXTENSION_PREFIX)
}

/// Read every user-defined object definition from the schema catalog.
///
/// Opens the database read-only and closes the connection before
/// returning, so the source file is safe to delete once this succeeds.
/// Rows naming internal objects and rows with no stored definition text
/// (automatic indexes) are skipped and counted.
///
/// Existence of `path` is not pre-validated: a missing or unreadable file
/// surfaces as [`CatalogError::OpenFailed`].
pub fn read_definitions(path: &Path) -> Result<CatalogSnapshot, CatalogError> {
    let conn =
        Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(|e| {
            CatalogError::OpenFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

    let mut records = Vec::new();
    let mut skipped = 0;
    {
        let mut stmt = conn
            .prepare("SELECT name, sql FROM sqlite_schema")
            .map_err(read_failed)?;
        let mut rows = stmt.query([]).map_err(read_failed)?;
        while let Some(row) = rows.next().map_err(read_failed)? {
            let name: String = row.get(0).map_err(read_failed)?;
            let definition: Option<String> = row.get(1).map_err(read_failed)?;
            match definition {
                Some(definition) if !is_internal_object(&name) => {
                    records.push(SchemaRecord { name, definition });
                }
                _ => skipped += 1,
            }
        }
    }

    // The connection must be closed before the source file is deleted;
    // some platforms refuse to remove a file with an open handle.
    conn.close().map_err(|(_, e)| read_failed(e))?;

    Ok(CatalogSnapshot { records, skipped })
}

fn read_failed(e: rusqlite::Error) -> CatalogError {
    CatalogError::ReadFailed {
        message: e.to_string(),
    }
}

/// Delete the source database file from disk.
///
/// Destructive and irreversible: the extractor's contract is to turn the
/// built artifact into a schema template, not to keep it. Callers must
/// only invoke this after [`read_definitions`] has returned.
pub fn consume_source_db(path: &Path) -> Result<(), CatalogError> {
    fs::remove_file(path).map_err(|e| CatalogError::DeleteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
