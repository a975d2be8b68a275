//! Schema template file output.
//!
//! Writes the transformed statements to the destination file with
//! truncate-and-rewrite semantics: any prior content is replaced, and a
//! run that produced zero statements still leaves an empty file behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaFileError {
    #[error("Failed to write schema file '{path}': {message}")]
    WriteFailed { path: String, message: String },
}

/// Write the statement list to `path`, each statement terminated by `;`
/// and a newline, overwriting any prior content.
///
/// Parent directories are not created: the destination lives inside the
/// project tree, and a missing directory aborts the build.
pub fn write_schema(path: &Path, statements: &[String]) -> Result<(), SchemaFileError> {
    let write_failed = |e: std::io::Error| SchemaFileError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::create(path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    for statement in statements {
        writeln!(writer, "{};", statement).map_err(write_failed)?;
    }
    writer.flush().map_err(write_failed)
}
