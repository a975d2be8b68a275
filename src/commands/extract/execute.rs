use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use super::ExtractCmd;
use crate::catalog;
use crate::commands::Execute;
use crate::rewrite;
use crate::schema_file;

/// Summary of one extraction run.
#[derive(Debug, Serialize)]
pub struct ExtractResult {
    /// Where the schema template was written
    pub output_path: PathBuf,

    /// Statements written, one per retained catalog object
    pub statements_written: usize,

    /// Statements that received an `IF NOT EXISTS` guard
    pub rewritten: usize,

    /// Names of objects whose definition was written unmodified
    pub passthrough: Vec<String>,

    /// Catalog rows skipped (internal objects and definition-less rows)
    pub objects_skipped: usize,
}

impl Execute for ExtractCmd {
    type Output = ExtractResult;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>> {
        // Read everything up front; the connection is closed by the time
        // read_definitions returns, which consume_source_db relies on.
        let snapshot = catalog::read_definitions(&self.db_path)?;
        catalog::consume_source_db(&self.db_path)?;
        log::info!(
            "consumed source database '{}': {} object(s) retained, {} skipped",
            self.db_path.display(),
            snapshot.records.len(),
            snapshot.skipped
        );

        let mut statements = Vec::with_capacity(snapshot.records.len());
        let mut passthrough = Vec::new();
        for record in &snapshot.records {
            match rewrite::make_idempotent(&record.definition) {
                Some(rewritten) => statements.push(rewritten),
                None => {
                    log::warn!(
                        "definition of '{}' has no recognized CREATE clause; writing it unchanged",
                        record.name
                    );
                    passthrough.push(record.name.clone());
                    statements.push(record.definition.clone());
                }
            }
        }

        schema_file::write_schema(&self.output, &statements)?;

        Ok(ExtractResult {
            output_path: self.output,
            statements_written: statements.len(),
            rewritten: statements.len() - passthrough.len(),
            passthrough,
            objects_skipped: snapshot.skipped,
        })
    }
}
