mod execute;
mod output;

pub use execute::ExtractResult;

use clap::Args;
use std::path::PathBuf;

/// Default project-relative location of the generated schema template.
pub const DEFAULT_OUTPUT: &str = "public/db_schema.sql";

/// Convert a seeded database artifact into a portable schema template
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_extract extract build/seed.db              # Write public/db_schema.sql
  schema_extract extract temp.db -o out/schema.sql  # Custom destination

The source database file is DELETED after extraction.")]
pub struct ExtractCmd {
    /// Path to the source database file (deleted after extraction)
    pub db_path: PathBuf,

    /// Destination path for the schema template
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
