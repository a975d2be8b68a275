//! Output formatting for extract command results.

use super::execute::ExtractResult;
use crate::output::Outputable;

impl Outputable for ExtractResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Schema template written to {}",
            self.output_path.display()
        ));
        lines.push(format!(
            "{} statement(s) written ({} guarded with IF NOT EXISTS), {} catalog row(s) skipped",
            self.statements_written, self.rewritten, self.objects_skipped
        ));

        if !self.passthrough.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "{} statement(s) passed through unmodified:",
                self.passthrough.len()
            ));
            for name in &self.passthrough {
                lines.push(format!("  {}", name));
            }
        }

        lines.join("\n")
    }
}
