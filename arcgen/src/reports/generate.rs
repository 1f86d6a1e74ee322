//! Generate command report data structures.

use std::path::PathBuf;

use arcgen_core::WriteResult;

use super::{
    ClassStats,
    output::{Output, Report},
};

/// Report data from generating the resource class.
#[derive(Debug)]
pub struct GenerateReport {
    /// Qualified class name.
    pub class_name: String,
    /// Target source file.
    pub path: PathBuf,
    /// Per nested class statistics.
    pub classes: Vec<ClassStats>,
    pub output: GeneratedOutput,
}

/// What happened to the generated source.
#[derive(Debug)]
pub enum GeneratedOutput {
    /// The file was written, or found identical.
    Written { result: WriteResult },
    /// Dry run: the source that would be written.
    Preview { content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for class in &self.classes {
            for message in class.warnings() {
                out.warning(&message);
            }
        }

        match &self.output {
            GeneratedOutput::Preview { content } => {
                out.divider(&self.path.display().to_string());
                out.preformatted(content.trim_end());
                out.divider("Summary");
            }
            GeneratedOutput::Written { .. } => {
                out.preformatted(&self.class_name);
                out.newline();
            }
        }

        out.section(&format!("Classes ({})", self.classes.len()));
        for class in &self.classes {
            out.list_item(&class.line());
        }
        out.newline();

        let status = match &self.output {
            GeneratedOutput::Preview { .. } => "Would generate",
            GeneratedOutput::Written {
                result: WriteResult::Unchanged,
            } => "Up to date",
            GeneratedOutput::Written { .. } => "Generated",
        };
        out.key_value(status, &self.path.display().to_string());
    }
}
