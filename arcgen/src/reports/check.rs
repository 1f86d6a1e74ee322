//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::{
    ClassStats,
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Qualified name of the generated class.
    pub class_name: String,
    /// Where `generate` would write.
    pub output_path: PathBuf,
    /// Classes that rendered.
    pub classes: Vec<ClassStats>,
    /// Classes that failed to render.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for class in &self.classes {
            for message in class.warnings() {
                out.warning(&message);
            }
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!(
            "  {} -> {}",
            self.class_name,
            self.output_path.display()
        ));
        for class in &self.classes {
            out.preformatted(&format!("    {}", class.line()));
        }
    }
}
