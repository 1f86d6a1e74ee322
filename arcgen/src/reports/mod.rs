//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

use arcgen_codegen::GenerateSummary;
pub use check::CheckReport;
pub use generate::{GenerateReport, GeneratedOutput};
pub use output::{Report, TerminalOutput};
use serde::Serialize;

/// Per-class numbers shared by the generate and check reports.
#[derive(Debug, Clone, Serialize)]
pub struct ClassStats {
    /// Nested class name.
    pub name: String,
    /// Leaf files found below the roots.
    pub leaves: usize,
    /// Fields emitted.
    pub fields: usize,
    /// Field names shared by several resources.
    pub collisions: Vec<CollisionInfo>,
    /// Resource keys that yielded no field name.
    pub skipped: Vec<String>,
}

/// A field name produced by more than one resource key.
#[derive(Debug, Clone, Serialize)]
pub struct CollisionInfo {
    pub identifier: String,
    pub keys: Vec<String>,
}

impl ClassStats {
    pub fn from_summary(name: &str, summary: &GenerateSummary) -> Self {
        Self {
            name: name.to_string(),
            leaves: summary.leaf_count,
            fields: summary.keys.len(),
            collisions: summary
                .collisions
                .iter()
                .map(|c| CollisionInfo {
                    identifier: c.identifier.clone(),
                    keys: c.keys.clone(),
                })
                .collect(),
            skipped: summary.skipped.clone(),
        }
    }

    fn line(&self) -> String {
        format!(
            "{:<16} {} field{} from {} file{}",
            self.name,
            self.fields,
            plural(self.fields),
            self.leaves,
            plural(self.leaves)
        )
    }

    fn warnings(&self) -> impl Iterator<Item = String> + '_ {
        let collisions = self.collisions.iter().map(move |c| {
            format!(
                "{}.{} is generated for {}",
                self.name,
                c.identifier,
                c.keys.join(", ")
            )
        });
        let skipped = self
            .skipped
            .iter()
            .map(move |key| format!("{}: '{}' yields no field name, skipped", self.name, key));
        collisions.chain(skipped)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
