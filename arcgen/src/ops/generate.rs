//! Generate operation - render and write the resource class.

use std::path::Path;

use arcgen_manifest::ArcgenToml;
use eyre::{Context, Result};
use tracing::info;

use crate::reports::{ClassStats, GenerateReport, GeneratedOutput};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Overrides the manifest's output directory.
    pub output_dir: Option<&'a Path>,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The class is fully rendered before anything touches the disk.
pub fn generate(arcgen_toml: &ArcgenToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let manifest = arcgen_toml.manifest();
    let output_dir = match opts.output_dir {
        Some(dir) => dir.to_path_buf(),
        None => manifest.output_dir(arcgen_toml.dir()),
    };

    let r_class = manifest.r_class(arcgen_toml.dir());
    let (file, summaries) = r_class
        .file(&output_dir)
        .wrap_err_with(|| format!("Failed to generate '{}'", r_class.qualified_name))?;

    let classes = summaries
        .iter()
        .map(|(name, summary)| ClassStats::from_summary(name, summary))
        .collect();

    let output = if opts.dry_run {
        GeneratedOutput::Preview {
            content: file.content().to_string(),
        }
    } else {
        let result = file.write()?;
        info!(path = %file.path().display(), ?result, "wrote resource class");
        GeneratedOutput::Written { result }
    };

    Ok(GenerateReport {
        class_name: r_class.qualified_name.clone(),
        path: file.path().to_path_buf(),
        classes,
        output,
    })
}
