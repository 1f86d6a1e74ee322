use std::path::{Path, PathBuf};

use eyre::{Context, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content and was left untouched
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (starter manifests)
    IfMissing,
}

impl File {
    /// Create a new file with the given path and content (always overwritten)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Only create the file when nothing exists at its path yet
    pub fn if_missing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its overwrite rule.
    ///
    /// Generated output identical to what is on disk is not rewritten, so the
    /// file's modification time only moves when its content does.
    pub fn write(&self) -> Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                if let Ok(existing) = std::fs::read_to_string(&self.path)
                    && existing == self.content
                {
                    return Ok(WriteResult::Unchanged);
                }
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}
