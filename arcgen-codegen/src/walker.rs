//! Recursive expansion of asset roots into leaf files.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::{Error, Result};

/// A leaf file found below an asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    path: PathBuf,
    name: String,
    stem: String,
}

impl AssetFile {
    /// Create an asset file from its path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = match name.rfind('.') {
            Some(dot) => name[..dot].to_string(),
            None => name.clone(),
        };
        Self { path, name, stem }
    }

    /// Full path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name with its extension (e.g. `ship.png`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name without its last extension (e.g. `ship`).
    pub fn stem(&self) -> &str {
        &self.stem
    }
}

/// Expand every root into the files beneath it.
///
/// Directories are walked recursively with entries sorted by file name; a
/// root that is itself a file is returned as is. Every non-directory entry is
/// a leaf, dot-files included. Symbolic links are resolved, so a linked
/// directory is walked like any other.
///
/// # Errors
///
/// Fails with [`Error::Traversal`] on the first root or entry that cannot be
/// read, including a root that does not exist, a dangling link, or a link
/// that loops back to one of its ancestors.
pub fn collect_leaves<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<AssetFile>> {
    let mut leaves = Vec::new();

    for root in roots {
        let root = root.as_ref();
        debug!(root = %root.display(), "walking asset root");

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| Error::traversal(root, source))?;
            if entry.file_type().is_dir() {
                continue;
            }
            trace!(path = %entry.path().display(), "found asset");
            leaves.push(AssetFile::new(entry.into_path()));
        }
    }

    Ok(leaves)
}
