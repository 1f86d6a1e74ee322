use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// An arcgen.toml file with its parsed manifest.
pub struct ArcgenToml {
    path: PathBuf,
    manifest: Manifest,
}

impl ArcgenToml {
    /// Open and parse an arcgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

/// Content of a fresh arcgen.toml generating `class_name`.
pub fn starter_manifest(class_name: &str) -> String {
    format!(
        r#"[class]
name = "{class_name}"
output = "build/generated/arcgen"

[resources.Sprites]
kind = "sprites"
roots = ["assets/sprites"]

[resources.Sprites.args]
TargetNameRule = "Camel"
ResourceNameRule = "Kebab"

[resources.Sounds]
kind = "sounds"
roots = ["assets/sounds"]
"#
    )
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("arcgen.toml");
        fs::write(&path, starter_manifest("net.liplum.R")).unwrap();

        let file = ArcgenToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.dir(), temp.path());
        assert_eq!(file.manifest().class.name, "net.liplum.R");
        assert_eq!(file.manifest().resources.len(), 2);
    }

    #[test]
    fn test_dir_of_bare_file_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("arcgen.toml");
        fs::write(&path, starter_manifest("R")).unwrap();

        let mut file = ArcgenToml::open(&path).unwrap();
        file.path = PathBuf::from("arcgen.toml");

        assert_eq!(file.dir(), Path::new("."));
    }

    #[test]
    fn test_starter_manifest_parses() {
        let manifest = Manifest::from_str(&starter_manifest("net.liplum.R")).unwrap();
        assert_eq!(manifest.resources.len(), 2);
    }
}
