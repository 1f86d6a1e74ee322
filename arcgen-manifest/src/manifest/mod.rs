//! Manifest types and parsing for arcgen.toml files.

mod file;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

use arcgen_codegen::{ArgMap, RClass, ResourceClass, ResourceKind};
pub use file::{ArcgenToml, starter_manifest};
use indexmap::IndexMap;
use serde::Deserialize;
pub use validate::ParseContext;

/// Default output directory, relative to the manifest.
pub const DEFAULT_OUTPUT: &str = "build/generated/arcgen";

/// Root manifest for arcgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// The generated top-level class
    pub class: ClassConfig,

    /// Nested resource classes, in declaration order
    #[serde(default)]
    pub resources: IndexMap<String, ResourceConfig>,
}

/// `[class]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    /// Qualified class name, e.g. `net.liplum.R`
    pub name: String,

    /// Directory the class is written below
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// `[resources.<Name>]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    pub kind: ResourceKind,

    /// Asset files or directories
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Generator arguments (`ModName`, `TargetNameRule`, `Class[...]`, ...)
    #[serde(default)]
    pub args: ArgMap,
}

impl Manifest {
    /// Join a relative path onto the manifest directory.
    pub fn resolve_path(manifest_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            manifest_dir.join(path)
        }
    }

    /// The output directory, resolved against the manifest directory.
    pub fn output_dir(&self, manifest_dir: &Path) -> PathBuf {
        Self::resolve_path(manifest_dir, &self.class.output)
    }

    /// Build the class to generate, with roots resolved against `manifest_dir`.
    pub fn r_class(&self, manifest_dir: &Path) -> RClass {
        self.resources
            .iter()
            .fold(RClass::new(&self.class.name), |class, (name, config)| {
                let mut resource = ResourceClass::new(name, config.kind);
                resource.roots = config
                    .roots
                    .iter()
                    .map(|root| Self::resolve_path(manifest_dir, root))
                    .collect();
                resource.args = config.args.clone();
                class.class(resource)
            })
    }
}
