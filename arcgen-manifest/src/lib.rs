//! Parsing and validation of arcgen.toml manifests.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ArcgenToml, ClassConfig, DEFAULT_OUTPUT, Manifest, ParseContext, ResourceConfig,
    starter_manifest,
};
