//! Resource class generation for arcgen.
//!
//! Walks asset roots, collapses files into distinct resource keys and emits
//! Java field declarations plus a loader function for each resource kind.
//!
//! # Module Organization
//!
//! - [`args`] - Generator arguments and their defaults
//! - [`builder`] - Indented text building
//! - [`templates`] - Per-kind Java text templates
//! - [`walker`] - Asset root traversal
//!
//! # Example
//!
//! ```no_run
//! use arcgen_codegen::{ArgMap, ResourceKind, generate_class};
//!
//! let mut args = ArgMap::new();
//! args.insert("ModName".to_string(), "core".to_string());
//!
//! let mut out = Vec::new();
//! let summary = generate_class(ResourceKind::Sprites, &["assets/sprites"], &args, &mut out)?;
//! println!("{} fields", summary.keys.len());
//! # Ok::<(), arcgen_codegen::Error>(())
//! ```

pub mod args;
pub mod builder;
mod class;
mod error;
mod generate;
mod kind;
pub mod templates;
pub mod walker;

pub use args::{ArgMap, ClassRef, GeneratorArgs};
pub use class::{GENERATED_HEADER, RClass, RenderedRClass, ResourceClass};
pub use error::{Error, Result};
pub use generate::{Collision, GenerateSummary, RenderedBody, distinct_keys, generate_class, render_body};
pub use kind::ResourceKind;
pub use walker::{AssetFile, collect_leaves};
