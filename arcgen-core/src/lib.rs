//! Core utilities and types for the arcgen asset class generator.
//!
//! This crate provides the naming-rule engine and the small helpers shared
//! by the generator, the manifest parser and the command-line tool.

mod file;
mod java;
mod naming;
mod qualified;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Java identifiers
pub use java::{JAVA_KEYWORDS, is_java_keyword, safe_identifier, validate_java_identifier};
// Naming rules
pub use naming::{NameRule, UnknownNameRule};
// Qualified class names
pub use qualified::{package_and_class_name, qualified_to_path};
