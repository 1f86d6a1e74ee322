//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Builder for indented Java text
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
