//! Assembly of resource classes into a single generated `R` class.

use std::path::{Path, PathBuf};

use arcgen_core::{File, package_and_class_name, qualified_to_path};
use tracing::debug;

use crate::{
    ArgMap, ResourceKind, Result,
    builder::CodeBuilder,
    generate::{GenerateSummary, render_body},
};

/// Header written at the top of every generated file.
pub const GENERATED_HEADER: &str = "// Generated by arcgen. Do not edit.";

/// A nested `public static final class` exposing one kind of resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceClass {
    /// Simple class name, e.g. `Sprites`.
    pub name: String,
    pub kind: ResourceKind,
    /// Files or directories holding the assets.
    pub roots: Vec<PathBuf>,
    pub args: ArgMap,
}

impl ResourceClass {
    pub fn new(name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            roots: Vec::new(),
            args: ArgMap::new(),
        }
    }

    /// Add an asset root.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Set a generator argument.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Render the class, body indented one level.
    pub fn render(&self) -> Result<(String, GenerateSummary)> {
        let body = render_body(self.kind, &self.roots, &self.args)?;
        debug!(class = %self.name, kind = %self.kind, fields = body.summary.keys.len(), "rendered resource class");

        let mut out = CodeBuilder::java();
        out.push_block(
            &format!("public static final class {} {{", self.name),
            "}",
            |b| {
                b.push_text(&body.text);
            },
        );
        Ok((out.build(), body.summary))
    }
}

/// The top-level class holding every resource class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RClass {
    /// Qualified name, e.g. `net.liplum.R`.
    pub qualified_name: String,
    pub classes: Vec<ResourceClass>,
}

/// Rendered `R` class with the summary of each nested class.
#[derive(Debug, Clone)]
pub struct RenderedRClass {
    pub text: String,
    pub summaries: Vec<(String, GenerateSummary)>,
}

impl RClass {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            classes: Vec::new(),
        }
    }

    /// Append a nested resource class.
    pub fn class(mut self, class: ResourceClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Render the complete Java source file.
    ///
    /// Nothing is produced unless every nested class renders.
    pub fn render(&self) -> Result<RenderedRClass> {
        let (package, class_name) = package_and_class_name(&self.qualified_name);

        let mut nested = Vec::with_capacity(self.classes.len());
        for class in &self.classes {
            nested.push((class.name.clone(), class.render()?));
        }

        let mut out = CodeBuilder::java();
        out.push_line(GENERATED_HEADER);
        if !package.is_empty() {
            out.push_line(&format!("package {};", package));
        }
        out.push_blank();

        let mut summaries = Vec::with_capacity(nested.len());
        out.push_block(
            &format!("public final class {} {{", class_name),
            "}",
            |b| {
                for (i, (name, (text, summary))) in nested.into_iter().enumerate() {
                    if i > 0 {
                        b.push_blank();
                    }
                    b.push_text(&text);
                    summaries.push((name, summary));
                }
            },
        );

        Ok(RenderedRClass {
            text: out.build(),
            summaries,
        })
    }

    /// Where the class lives below `base`, following its package.
    pub fn output_path(&self, base: &Path) -> PathBuf {
        qualified_to_path(base, &self.qualified_name, "java")
    }

    /// Render into a [`File`] placed below `base`.
    pub fn file(&self, base: &Path) -> Result<(File, Vec<(String, GenerateSummary)>)> {
        let rendered = self.render()?;
        Ok((
            File::new(self.output_path(base), rendered.text),
            rendered.summaries,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_class_renders_empty_shell() {
        let (text, summary) = ResourceClass::new("Music", ResourceKind::None)
            .root("does/not/matter")
            .render()
            .unwrap();

        assert_eq!(text, "public static final class Music {\n}\n");
        assert!(summary.keys.is_empty());
    }

    #[test]
    fn test_empty_r_class() {
        let rendered = RClass::new("net.liplum.R").render().unwrap();
        assert_eq!(
            rendered.text,
            "// Generated by arcgen. Do not edit.\npackage net.liplum;\n\npublic final class R {\n}\n"
        );
    }

    #[test]
    fn test_default_package_omits_package_line() {
        let rendered = RClass::new("R").render().unwrap();
        assert!(!rendered.text.contains("package"));
        assert!(rendered.text.contains("public final class R {"));
    }

    #[test]
    fn test_output_path() {
        let class = RClass::new("net.liplum.R");
        assert_eq!(
            class.output_path(Path::new("gen")),
            Path::new("gen").join("net").join("liplum").join("R.java")
        );
    }
}
