//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use arcgen_codegen::{
    ResourceKind,
    args::{RESOURCE_NAME_RULE, TARGET_NAME_RULE},
};
use arcgen_core::{NameRule, validate_java_identifier};
use miette::SourceSpan;

use super::ResourceConfig;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested sections.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "arcgen.toml");
/// ctx.validate_name("Sprites", "resource class")?;
///
/// let nested = ctx.push("Sprites");
/// nested.validate_resource("Sprites", &config)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["resources", "Sprites"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    fn src(&self) -> &str {
        self.source.src()
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "argument in 'Sprites'" or just "resource class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a name is a usable Java identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_java_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                find_name_span(self.src(), name),
            ));
        }
        Ok(())
    }

    /// Validate every segment of a dot-qualified class name.
    pub fn validate_qualified_name(&self, qualified: &str) -> Result<()> {
        let value_span = find_value_span(self.src(), qualified);

        let mut offset = 0;
        for segment in qualified.split('.') {
            if let Some(reason) = validate_java_identifier(segment) {
                let span = value_span
                    .map(|span| SourceSpan::from((span.offset() + offset, segment.len())));
                return Err(self.source.invalid_identifier_error(
                    segment,
                    self.context_for("class"),
                    reason,
                    span,
                ));
            }
            offset += segment.len() + 1;
        }
        Ok(())
    }

    /// Validate one `[resources.<name>]` section.
    pub fn validate_resource(&self, name: &str, resource: &ResourceConfig) -> Result<()> {
        if resource.kind != ResourceKind::None && resource.roots.is_empty() {
            return Err(self.source.validation_error(
                format!("resource class '{}' has no roots", name),
                find_name_span(self.src(), name),
            ));
        }

        for key in [TARGET_NAME_RULE, RESOURCE_NAME_RULE] {
            let Some(value) = resource.args.get(key) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            if value.parse::<NameRule>().is_err() {
                return Err(self.source.unknown_name_rule_error(
                    key,
                    value,
                    find_value_span(self.src(), value),
                ));
            }
        }
        Ok(())
    }
}

/// Find the span of a table name in the TOML source.
///
/// Searches for `[resources.name]`, `[resources.name.args]` and inline
/// `{ name = ... }` forms.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns_skip_1 = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &patterns_skip_1 {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    let inline_patterns = [
        (format!("{{ {} ", name), 2usize),
        (format!("{{ {}=", name), 2usize),
        (format!("{{{}=", name), 1usize),
    ];

    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of a quoted string value in the TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_span_table_header() {
        let src = "[resources.Sprites]\nkind = \"sprites\"";
        let span = find_name_span(src, "Sprites").unwrap();
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("[class]", "Sprites").is_none());
    }

    #[test]
    fn test_find_value_span() {
        let src = "name = 'net.R'";
        let span = find_value_span(src, "net.R").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "net.R");
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "arcgen.toml");
        assert_eq!(ctx.context_for("resource class"), "resource class");
        assert_eq!(ctx.push("Sprites").context_for("arg"), "arg in 'Sprites'");
    }

    #[test]
    fn test_validate_qualified_name_points_at_segment() {
        let src = "[class]\nname = \"net.1up.R\"\n";
        let ctx = ParseContext::new(src, "arcgen.toml");

        let err = ctx.validate_qualified_name("net.1up.R").unwrap_err();

        match *err {
            crate::Error::InvalidIdentifier { name, span, .. } => {
                assert_eq!(name, "1up");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "1up");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_qualified_name_accepts_default_package() {
        let ctx = ParseContext::new("", "arcgen.toml");
        assert!(ctx.validate_qualified_name("R").is_ok());
    }
}
