//! Code builder utility for generating properly indented code.

use super::Indent;

/// Builder for generated source text with indentation tracking.
///
/// # Example
///
/// ```
/// use arcgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder.push_block("public static void load() {", "}", |b| {
///     b.push_line("ship = arc.Core.atlas.find(\"ship\");");
/// });
///
/// assert_eq!(
///     builder.build(),
///     "public static void load() {\n    ship = arc.Core.atlas.find(\"ship\");\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of `text` at the current indentation.
    ///
    /// Empty lines stay empty; a trailing newline does not add a blank line.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `header`, the indented body written by `f`, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_indent();
        f(self);
        self.push_dedent();
        self.push_line(close)
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write(&mut self.buffer, self.indent_level);
    }
}
