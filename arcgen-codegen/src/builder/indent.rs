//! Indentation of generated Java source.

/// Number of spaces written per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub usize);

impl Indent {
    /// Four spaces, as Mindustry mod sources are conventionally formatted.
    pub const JAVA: Self = Self(4);

    /// Append `depth` levels of indentation to `out`.
    pub fn write(&self, out: &mut String, depth: usize) {
        out.extend(std::iter::repeat_n(' ', self.0 * depth));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_depth() {
        let mut out = String::new();
        Indent::JAVA.write(&mut out, 0);
        assert_eq!(out, "");

        Indent::JAVA.write(&mut out, 2);
        assert_eq!(out, " ".repeat(8));

        let mut out = String::new();
        Indent(2).write(&mut out, 3);
        assert_eq!(out, " ".repeat(6));
    }
}
