//! Java identifier rules for generated field and class names.

/// Java reserved words and literals that cannot be used as identifiers.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
    "_",
];

/// Check if a name is a Java reserved word.
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Check if a name is a usable Java identifier.
///
/// Returns the reason when it is not.
pub fn validate_java_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };
    if !is_identifier_start(first) {
        return Some("name must start with a letter, '_' or '$'");
    }
    if !chars.all(is_identifier_part) {
        return Some("name contains characters that are not allowed in Java identifiers");
    }
    if is_java_keyword(name) {
        return Some("name is a Java reserved word");
    }
    None
}

/// Make a converted name usable as a Java identifier.
///
/// Reserved words and names that cannot start an identifier get a leading
/// underscore; characters Java rejects are replaced by `_`.
pub fn safe_identifier(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let cleaned: String = name
        .chars()
        .map(|c| if is_identifier_part(c) { c } else { '_' })
        .collect();

    let starts_ok = cleaned.chars().next().is_some_and(is_identifier_start);
    if !starts_ok || is_java_keyword(&cleaned) {
        format!("_{}", cleaned)
    } else {
        cleaned
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("new"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("ship"));
    }

    #[test]
    fn test_validate_java_identifier() {
        assert_eq!(validate_java_identifier("Sprites"), None);
        assert_eq!(validate_java_identifier("$gen_1"), None);
        assert!(validate_java_identifier("").is_some());
        assert!(validate_java_identifier("1up").is_some());
        assert!(validate_java_identifier("my-class").is_some());
        assert_eq!(
            validate_java_identifier("static"),
            Some("name is a Java reserved word")
        );
    }

    #[test]
    fn test_safe_identifier() {
        assert_eq!(safe_identifier("ship"), "ship");
        assert_eq!(safe_identifier("class"), "_class");
        assert_eq!(safe_identifier("1up"), "_1up");
        assert_eq!(safe_identifier("heat.glow"), "heat_glow");
        assert_eq!(safe_identifier(""), "");
    }
}
