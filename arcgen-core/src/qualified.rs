//! Helpers for dot-qualified class names.

use std::path::{Path, PathBuf};

/// Split a qualified class name into its package and simple class name.
///
/// `"net.liplum.R"` becomes `("net.liplum", "R")`; a name without a dot has an
/// empty package.
pub fn package_and_class_name(qualified: &str) -> (&str, &str) {
    match qualified.rfind('.') {
        None => ("", qualified),
        Some(0) => ("", &qualified[1..]),
        Some(dot) => (&qualified[..dot], &qualified[dot + 1..]),
    }
}

/// Map a qualified class name to its source file below `base`.
///
/// `qualified_to_path("gen", "net.liplum.R", "java")` is `gen/net/liplum/R.java`.
pub fn qualified_to_path(base: &Path, qualified: &str, extension: &str) -> PathBuf {
    let (package, class) = package_and_class_name(qualified);
    let mut path = base.to_path_buf();
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{}.{}", class, extension));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_and_class_name() {
        assert_eq!(package_and_class_name("net.liplum.Clz"), ("net.liplum", "Clz"));
        assert_eq!(package_and_class_name("net.liplum"), ("net", "liplum"));
        assert_eq!(package_and_class_name("Clz"), ("", "Clz"));
        assert_eq!(package_and_class_name("a"), ("", "a"));
        assert_eq!(package_and_class_name(""), ("", ""));
        assert_eq!(package_and_class_name("."), ("", ""));
        assert_eq!(package_and_class_name(".R"), ("", "R"));
    }

    #[test]
    fn test_qualified_to_path() {
        let base = Path::new("build/generated");
        assert_eq!(
            qualified_to_path(base, "net.liplum.R", "java"),
            base.join("net").join("liplum").join("R.java")
        );
        assert_eq!(qualified_to_path(base, "R", "java"), base.join("R.java"));
    }
}
