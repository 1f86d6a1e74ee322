//! Check operation - manifest validation and asset scan.

use arcgen_manifest::ArcgenToml;
use eyre::Result;

use crate::reports::{CheckReport, ClassStats};

/// Execute the check operation.
///
/// The manifest is already valid once opened; this renders every class in
/// memory so unreadable roots and identifier collisions surface too.
pub fn check(arcgen_toml: &ArcgenToml) -> Result<CheckReport> {
    let manifest = arcgen_toml.manifest();
    let r_class = manifest.r_class(arcgen_toml.dir());

    let mut classes = Vec::with_capacity(r_class.classes.len());
    let mut errors = Vec::new();
    for class in &r_class.classes {
        match class.render() {
            Ok((_, summary)) => classes.push(ClassStats::from_summary(&class.name, &summary)),
            Err(e) => errors.push(format!("{}: {}", class.name, error_chain(&e))),
        }
    }

    Ok(CheckReport {
        config_path: arcgen_toml.path().to_path_buf(),
        class_name: r_class.qualified_name.clone(),
        output_path: r_class.output_path(&manifest.output_dir(arcgen_toml.dir())),
        classes,
        errors,
    })
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_manifest(temp: &TempDir, body: &str) -> ArcgenToml {
        let path = temp.path().join("arcgen.toml");
        fs::write(&path, body).unwrap();
        ArcgenToml::open(path).unwrap()
    }

    #[test]
    fn test_check_reports_collisions() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sounds")).unwrap();
        fs::write(temp.path().join("sounds/shot.ogg"), b"").unwrap();
        fs::write(temp.path().join("sounds/shot.wav"), b"").unwrap();
        let toml = write_manifest(
            &temp,
            r#"
[class]
name = "R"

[resources.Sounds]
kind = "sounds"
roots = ["sounds"]
"#,
        );

        let report = check(&toml).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.classes[0].leaves, 2);
        assert_eq!(report.classes[0].fields, 2);
        assert_eq!(report.classes[0].collisions[0].identifier, "shot");
    }

    #[test]
    fn test_check_reports_unreadable_root() {
        let temp = TempDir::new().unwrap();
        let toml = write_manifest(
            &temp,
            r#"
[class]
name = "R"

[resources.Sprites]
kind = "sprites"
roots = ["missing"]
"#,
        );

        let report = check(&toml).unwrap();

        assert!(!report.is_valid());
        assert!(report.errors[0].starts_with("Sprites: asset traversal failed"));
    }
}
