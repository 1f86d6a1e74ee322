//! Naming rules for converting identifiers between case conventions.
//!
//! A [`NameRule`] knows how to split an identifier into lowercase word tokens
//! and how to join tokens back into an identifier. Conversions between
//! conventions split under one rule and join under another:
//!
//! ```
//! use arcgen_core::NameRule;
//!
//! let tokens = NameRule::Kebab.split("my-sprite-name");
//! assert_eq!(NameRule::Camel.join(&tokens), "mySpriteName");
//! assert_eq!(NameRule::convert("my-sprite-name", NameRule::Kebab, NameRule::AllCaps), "MY_SPRITE_NAME");
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A case/delimiter convention for identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRule {
    /// `PascalCase`
    Pascal,
    /// `camelCase`
    Camel,
    /// `snake_case`
    Snake,
    /// `ALL_CAPS`
    AllCaps,
    /// `kebab-case`
    Kebab,
    /// `dot.separated`
    Domain,
}

/// Returned when a configuration value does not name a known [`NameRule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming rule '{0}', expected one of: Pascal, Camel, Snake, AllCaps, Kebab, Domain")]
pub struct UnknownNameRule(pub String);

impl NameRule {
    /// Every rule, in declaration order.
    pub const ALL: [NameRule; 6] = [
        NameRule::Pascal,
        NameRule::Camel,
        NameRule::Snake,
        NameRule::AllCaps,
        NameRule::Kebab,
        NameRule::Domain,
    ];

    /// Returns the rule name as it appears in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameRule::Pascal => "Pascal",
            NameRule::Camel => "Camel",
            NameRule::Snake => "Snake",
            NameRule::AllCaps => "AllCaps",
            NameRule::Kebab => "Kebab",
            NameRule::Domain => "Domain",
        }
    }

    /// Split an identifier into lowercase word tokens.
    pub fn split(&self, raw: &str) -> Vec<String> {
        match self {
            NameRule::Pascal | NameRule::Camel => split_humps(raw),
            NameRule::Snake | NameRule::AllCaps => split_on(raw, '_'),
            NameRule::Kebab => split_on(raw, '-'),
            NameRule::Domain => split_on(raw, '.'),
        }
    }

    /// Join word tokens into an identifier following this rule.
    pub fn join<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let tokens = tokens.iter().map(AsRef::as_ref);
        match self {
            NameRule::Pascal => tokens.map(capitalize).collect(),
            NameRule::Camel => tokens
                .enumerate()
                .map(|(i, token)| {
                    if i == 0 {
                        token.to_lowercase()
                    } else {
                        capitalize(token)
                    }
                })
                .collect(),
            NameRule::Snake => join_with(tokens.map(str::to_lowercase), "_"),
            NameRule::AllCaps => join_with(tokens.map(str::to_uppercase), "_"),
            NameRule::Kebab => join_with(tokens.map(str::to_lowercase), "-"),
            NameRule::Domain => join_with(tokens.map(str::to_lowercase), "."),
        }
    }

    /// Split `raw` under `from` and join the tokens under `to`.
    pub fn convert(raw: &str, from: NameRule, to: NameRule) -> String {
        to.join(&from.split(raw))
    }
}

/// Uppercase letters open a new token, `-` and `_` close the current one.
fn split_humps(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in raw.chars() {
        if c == '-' || c == '_' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
        } else {
            current.extend(c.to_lowercase());
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn split_on(raw: &str, delimiter: char) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(delimiter).map(str::to_lowercase).collect()
}

fn join_with(tokens: impl Iterator<Item = String>, separator: &str) -> String {
    tokens.collect::<Vec<_>>().join(separator)
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NameRule {
    type Err = UnknownNameRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "pascal" => Ok(NameRule::Pascal),
            "camel" => Ok(NameRule::Camel),
            "snake" => Ok(NameRule::Snake),
            "allcaps" => Ok(NameRule::AllCaps),
            "kebab" => Ok(NameRule::Kebab),
            "domain" | "dot" => Ok(NameRule::Domain),
            _ => Err(UnknownNameRule(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        vec!["my".to_string(), "sprite".to_string(), "name".to_string()]
    }

    #[test]
    fn test_split_kebab() {
        assert_eq!(NameRule::Kebab.split("my-sprite-name"), words());
        assert_eq!(NameRule::Kebab.split("Big-Ship"), vec!["big", "ship"]);
        assert_eq!(NameRule::Kebab.split("a--b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_delimited() {
        assert_eq!(NameRule::Snake.split("my_sprite_name"), words());
        assert_eq!(NameRule::AllCaps.split("MY_SPRITE_NAME"), words());
        assert_eq!(NameRule::Domain.split("my.sprite.name"), words());
    }

    #[test]
    fn test_split_humps() {
        assert_eq!(NameRule::Pascal.split("MySpriteName"), words());
        assert_eq!(NameRule::Camel.split("mySpriteName"), words());
        assert_eq!(NameRule::Pascal.split("My-Sprite_Name"), words());
        assert_eq!(NameRule::Camel.split("a"), vec!["a"]);
        assert_eq!(NameRule::Camel.split("X"), vec!["x"]);
        assert_eq!(NameRule::Pascal.split("HTTP"), vec!["h", "t", "t", "p"]);
        assert_eq!(NameRule::Camel.split("sprite2x"), vec!["sprite2x"]);
    }

    #[test]
    fn test_join_every_rule() {
        let tokens = words();
        assert_eq!(NameRule::Camel.join(&tokens), "mySpriteName");
        assert_eq!(NameRule::Pascal.join(&tokens), "MySpriteName");
        assert_eq!(NameRule::Snake.join(&tokens), "my_sprite_name");
        assert_eq!(NameRule::AllCaps.join(&tokens), "MY_SPRITE_NAME");
        assert_eq!(NameRule::Kebab.join(&tokens), "my-sprite-name");
        assert_eq!(NameRule::Domain.join(&tokens), "my.sprite.name");
    }

    #[test]
    fn test_join_single_token() {
        assert_eq!(NameRule::Camel.join(&["ship"]), "ship");
        assert_eq!(NameRule::Pascal.join(&["ship"]), "Ship");
        assert_eq!(NameRule::AllCaps.join(&["ship"]), "SHIP");
    }

    #[test]
    fn test_empty_input() {
        for rule in NameRule::ALL {
            assert!(rule.split("").is_empty(), "{rule} split");
            assert_eq!(rule.join::<&str>(&[]), "", "{rule} join");
        }
    }

    #[test]
    fn test_same_rule_normalization_is_idempotent() {
        let samples = [
            "my-sprite-name",
            "MySpriteName",
            "mySpriteName",
            "MY_SPRITE_NAME",
            "my_sprite_name",
            "my.sprite.name",
            "a--b",
            "_leading",
            "trailing-",
            "HTTPServer",
            "x",
            "",
        ];
        for rule in NameRule::ALL {
            for sample in samples {
                let once = rule.join(&rule.split(sample));
                let twice = rule.join(&rule.split(&once));
                assert_eq!(once, twice, "{rule} on {sample:?}");
            }
        }
    }

    #[test]
    fn test_convert() {
        assert_eq!(
            NameRule::convert("turret-base-heat", NameRule::Kebab, NameRule::Camel),
            "turretBaseHeat"
        );
        assert_eq!(
            NameRule::convert("TurretBase", NameRule::Pascal, NameRule::Kebab),
            "turret-base"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Camel".parse::<NameRule>().unwrap(), NameRule::Camel);
        assert_eq!("pascal".parse::<NameRule>().unwrap(), NameRule::Pascal);
        assert_eq!("ALL_CAPS".parse::<NameRule>().unwrap(), NameRule::AllCaps);
        assert_eq!("AllCaps".parse::<NameRule>().unwrap(), NameRule::AllCaps);
        assert_eq!("kebab".parse::<NameRule>().unwrap(), NameRule::Kebab);
        assert_eq!("Dot".parse::<NameRule>().unwrap(), NameRule::Domain);
        assert_eq!("Domain".parse::<NameRule>().unwrap(), NameRule::Domain);

        let err = "Hungarian".parse::<NameRule>().unwrap_err();
        assert_eq!(err, UnknownNameRule("Hungarian".to_string()));
        assert!(err.to_string().contains("unknown naming rule 'Hungarian'"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for rule in NameRule::ALL {
            assert_eq!(rule.to_string().parse::<NameRule>().unwrap(), rule);
        }
    }
}
