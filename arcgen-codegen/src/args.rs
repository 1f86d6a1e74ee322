//! Generator arguments: built-in defaults merged with caller overrides.

use arcgen_core::NameRule;
use indexmap::IndexMap;
use tracing::warn;

use crate::ResourceKind;

/// Caller-supplied configuration, keyed by option name.
pub type ArgMap = IndexMap<String, String>;

/// Naming rule applied to generated field names.
pub const TARGET_NAME_RULE: &str = "TargetNameRule";
/// Naming rule used to read asset file names.
pub const RESOURCE_NAME_RULE: &str = "ResourceNameRule";
/// Prefix for sprite atlas lookups.
pub const MOD_NAME: &str = "ModName";
/// Name of the generated loader function.
pub const LOAD_FUNCTION_NAME: &str = "LoadFunctionName";

/// A qualified name referenced by generated code, overridable through a
/// `Class[<key>]` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassRef {
    /// The text between the brackets of the `Class[...]` argument.
    pub key: &'static str,
    /// Qualified name used when no override is given.
    pub default: &'static str,
}

impl ClassRef {
    /// The full argument key, e.g. `Class[arc.Core]`.
    pub fn arg_key(&self) -> String {
        format!("Class[{}]", self.key)
    }
}

pub const ARC_CORE: ClassRef = ClassRef {
    key: "arc.Core",
    default: "arc.Core",
};

pub const TEXTURE_REGION: ClassRef = ClassRef {
    key: "TextureRegion",
    default: "arc.graphics.g2d.TextureRegion",
};

pub const SOUND: ClassRef = ClassRef {
    key: "arc.audio.Sound",
    default: "arc.audio.Sound",
};

pub const ASSET_DESCRIPTOR: ClassRef = ClassRef {
    key: "arc.assets.AssetDescriptor",
    default: "arc.assets.AssetDescriptor",
};

pub const SOUND_PARAMETER: ClassRef = ClassRef {
    key: "arc.assets.loaders.SoundLoader.SoundParameter",
    default: "arc.assets.loaders.SoundLoader.SoundParameter",
};

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorArgs {
    /// Rule used to join field names.
    pub target_rule: NameRule,
    /// Rule used to split asset names.
    pub resource_rule: NameRule,
    /// Name of the emitted loader function.
    pub load_function: String,
    /// Mod name prefixed to atlas lookups, if any.
    pub mod_name: Option<String>,
    classes: Vec<(ClassRef, String)>,
}

impl GeneratorArgs {
    /// The built-in defaults for a resource kind.
    pub fn defaults(kind: ResourceKind) -> Self {
        Self {
            target_rule: NameRule::Camel,
            resource_rule: NameRule::Kebab,
            load_function: "load".to_string(),
            mod_name: None,
            classes: kind
                .class_refs()
                .iter()
                .map(|class| (*class, class.default.to_string()))
                .collect(),
        }
    }

    /// Resolve the arguments for `kind` from caller overrides.
    pub fn resolve(kind: ResourceKind, overrides: &ArgMap) -> Self {
        Self::defaults(kind).merge(overrides)
    }

    /// Apply overrides on top of these arguments.
    ///
    /// Blank values and unknown keys are ignored. A naming rule option that
    /// names no known [`NameRule`] keeps the current rule and logs a warning.
    pub fn merge(mut self, overrides: &ArgMap) -> Self {
        if let Some(rule) = parse_rule(overrides, TARGET_NAME_RULE, self.target_rule) {
            self.target_rule = rule;
        }
        if let Some(rule) = parse_rule(overrides, RESOURCE_NAME_RULE, self.resource_rule) {
            self.resource_rule = rule;
        }
        if let Some(name) = non_blank(overrides, LOAD_FUNCTION_NAME) {
            self.load_function = name.to_string();
        }
        if let Some(name) = non_blank(overrides, MOD_NAME) {
            self.mod_name = Some(name.to_string());
        }
        for (class, value) in &mut self.classes {
            if let Some(name) = non_blank(overrides, &class.arg_key()) {
                *value = name.to_string();
            }
        }
        self
    }

    /// The qualified name to emit for `class`.
    pub fn class(&self, class: ClassRef) -> &str {
        self.classes
            .iter()
            .find(|(c, _)| *c == class)
            .map_or(class.default, |(_, name)| name.as_str())
    }

    /// Atlas lookup key for a sprite, prefixed with the mod name when set.
    pub fn atlas_key(&self, key: &str) -> String {
        match &self.mod_name {
            Some(mod_name) => format!("{}-{}", mod_name, key),
            None => key.to_string(),
        }
    }

    /// Convert an asset name into a field name.
    ///
    /// Empty when the name holds no word at all, e.g. `-`.
    pub fn field_name(&self, name: &str) -> String {
        let tokens = self.resource_rule.split(name);
        arcgen_core::safe_identifier(&self.target_rule.join(&tokens))
    }
}

/// The value of `key`, untrimmed, unless it is missing or whitespace only.
fn non_blank<'a>(overrides: &'a ArgMap, key: &str) -> Option<&'a str> {
    overrides
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

fn parse_rule(overrides: &ArgMap, key: &str, current: NameRule) -> Option<NameRule> {
    let value = non_blank(overrides, key)?;
    match value.parse::<NameRule>() {
        Ok(rule) => Some(rule),
        Err(err) => {
            warn!(key, value, fallback = %current, "{}", err);
            None
        }
    }
}
