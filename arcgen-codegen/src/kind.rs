//! Resource kinds supported by the generator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    args::{ARC_CORE, ASSET_DESCRIPTOR, ClassRef, GeneratorArgs, SOUND, SOUND_PARAMETER, TEXTURE_REGION},
    templates,
    walker::AssetFile,
};

/// The kind of asset a resource class exposes.
///
/// Each kind decides how leaf files collapse into fields and which Java
/// text is emitted for them. Adding a kind means adding a variant here and
/// its templates; the walk, dedup and emission steps are shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Texture regions looked up in the sprite atlas.
    Sprites,
    /// Sounds loaded through the asset manager.
    Sounds,
    /// Emits nothing.
    #[default]
    None,
}

impl ResourceKind {
    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Sprites => "sprites",
            ResourceKind::Sounds => "sounds",
            ResourceKind::None => "none",
        }
    }

    /// The key that decides which files collapse into one field.
    ///
    /// Sprites drop the extension so `ship.png` and `ship.jpg` share a field;
    /// sounds keep it so every encoding gets its own.
    pub fn dedup_key(&self, file: &AssetFile) -> String {
        match self {
            ResourceKind::Sprites => file.stem().to_string(),
            ResourceKind::Sounds | ResourceKind::None => file.name().to_string(),
        }
    }

    /// The part of a dedup key that is converted into the field name.
    pub fn name_source<'a>(&self, key: &'a str) -> &'a str {
        match self {
            ResourceKind::Sounds => key.rsplit_once('.').map_or(key, |(stem, _)| stem),
            ResourceKind::Sprites | ResourceKind::None => key,
        }
    }

    /// Qualified names this kind references, with their defaults.
    pub fn class_refs(&self) -> &'static [ClassRef] {
        match self {
            ResourceKind::Sprites => &[ARC_CORE, TEXTURE_REGION],
            ResourceKind::Sounds => &[ARC_CORE, SOUND, ASSET_DESCRIPTOR, SOUND_PARAMETER],
            ResourceKind::None => &[],
        }
    }

    /// Text emitted once before the fields.
    pub fn preamble(&self, args: &GeneratorArgs) -> Option<String> {
        match self {
            ResourceKind::Sounds => Some(templates::sound_loader_helper(args)),
            ResourceKind::Sprites | ResourceKind::None => None,
        }
    }

    /// Field declaration for one key.
    pub fn field(&self, key: &str, identifier: &str, args: &GeneratorArgs) -> String {
        match self {
            ResourceKind::Sprites => templates::sprite_field(key, identifier, args),
            ResourceKind::Sounds => templates::sound_field(key, identifier, args),
            ResourceKind::None => String::new(),
        }
    }

    /// Loader statement assigning one field.
    pub fn load_statement(&self, key: &str, identifier: &str, args: &GeneratorArgs) -> String {
        match self {
            ResourceKind::Sprites => templates::sprite_load_statement(key, identifier, args),
            ResourceKind::Sounds => templates::sound_load_statement(key, identifier, args),
            ResourceKind::None => String::new(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sprites" | "sprite" => Ok(ResourceKind::Sprites),
            "sounds" | "sound" => Ok(ResourceKind::Sounds),
            "none" => Ok(ResourceKind::None),
            _ => Err(format!(
                "unknown resource kind '{}', expected 'sprites', 'sounds' or 'none'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_key() {
        let png = AssetFile::new("sprites/ship.png");
        assert_eq!(ResourceKind::Sprites.dedup_key(&png), "ship");
        assert_eq!(ResourceKind::Sounds.dedup_key(&png), "ship.png");
    }

    #[test]
    fn test_name_source() {
        assert_eq!(ResourceKind::Sounds.name_source("shot.ogg"), "shot");
        assert_eq!(ResourceKind::Sounds.name_source("shot"), "shot");
        assert_eq!(ResourceKind::Sprites.name_source("heat.glow"), "heat.glow");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sprites".parse::<ResourceKind>().unwrap(), ResourceKind::Sprites);
        assert_eq!("Sounds".parse::<ResourceKind>().unwrap(), ResourceKind::Sounds);
        assert_eq!("none".parse::<ResourceKind>().unwrap(), ResourceKind::None);
        assert!("music".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let kind: ResourceKind = serde_json::from_str(r#""sounds""#).unwrap();
        assert_eq!(kind, ResourceKind::Sounds);
    }
}
