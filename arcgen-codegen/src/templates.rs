//! Java text templates for each resource kind.
//!
//! Every template is a pure function of the dedup key, the resolved field
//! name and the generator arguments, so emitted text can be checked without
//! a sink.

use crate::args::{ARC_CORE, ASSET_DESCRIPTOR, GeneratorArgs, SOUND, SOUND_PARAMETER, TEXTURE_REGION};

/// `public static <type> <field>;`
pub fn field_declaration(type_name: &str, identifier: &str) -> String {
    format!("public static {} {};", type_name, identifier)
}

/// Header line of the loader function.
pub fn load_function_header(args: &GeneratorArgs) -> String {
    format!("public static void {}() {{", args.load_function)
}

pub fn sprite_field(_key: &str, identifier: &str, args: &GeneratorArgs) -> String {
    field_declaration(args.class(TEXTURE_REGION), identifier)
}

pub fn sprite_load_statement(key: &str, identifier: &str, args: &GeneratorArgs) -> String {
    format!(
        "{} = {}.atlas.find(\"{}\");",
        identifier,
        args.class(ARC_CORE),
        escape_java_string(&args.atlas_key(key))
    )
}

pub fn sound_field(_key: &str, identifier: &str, args: &GeneratorArgs) -> String {
    field_declaration(args.class(SOUND), identifier)
}

pub fn sound_load_statement(key: &str, identifier: &str, _args: &GeneratorArgs) -> String {
    format!("{} = loadSound(\"{}\");", identifier, escape_java_string(key))
}

/// The private helper every sound field is loaded through.
///
/// Load failures are printed by the asset manager instead of propagated.
pub fn sound_loader_helper(args: &GeneratorArgs) -> String {
    let core = args.class(ARC_CORE);
    let sound = args.class(SOUND);
    let descriptor = args.class(ASSET_DESCRIPTOR);
    let parameter = args.class(SOUND_PARAMETER);

    format!(
        "protected static {sound} loadSound(String soundName) {{\n\
         \x20   {sound} sound = new {sound}();\n\
         \x20   {descriptor}<?> desc = {core}.assets.load(\"sounds/\" + soundName, {sound}.class, new {parameter}(sound));\n\
         \x20   desc.errored = Throwable::printStackTrace;\n\
         \x20   return sound;\n\
         }}"
    )
}

/// Escape text for use inside a Java string literal.
pub fn escape_java_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgMap, ResourceKind};

    fn sprite_args(mod_name: Option<&str>) -> GeneratorArgs {
        let mut args = GeneratorArgs::defaults(ResourceKind::Sprites);
        args.mod_name = mod_name.map(str::to_string);
        args
    }

    #[test]
    fn test_sprite_field() {
        assert_eq!(
            sprite_field("ship", "ship", &sprite_args(None)),
            "public static arc.graphics.g2d.TextureRegion ship;"
        );
    }

    #[test]
    fn test_sprite_load_statement_with_mod_name() {
        assert_eq!(
            sprite_load_statement("ship", "ship", &sprite_args(Some("core"))),
            "ship = arc.Core.atlas.find(\"core-ship\");"
        );
    }

    #[test]
    fn test_sprite_load_statement_without_mod_name() {
        assert_eq!(
            sprite_load_statement("big-ship", "bigShip", &sprite_args(None)),
            "bigShip = arc.Core.atlas.find(\"big-ship\");"
        );
    }

    #[test]
    fn test_sound_templates() {
        let args = GeneratorArgs::defaults(ResourceKind::Sounds);
        assert_eq!(
            sound_field("shot.ogg", "shot", &args),
            "public static arc.audio.Sound shot;"
        );
        assert_eq!(
            sound_load_statement("shot.ogg", "shot", &args),
            "shot = loadSound(\"shot.ogg\");"
        );
    }

    #[test]
    fn test_sound_loader_helper() {
        let args = GeneratorArgs::defaults(ResourceKind::Sounds);
        insta::assert_snapshot!(sound_loader_helper(&args), @r#"
        protected static arc.audio.Sound loadSound(String soundName) {
            arc.audio.Sound sound = new arc.audio.Sound();
            arc.assets.AssetDescriptor<?> desc = arc.Core.assets.load("sounds/" + soundName, arc.audio.Sound.class, new arc.assets.loaders.SoundLoader.SoundParameter(sound));
            desc.errored = Throwable::printStackTrace;
            return sound;
        }
        "#);
    }

    #[test]
    fn test_sound_loader_helper_uses_overrides() {
        let overrides: ArgMap = [("Class[arc.audio.Sound]".to_string(), "mod.Sfx".to_string())]
            .into_iter()
            .collect();
        let args = GeneratorArgs::resolve(ResourceKind::Sounds, &overrides);

        let helper = sound_loader_helper(&args);

        assert!(helper.starts_with("protected static mod.Sfx loadSound(String soundName) {"));
        assert!(helper.contains("mod.Sfx.class"));
    }

    #[test]
    fn test_load_function_header() {
        let mut args = GeneratorArgs::defaults(ResourceKind::Sprites);
        assert_eq!(load_function_header(&args), "public static void load() {");
        args.load_function = "init".to_string();
        assert_eq!(load_function_header(&args), "public static void init() {");
    }

    #[test]
    fn test_escape_java_string() {
        assert_eq!(escape_java_string("plain"), "plain");
        assert_eq!(escape_java_string("a\"b\\c"), "a\\\"b\\\\c");
    }
}
