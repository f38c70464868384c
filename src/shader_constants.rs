//! Shader constant generator for the debug display modes.
//!
//! Shaders branch on the same ordinals the settings store, so every mode
//! enumeration and the lighting feature flags are mirrored into a WGSL file
//! as `const` declarations. The output is deterministic: enumerations appear
//! in a fixed order and values in declaration order.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::resources::debugsettings::modes::{
    FullScreenMode, LightingFeatureFlags, LightingMode, MaterialMode, MaterialValidationMode,
    MipInfoMode, ModeEnum, PixelValidationChannels, PixelValidationMode, PostProcessingMode,
    SceneOverrideMode, VertexAttributeMode,
};

/// Prefix of every generated constant.
const PREFIX: &str = "DEBUG";

/// Build the WGSL constant block.
pub fn generate_constants() -> Result<String, String> {
    render_constants().map_err(|e| format!("Failed to format shader constants: {e}"))
}

/// Write the generated constants to a file, creating parent directories.
pub fn write_constants(path: &Path, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    std::fs::write(path, content).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn render_constants() -> Result<String, std::fmt::Error> {
    let mut out = String::with_capacity(8 * 1024);

    writeln!(
        out,
        "// THIS FILE IS AUTO-GENERATED by `debugview --create-shader-constants`."
    )?;
    writeln!(out, "// DO NOT EDIT MANUALLY.")?;
    writeln!(out)?;

    render_enum::<MaterialMode>(&mut out)?;
    render_enum::<VertexAttributeMode>(&mut out)?;
    render_enum::<MaterialValidationMode>(&mut out)?;
    render_enum::<FullScreenMode>(&mut out)?;
    render_enum::<SceneOverrideMode>(&mut out)?;
    render_enum::<MipInfoMode>(&mut out)?;
    render_enum::<PostProcessingMode>(&mut out)?;
    render_enum::<LightingMode>(&mut out)?;
    render_enum::<PixelValidationMode>(&mut out)?;
    render_enum::<PixelValidationChannels>(&mut out)?;

    let type_name = screaming_snake(LightingFeatureFlags::TYPE_NAME);
    writeln!(out, "// {}", LightingFeatureFlags::TYPE_NAME)?;
    for (name, bits) in LightingFeatureFlags::named_flags() {
        writeln!(
            out,
            "const {PREFIX}_{type_name}_{}: u32 = {bits}u;",
            name.to_ascii_uppercase()
        )?;
    }

    Ok(out)
}

fn render_enum<M: ModeEnum>(out: &mut String) -> std::fmt::Result {
    let type_name = screaming_snake(M::TYPE_NAME);
    writeln!(out, "// {}", M::TYPE_NAME)?;
    for mode in M::ALL {
        writeln!(
            out,
            "const {PREFIX}_{type_name}_{}: u32 = {}u;",
            mode.name().to_ascii_uppercase(),
            mode.index()
        )?;
    }
    writeln!(out)
}

/// `MipInfoMode` -> `MIP_INFO_MODE`.
fn screaming_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screaming_snake() {
        assert_eq!(screaming_snake("MipInfoMode"), "MIP_INFO_MODE");
        assert_eq!(screaming_snake("LightingFeatureFlags"), "LIGHTING_FEATURE_FLAGS");
    }

    #[test]
    fn test_constants_use_ordinals() {
        let out = generate_constants().unwrap();
        assert!(out.contains("const DEBUG_MATERIAL_MODE_NONE: u32 = 0u;"));
        assert!(out.contains("const DEBUG_MATERIAL_MODE_SPRITE_MASK: u32 = 11u;"));
        assert!(out.contains("const DEBUG_POST_PROCESSING_MODE_AUTO: u32 = 1u;"));
        assert!(out.contains("const DEBUG_LIGHTING_FEATURE_FLAGS_EMISSION: u32 = 16u;"));
    }

    #[test]
    fn test_constants_are_deterministic() {
        assert_eq!(generate_constants(), generate_constants());
    }
}
