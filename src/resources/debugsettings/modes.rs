//! Mode enumerations shared by the debug settings subsystems.
//!
//! Every enumeration is declared through [`mode_enum!`], which keeps the
//! ordinal, the stable snake_case name and the serde representation in sync.
//! The ordinals are mirrored into shader constants, so variants must only
//! ever be appended.

use crate::resources::debugsettings::error::DebugSettingsError;
use bitflags::{Flags, bitflags};
use serde::{Deserialize, Serialize};

/// Closed set of mutually exclusive debug visualization states.
///
/// The default value denotes "no override". For every enumeration except
/// [`PostProcessingMode`] that is the first declared value.
pub trait ModeEnum: Copy + Eq + Default + 'static {
    /// Type name reported in [`DebugSettingsError::InvalidState`].
    const TYPE_NAME: &'static str;
    /// All values in declaration order.
    const ALL: &'static [Self];
    /// Stable names, indexed by ordinal.
    const NAMES: &'static [&'static str];

    /// Ordinal of this value.
    fn index(self) -> usize;

    /// Convert a raw ordinal coming from a UI control or config file.
    fn from_index(index: usize) -> Result<Self, DebugSettingsError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DebugSettingsError::invalid(Self::TYPE_NAME, index as u64))
    }

    /// Stable snake_case name of this value.
    fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Look up a value by name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| Self::ALL[i])
    }

    fn is_default(self) -> bool {
        self == Self::default()
    }
}

macro_rules! mode_enum {
    (
        $(#[$attr:meta])*
        $name:ident, default = $default:ident {
            $( $(#[$vattr:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vattr])* $variant ),+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ModeEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$($name::$variant),+];
            const NAMES: &'static [&'static str] = &[$($label),+];

            fn index(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

mode_enum! {
    /// Material property shown in place of the lit result.
    MaterialMode, default = None {
        None => "none",
        Albedo => "albedo",
        Specular => "specular",
        Alpha => "alpha",
        Smoothness => "smoothness",
        AmbientOcclusion => "ambient_occlusion",
        Emission => "emission",
        NormalWorldSpace => "normal_world_space",
        NormalTangentSpace => "normal_tangent_space",
        LightingComplexity => "lighting_complexity",
        Metallic => "metallic",
        SpriteMask => "sprite_mask",
    }
}

mode_enum! {
    /// Raw vertex attribute shown in place of the lit result.
    VertexAttributeMode, default = None {
        None => "none",
        Texcoord0 => "texcoord0",
        Texcoord1 => "texcoord1",
        Texcoord2 => "texcoord2",
        Texcoord3 => "texcoord3",
        Color => "color",
        Tangent => "tangent",
        Normal => "normal",
    }
}

mode_enum! {
    /// Physically-plausible range check applied to material inputs.
    MaterialValidationMode, default = None {
        None => "none",
        Albedo => "albedo",
        Metallic => "metallic",
    }
}

mode_enum! {
    /// Full-screen overlay drawn over the final image.
    FullScreenMode, default = None {
        None => "none",
        Depth => "depth",
        AdditionalLightsShadowMap => "additional_lights_shadow_map",
        MainLightShadowMap => "main_light_shadow_map",
    }
}

mode_enum! {
    /// Replacement shading applied to the whole scene.
    SceneOverrideMode, default = None {
        None => "none",
        Overdraw => "overdraw",
        Wireframe => "wireframe",
        SolidWireframe => "solid_wireframe",
        ShadedWireframe => "shaded_wireframe",
    }
}

mode_enum! {
    /// Texture mip information visualization.
    MipInfoMode, default = None {
        None => "none",
        Level => "level",
        Count => "count",
        Ratio => "ratio",
    }
}

mode_enum! {
    /// Master switch for post-processing.
    ///
    /// `Auto` defers to the per-subsystem opinions.
    PostProcessingMode, default = Auto {
        Disabled => "disabled",
        Auto => "auto",
        Enabled => "enabled",
    }
}

mode_enum! {
    /// Lighting term isolated for inspection.
    LightingMode, default = None {
        None => "none",
        ShadowCascades => "shadow_cascades",
        LightingWithoutNormalMaps => "lighting_without_normal_maps",
        LightingWithNormalMaps => "lighting_with_normal_maps",
        Reflections => "reflections",
        ReflectionsWithSmoothness => "reflections_with_smoothness",
    }
}

mode_enum! {
    /// Highlighting of pixel values outside the expected range.
    PixelValidationMode, default = None {
        None => "none",
        HighlightNanInfNegative => "highlight_nan_inf_negative",
        HighlightOutsideOfRange => "highlight_outside_of_range",
    }
}

mode_enum! {
    /// Channels considered by pixel range validation.
    PixelValidationChannels, default = Rgb {
        Rgb => "rgb",
        R => "r",
        G => "g",
        B => "b",
        A => "a",
    }
}

bitflags! {
    /// Lighting contributions to keep while a lighting debug view is active.
    ///
    /// An empty set means every contribution is rendered normally.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LightingFeatureFlags: u32 {
        const GLOBAL_ILLUMINATION = 1 << 0;
        const MAIN_LIGHT = 1 << 1;
        const ADDITIONAL_LIGHTS = 1 << 2;
        const VERTEX_LIGHTING = 1 << 3;
        const EMISSION = 1 << 4;
        const AMBIENT_OCCLUSION = 1 << 5;
    }
}

impl LightingFeatureFlags {
    pub const TYPE_NAME: &'static str = "LightingFeatureFlags";

    /// Convert raw bits, rejecting any bit that names no flag.
    pub fn try_from_bits(bits: u32) -> Result<Self, DebugSettingsError> {
        Self::from_bits(bits).ok_or_else(|| DebugSettingsError::invalid(Self::TYPE_NAME, bits))
    }

    /// Lowercase flag names, in declaration order. Must stay in step with
    /// the `bitflags!` declaration above.
    const LABELS: &'static [&'static str] = &[
        "global_illumination",
        "main_light",
        "additional_lights",
        "vertex_lighting",
        "emission",
        "ambient_occlusion",
    ];

    /// Flag names in lowercase paired with their bit values.
    pub fn named_flags() -> Vec<(&'static str, u32)> {
        Self::LABELS
            .iter()
            .zip(Self::FLAGS.iter())
            .map(|(label, flag)| (*label, flag.value().bits()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_first_is_default<M: ModeEnum + std::fmt::Debug>() {
        assert_eq!(M::ALL[0], M::default(), "{}", M::TYPE_NAME);
        assert_eq!(M::ALL.len(), M::NAMES.len());
        assert_eq!(M::NAMES[0], "none");
    }

    #[test]
    fn test_none_is_first_and_default() {
        assert_first_is_default::<MaterialMode>();
        assert_first_is_default::<VertexAttributeMode>();
        assert_first_is_default::<MaterialValidationMode>();
        assert_first_is_default::<FullScreenMode>();
        assert_first_is_default::<SceneOverrideMode>();
        assert_first_is_default::<MipInfoMode>();
        assert_first_is_default::<LightingMode>();
        assert_first_is_default::<PixelValidationMode>();
    }

    #[test]
    fn test_post_processing_defaults_to_auto() {
        assert_eq!(PostProcessingMode::default(), PostProcessingMode::Auto);
        assert_eq!(PostProcessingMode::Auto.index(), 1);
    }

    #[test]
    fn test_ordinals_are_stable() {
        assert_eq!(SceneOverrideMode::Overdraw.index(), 1);
        assert_eq!(SceneOverrideMode::ShadedWireframe.index(), 4);
        assert_eq!(MipInfoMode::Ratio.index(), 3);
        assert_eq!(FullScreenMode::MainLightShadowMap.index(), 3);
    }

    #[test]
    fn test_from_index_out_of_range_is_invalid_state() {
        assert_eq!(
            SceneOverrideMode::from_index(2),
            Ok(SceneOverrideMode::Wireframe)
        );
        assert_eq!(
            SceneOverrideMode::from_index(5),
            Err(DebugSettingsError::InvalidState {
                enumeration: "SceneOverrideMode",
                value: 5,
            })
        );
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(
            SceneOverrideMode::from_name("Solid_Wireframe"),
            Some(SceneOverrideMode::SolidWireframe)
        );
        assert_eq!(MipInfoMode::from_name("bogus"), None);
    }

    #[test]
    fn test_names_match_serde() {
        let json = serde_json::to_string(&LightingMode::ReflectionsWithSmoothness).unwrap();
        assert_eq!(json, "\"reflections_with_smoothness\"");
        let json = serde_json::to_string(&VertexAttributeMode::Texcoord2).unwrap();
        assert_eq!(json, format!("\"{}\"", VertexAttributeMode::Texcoord2.name()));
    }

    #[test]
    fn test_flag_bits_are_stable() {
        assert_eq!(LightingFeatureFlags::GLOBAL_ILLUMINATION.bits(), 1);
        assert_eq!(LightingFeatureFlags::AMBIENT_OCCLUSION.bits(), 32);
        assert_eq!(LightingFeatureFlags::named_flags()[1], ("main_light", 2));
    }

    #[test]
    fn test_flag_labels_follow_declaration() {
        let flags = LightingFeatureFlags::FLAGS;
        assert_eq!(LightingFeatureFlags::LABELS.len(), flags.len());
        for (label, flag) in LightingFeatureFlags::LABELS.iter().zip(flags) {
            assert_eq!(*label, flag.name().to_ascii_lowercase());
        }
        let all = LightingFeatureFlags::named_flags()
            .iter()
            .fold(0, |acc, (_, bits)| acc | bits);
        assert_eq!(all, LightingFeatureFlags::all().bits());
    }

    #[test]
    fn test_unknown_flag_bits_are_invalid_state() {
        assert!(LightingFeatureFlags::try_from_bits(0b11).is_ok());
        assert_eq!(
            LightingFeatureFlags::try_from_bits(64),
            Err(DebugSettingsError::InvalidState {
                enumeration: "LightingFeatureFlags",
                value: 64,
            })
        );
    }
}
