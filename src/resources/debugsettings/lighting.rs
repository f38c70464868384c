//! Lighting debug views.

use std::any::Any;

use crate::resources::debugsettings::fields::{FieldValue, SettingField};
use crate::resources::debugsettings::modes::{LightingFeatureFlags, LightingMode, ModeEnum};
use crate::resources::debugsettings::{DebugSettings, DebugSettingsError};

/// Lighting subsystem: isolate one lighting term, or restrict lighting to
/// a subset of its contributions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightingSettings {
    lighting_mode: LightingMode,
    feature_flags: LightingFeatureFlags,
}

impl LightingSettings {
    pub const PANEL_NAME: &'static str = "Lighting";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn lighting_mode(&self) -> LightingMode {
        self.lighting_mode
    }

    pub fn set_lighting_mode(&mut self, mode: LightingMode) {
        self.lighting_mode = mode;
    }

    pub fn feature_flags(&self) -> LightingFeatureFlags {
        self.feature_flags
    }

    pub fn set_feature_flags(&mut self, flags: LightingFeatureFlags) {
        self.feature_flags = flags;
    }
}

impl DebugSettings for LightingSettings {
    fn panel_name(&self) -> &'static str {
        Self::PANEL_NAME
    }

    fn are_any_settings_active(&self) -> bool {
        !self.lighting_mode.is_default() || !self.feature_flags.is_empty()
    }

    // Reflection views show raw probe data, tonemapping would misrepresent it.
    fn is_post_processing_allowed(&self) -> bool {
        !matches!(
            self.lighting_mode,
            LightingMode::Reflections | LightingMode::ReflectionsWithSmoothness
        )
    }

    fn is_lighting_active(&self) -> bool {
        true
    }

    fn fields(&self) -> Vec<SettingField> {
        vec![
            SettingField::choice("lighting_mode", self.lighting_mode),
            SettingField::flags(
                "feature_flags",
                LightingFeatureFlags::TYPE_NAME,
                self.feature_flags.bits(),
                LightingFeatureFlags::named_flags(),
            ),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<bool, DebugSettingsError> {
        match (name, value) {
            ("lighting_mode", FieldValue::Index(i)) => {
                self.set_lighting_mode(LightingMode::from_index(i)?)
            }
            ("feature_flags", FieldValue::Bits(bits)) => {
                self.set_feature_flags(LightingFeatureFlags::try_from_bits(bits)?)
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
