//! Rendering debug views: full-screen overlays, scene overrides, mip info
//! and the post-processing master switch.

use std::any::Any;

use crate::resources::debugsettings::fields::{FieldValue, SettingField, clamp_scalar};
use crate::resources::debugsettings::modes::{
    FullScreenMode, MipInfoMode, ModeEnum, PostProcessingMode, SceneOverrideMode,
};
use crate::resources::debugsettings::{ClearColor, DebugSettings, DebugSettingsError};

const DEFAULT_FULL_SCREEN_OUTPUT_SIZE: f32 = 50.0;
const DEFAULT_MSAA_ENABLED: bool = true;
const DEFAULT_HDR_ENABLED: bool = true;

/// Rendering subsystem.
///
/// Besides its own opinions, this subsystem carries the post-processing
/// master mode read by [`DebugDisplaySettings::is_post_processing_allowed`].
///
/// [`DebugDisplaySettings::is_post_processing_allowed`]: crate::resources::debugsettings::DebugDisplaySettings::is_post_processing_allowed
#[derive(Debug, Clone, PartialEq)]
pub struct RenderingSettings {
    full_screen_mode: FullScreenMode,
    /// Size of the full-screen overlay as a percentage of the screen.
    full_screen_output_size: f32,
    scene_override_mode: SceneOverrideMode,
    mip_info_mode: MipInfoMode,
    post_processing_mode: PostProcessingMode,
    msaa_enabled: bool,
    hdr_enabled: bool,
}

impl Default for RenderingSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderingSettings {
    pub const PANEL_NAME: &'static str = "Rendering";

    pub fn new() -> Self {
        Self {
            full_screen_mode: FullScreenMode::None,
            full_screen_output_size: DEFAULT_FULL_SCREEN_OUTPUT_SIZE,
            scene_override_mode: SceneOverrideMode::None,
            mip_info_mode: MipInfoMode::None,
            post_processing_mode: PostProcessingMode::Auto,
            msaa_enabled: DEFAULT_MSAA_ENABLED,
            hdr_enabled: DEFAULT_HDR_ENABLED,
        }
    }

    pub fn full_screen_mode(&self) -> FullScreenMode {
        self.full_screen_mode
    }

    pub fn set_full_screen_mode(&mut self, mode: FullScreenMode) {
        self.full_screen_mode = mode;
    }

    pub fn full_screen_output_size(&self) -> f32 {
        self.full_screen_output_size
    }

    /// Clamped to `[0, 100]`.
    pub fn set_full_screen_output_size(&mut self, percent: f32) {
        self.full_screen_output_size = clamp_scalar(percent, 0.0, 100.0);
    }

    pub fn scene_override_mode(&self) -> SceneOverrideMode {
        self.scene_override_mode
    }

    pub fn set_scene_override_mode(&mut self, mode: SceneOverrideMode) {
        self.scene_override_mode = mode;
    }

    pub fn mip_info_mode(&self) -> MipInfoMode {
        self.mip_info_mode
    }

    pub fn set_mip_info_mode(&mut self, mode: MipInfoMode) {
        self.mip_info_mode = mode;
    }

    pub fn post_processing_mode(&self) -> PostProcessingMode {
        self.post_processing_mode
    }

    pub fn set_post_processing_mode(&mut self, mode: PostProcessingMode) {
        self.post_processing_mode = mode;
    }

    pub fn msaa_enabled(&self) -> bool {
        self.msaa_enabled
    }

    pub fn set_msaa_enabled(&mut self, enabled: bool) {
        self.msaa_enabled = enabled;
    }

    pub fn hdr_enabled(&self) -> bool {
        self.hdr_enabled
    }

    pub fn set_hdr_enabled(&mut self, enabled: bool) {
        self.hdr_enabled = enabled;
    }

    fn overrides_shading(&self) -> bool {
        !self.scene_override_mode.is_default() || !self.mip_info_mode.is_default()
    }
}

impl DebugSettings for RenderingSettings {
    fn panel_name(&self) -> &'static str {
        Self::PANEL_NAME
    }

    fn are_any_settings_active(&self) -> bool {
        !self.full_screen_mode.is_default()
            || !self.scene_override_mode.is_default()
            || !self.mip_info_mode.is_default()
            || !self.post_processing_mode.is_default()
            || self.msaa_enabled != DEFAULT_MSAA_ENABLED
            || self.hdr_enabled != DEFAULT_HDR_ENABLED
    }

    fn is_post_processing_allowed(&self) -> bool {
        self.post_processing_mode != PostProcessingMode::Disabled && !self.overrides_shading()
    }

    fn is_lighting_active(&self) -> bool {
        !self.overrides_shading()
    }

    fn try_get_screen_clear_color(&self) -> Result<Option<ClearColor>, DebugSettingsError> {
        Ok(match self.scene_override_mode {
            SceneOverrideMode::None | SceneOverrideMode::ShadedWireframe => None,
            SceneOverrideMode::Overdraw => Some(ClearColor::BLACK),
            SceneOverrideMode::Wireframe | SceneOverrideMode::SolidWireframe => {
                Some(ClearColor::WIREFRAME_BACKGROUND)
            }
        })
    }

    fn fields(&self) -> Vec<SettingField> {
        vec![
            SettingField::choice("full_screen_mode", self.full_screen_mode),
            SettingField::slider(
                "full_screen_output_size",
                self.full_screen_output_size,
                0.0,
                100.0,
            ),
            SettingField::choice("scene_override_mode", self.scene_override_mode),
            SettingField::choice("mip_info_mode", self.mip_info_mode),
            SettingField::choice("post_processing_mode", self.post_processing_mode),
            SettingField::toggle("msaa_enabled", self.msaa_enabled),
            SettingField::toggle("hdr_enabled", self.hdr_enabled),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<bool, DebugSettingsError> {
        match (name, value) {
            ("full_screen_mode", FieldValue::Index(i)) => {
                self.set_full_screen_mode(FullScreenMode::from_index(i)?)
            }
            ("full_screen_output_size", FieldValue::Scalar(v)) => {
                self.set_full_screen_output_size(v)
            }
            ("scene_override_mode", FieldValue::Index(i)) => {
                self.set_scene_override_mode(SceneOverrideMode::from_index(i)?)
            }
            ("mip_info_mode", FieldValue::Index(i)) => {
                self.set_mip_info_mode(MipInfoMode::from_index(i)?)
            }
            ("post_processing_mode", FieldValue::Index(i)) => {
                self.set_post_processing_mode(PostProcessingMode::from_index(i)?)
            }
            ("msaa_enabled", FieldValue::Toggle(b)) => self.set_msaa_enabled(b),
            ("hdr_enabled", FieldValue::Toggle(b)) => self.set_hdr_enabled(b),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let r = RenderingSettings::default();
        assert!(!r.are_any_settings_active());
        assert!(r.is_post_processing_allowed());
        assert!(r.is_lighting_active());
        assert_eq!(r.post_processing_mode(), PostProcessingMode::Auto);
    }

    #[test]
    fn test_any_single_change_activates() {
        let changes: [fn(&mut RenderingSettings); 6] = [
            |r: &mut RenderingSettings| r.set_full_screen_mode(FullScreenMode::Depth),
            |r: &mut RenderingSettings| r.set_scene_override_mode(SceneOverrideMode::Wireframe),
            |r: &mut RenderingSettings| r.set_mip_info_mode(MipInfoMode::Count),
            |r: &mut RenderingSettings| r.set_post_processing_mode(PostProcessingMode::Enabled),
            |r: &mut RenderingSettings| r.set_msaa_enabled(false),
            |r: &mut RenderingSettings| r.set_hdr_enabled(false),
        ];
        for change in changes {
            let mut r = RenderingSettings::new();
            change(&mut r);
            assert!(r.are_any_settings_active(), "{r:?}");
        }
    }

    #[test]
    fn test_output_size_does_not_activate() {
        let mut r = RenderingSettings::new();
        r.set_full_screen_output_size(75.0);
        assert!(!r.are_any_settings_active());
        r.set_full_screen_output_size(250.0);
        assert_eq!(r.full_screen_output_size(), 100.0);
    }

    #[test]
    fn test_post_processing_disallowed() {
        let mut r = RenderingSettings::new();
        r.set_post_processing_mode(PostProcessingMode::Disabled);
        assert!(!r.is_post_processing_allowed());

        let mut r = RenderingSettings::new();
        r.set_scene_override_mode(SceneOverrideMode::Overdraw);
        assert!(!r.is_post_processing_allowed());

        let mut r = RenderingSettings::new();
        r.set_mip_info_mode(MipInfoMode::Level);
        assert!(!r.is_post_processing_allowed());

        let mut r = RenderingSettings::new();
        r.set_full_screen_mode(FullScreenMode::MainLightShadowMap);
        assert!(r.is_post_processing_allowed());
    }

    #[test]
    fn test_lighting_inactive_under_overrides() {
        let mut r = RenderingSettings::new();
        r.set_scene_override_mode(SceneOverrideMode::ShadedWireframe);
        assert!(!r.is_lighting_active());

        let mut r = RenderingSettings::new();
        r.set_mip_info_mode(MipInfoMode::Ratio);
        assert!(!r.is_lighting_active());

        let mut r = RenderingSettings::new();
        r.set_msaa_enabled(false);
        assert!(r.is_lighting_active());
    }

    #[test]
    fn test_scene_override_clear_colors() {
        let expected = [
            (SceneOverrideMode::None, None),
            (SceneOverrideMode::Overdraw, Some(ClearColor::new(0.0, 0.0, 0.0, 1.0))),
            (SceneOverrideMode::Wireframe, Some(ClearColor::new(0.1, 0.1, 0.1, 1.0))),
            (SceneOverrideMode::SolidWireframe, Some(ClearColor::new(0.1, 0.1, 0.1, 1.0))),
            (SceneOverrideMode::ShadedWireframe, None),
        ];
        for (mode, color) in expected {
            let mut r = RenderingSettings::new();
            r.set_scene_override_mode(mode);
            assert_eq!(r.try_get_screen_clear_color(), Ok(color), "{mode}");
        }
    }

    #[test]
    fn test_set_field_rejects_unknown_ordinal() {
        let mut r = RenderingSettings::new();
        let err = r
            .set_field("scene_override_mode", FieldValue::Index(5))
            .unwrap_err();
        assert_eq!(
            err,
            DebugSettingsError::InvalidState {
                enumeration: "SceneOverrideMode",
                value: 5,
            }
        );
        assert_eq!(r.scene_override_mode(), SceneOverrideMode::None);

        let err = r
            .set_field("post_processing_mode", FieldValue::Index(3))
            .unwrap_err();
        assert_eq!(
            err,
            DebugSettingsError::InvalidState {
                enumeration: "PostProcessingMode",
                value: 3,
            }
        );
    }

    #[test]
    fn test_set_field_toggles() {
        let mut r = RenderingSettings::new();
        assert_eq!(r.set_field("hdr_enabled", FieldValue::Toggle(false)), Ok(true));
        assert!(!r.hdr_enabled());
        assert!(r.are_any_settings_active());
    }
}
