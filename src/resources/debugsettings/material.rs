//! Material debug views and material input validation.

use std::any::Any;

use crate::resources::debugsettings::fields::{FieldValue, SettingField, clamp_scalar};
use crate::resources::debugsettings::modes::{
    MaterialMode, MaterialValidationMode, ModeEnum, VertexAttributeMode,
};
use crate::resources::debugsettings::{DebugSettings, DebugSettingsError};

const DEFAULT_ALBEDO_MIN_LUMINANCE: f32 = 0.01;
const DEFAULT_ALBEDO_MAX_LUMINANCE: f32 = 0.90;
const DEFAULT_ALBEDO_HUE_TOLERANCE: f32 = 0.104;
const DEFAULT_ALBEDO_SATURATION_TOLERANCE: f32 = 0.214;
const DEFAULT_METALLIC_MIN: f32 = 0.0;
const DEFAULT_METALLIC_MAX: f32 = 0.9;

/// Material subsystem: which material property to display, and which
/// material inputs to validate against physically plausible ranges.
///
/// Any active material view replaces the lit result, so post-processing
/// and lighting are both off while one is active.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSettings {
    material_mode: MaterialMode,
    vertex_attribute_mode: VertexAttributeMode,
    validation_mode: MaterialValidationMode,
    albedo_min_luminance: f32,
    albedo_max_luminance: f32,
    albedo_hue_tolerance: f32,
    albedo_saturation_tolerance: f32,
    metallic_min: f32,
    metallic_max: f32,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialSettings {
    pub const PANEL_NAME: &'static str = "Material";

    pub fn new() -> Self {
        Self {
            material_mode: MaterialMode::None,
            vertex_attribute_mode: VertexAttributeMode::None,
            validation_mode: MaterialValidationMode::None,
            albedo_min_luminance: DEFAULT_ALBEDO_MIN_LUMINANCE,
            albedo_max_luminance: DEFAULT_ALBEDO_MAX_LUMINANCE,
            albedo_hue_tolerance: DEFAULT_ALBEDO_HUE_TOLERANCE,
            albedo_saturation_tolerance: DEFAULT_ALBEDO_SATURATION_TOLERANCE,
            metallic_min: DEFAULT_METALLIC_MIN,
            metallic_max: DEFAULT_METALLIC_MAX,
        }
    }

    pub fn material_mode(&self) -> MaterialMode {
        self.material_mode
    }

    pub fn set_material_mode(&mut self, mode: MaterialMode) {
        self.material_mode = mode;
    }

    pub fn vertex_attribute_mode(&self) -> VertexAttributeMode {
        self.vertex_attribute_mode
    }

    pub fn set_vertex_attribute_mode(&mut self, mode: VertexAttributeMode) {
        self.vertex_attribute_mode = mode;
    }

    pub fn validation_mode(&self) -> MaterialValidationMode {
        self.validation_mode
    }

    pub fn set_validation_mode(&mut self, mode: MaterialValidationMode) {
        self.validation_mode = mode;
    }

    pub fn albedo_min_luminance(&self) -> f32 {
        self.albedo_min_luminance
    }

    /// Clamped to `[0, albedo_max_luminance]`.
    pub fn set_albedo_min_luminance(&mut self, value: f32) {
        self.albedo_min_luminance = clamp_scalar(value, 0.0, self.albedo_max_luminance);
    }

    pub fn albedo_max_luminance(&self) -> f32 {
        self.albedo_max_luminance
    }

    /// Clamped to `[albedo_min_luminance, 1]`.
    pub fn set_albedo_max_luminance(&mut self, value: f32) {
        self.albedo_max_luminance = clamp_scalar(value, self.albedo_min_luminance, 1.0);
    }

    pub fn albedo_hue_tolerance(&self) -> f32 {
        self.albedo_hue_tolerance
    }

    pub fn set_albedo_hue_tolerance(&mut self, value: f32) {
        self.albedo_hue_tolerance = clamp_scalar(value, 0.0, 1.0);
    }

    pub fn albedo_saturation_tolerance(&self) -> f32 {
        self.albedo_saturation_tolerance
    }

    pub fn set_albedo_saturation_tolerance(&mut self, value: f32) {
        self.albedo_saturation_tolerance = clamp_scalar(value, 0.0, 1.0);
    }

    pub fn metallic_min(&self) -> f32 {
        self.metallic_min
    }

    /// Clamped to `[0, metallic_max]`.
    pub fn set_metallic_min(&mut self, value: f32) {
        self.metallic_min = clamp_scalar(value, 0.0, self.metallic_max);
    }

    pub fn metallic_max(&self) -> f32 {
        self.metallic_max
    }

    /// Clamped to `[metallic_min, 1]`.
    pub fn set_metallic_max(&mut self, value: f32) {
        self.metallic_max = clamp_scalar(value, self.metallic_min, 1.0);
    }
}

impl DebugSettings for MaterialSettings {
    fn panel_name(&self) -> &'static str {
        Self::PANEL_NAME
    }

    fn are_any_settings_active(&self) -> bool {
        !self.material_mode.is_default()
            || !self.vertex_attribute_mode.is_default()
            || !self.validation_mode.is_default()
    }

    fn is_post_processing_allowed(&self) -> bool {
        !self.are_any_settings_active()
    }

    fn is_lighting_active(&self) -> bool {
        !self.are_any_settings_active()
    }

    fn fields(&self) -> Vec<SettingField> {
        vec![
            SettingField::choice("material_mode", self.material_mode),
            SettingField::choice("vertex_attribute_mode", self.vertex_attribute_mode),
            SettingField::choice("validation_mode", self.validation_mode),
            SettingField::slider("albedo_min_luminance", self.albedo_min_luminance, 0.0, 1.0),
            SettingField::slider("albedo_max_luminance", self.albedo_max_luminance, 0.0, 1.0),
            SettingField::slider("albedo_hue_tolerance", self.albedo_hue_tolerance, 0.0, 1.0),
            SettingField::slider(
                "albedo_saturation_tolerance",
                self.albedo_saturation_tolerance,
                0.0,
                1.0,
            ),
            SettingField::slider("metallic_min", self.metallic_min, 0.0, 1.0),
            SettingField::slider("metallic_max", self.metallic_max, 0.0, 1.0),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<bool, DebugSettingsError> {
        match (name, value) {
            ("material_mode", FieldValue::Index(i)) => {
                self.set_material_mode(MaterialMode::from_index(i)?)
            }
            ("vertex_attribute_mode", FieldValue::Index(i)) => {
                self.set_vertex_attribute_mode(VertexAttributeMode::from_index(i)?)
            }
            ("validation_mode", FieldValue::Index(i)) => {
                self.set_validation_mode(MaterialValidationMode::from_index(i)?)
            }
            ("albedo_min_luminance", FieldValue::Scalar(v)) => self.set_albedo_min_luminance(v),
            ("albedo_max_luminance", FieldValue::Scalar(v)) => self.set_albedo_max_luminance(v),
            ("albedo_hue_tolerance", FieldValue::Scalar(v)) => self.set_albedo_hue_tolerance(v),
            ("albedo_saturation_tolerance", FieldValue::Scalar(v)) => {
                self.set_albedo_saturation_tolerance(v)
            }
            ("metallic_min", FieldValue::Scalar(v)) => self.set_metallic_min(v),
            ("metallic_max", FieldValue::Scalar(v)) => self.set_metallic_max(v),
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
