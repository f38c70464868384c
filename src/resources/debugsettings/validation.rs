//! Pixel value validation.

use std::any::Any;

use crate::resources::debugsettings::fields::{FieldValue, SettingField};
use crate::resources::debugsettings::modes::{ModeEnum, PixelValidationChannels, PixelValidationMode};
use crate::resources::debugsettings::{DebugSettings, DebugSettingsError};

const DEFAULT_RANGE_MIN: f32 = 0.0;
const DEFAULT_RANGE_MAX: f32 = 1.0;
/// Slider bounds offered to the UI; values outside are still accepted.
const RANGE_SLIDER_LIMIT: f32 = 100.0;

/// Validation subsystem: highlight pixels with NaN/Inf/negative values or
/// values outside a configurable range.
///
/// Validation inspects pre-tonemapped values, so post-processing is held
/// off while a validation mode is on.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSettings {
    validation_mode: PixelValidationMode,
    channels: PixelValidationChannels,
    range_min: f32,
    range_max: f32,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationSettings {
    pub const PANEL_NAME: &'static str = "Validation";

    pub fn new() -> Self {
        Self {
            validation_mode: PixelValidationMode::None,
            channels: PixelValidationChannels::Rgb,
            range_min: DEFAULT_RANGE_MIN,
            range_max: DEFAULT_RANGE_MAX,
        }
    }

    pub fn validation_mode(&self) -> PixelValidationMode {
        self.validation_mode
    }

    pub fn set_validation_mode(&mut self, mode: PixelValidationMode) {
        self.validation_mode = mode;
    }

    pub fn channels(&self) -> PixelValidationChannels {
        self.channels
    }

    pub fn set_channels(&mut self, channels: PixelValidationChannels) {
        self.channels = channels;
    }

    pub fn range_min(&self) -> f32 {
        self.range_min
    }

    /// Never exceeds `range_max`; NaN is ignored.
    pub fn set_range_min(&mut self, value: f32) {
        if !value.is_nan() {
            self.range_min = value.min(self.range_max);
        }
    }

    pub fn range_max(&self) -> f32 {
        self.range_max
    }

    /// Never below `range_min`; NaN is ignored.
    pub fn set_range_max(&mut self, value: f32) {
        if !value.is_nan() {
            self.range_max = value.max(self.range_min);
        }
    }
}

impl DebugSettings for ValidationSettings {
    fn panel_name(&self) -> &'static str {
        Self::PANEL_NAME
    }

    fn are_any_settings_active(&self) -> bool {
        !self.validation_mode.is_default() || !self.channels.is_default()
    }

    fn is_post_processing_allowed(&self) -> bool {
        self.validation_mode.is_default()
    }

    fn is_lighting_active(&self) -> bool {
        true
    }

    fn fields(&self) -> Vec<SettingField> {
        vec![
            SettingField::choice("validation_mode", self.validation_mode),
            SettingField::choice("channels", self.channels),
            SettingField::slider(
                "range_min",
                self.range_min,
                -RANGE_SLIDER_LIMIT,
                RANGE_SLIDER_LIMIT,
            ),
            SettingField::slider(
                "range_max",
                self.range_max,
                -RANGE_SLIDER_LIMIT,
                RANGE_SLIDER_LIMIT,
            ),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<bool, DebugSettingsError> {
        match (name, value) {
            ("validation_mode", FieldValue::Index(i)) => {
                self.set_validation_mode(PixelValidationMode::from_index(i)?)
            }
            ("channels", FieldValue::Index(i)) => {
                self.set_channels(PixelValidationChannels::from_index(i)?)
            }
            ("range_min", FieldValue::Scalar(v)) => self.set_range_min(v),
            ("range_max", FieldValue::Scalar(v)) => self.set_range_max(v),
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
        let v = ValidationSettings::default();
        assert!(!v.are_any_settings_active());
        assert!(v.is_post_processing_allowed());
        assert!(v.is_lighting_active());
    }

    #[test]
    fn test_mode_blocks_post_processing() {
        let mut v = ValidationSettings::new();
        v.set_validation_mode(PixelValidationMode::HighlightNanInfNegative);
        assert!(v.are_any_settings_active());
        assert!(!v.is_post_processing_allowed());
    }

    #[test]
    fn test_channels_activate_without_blocking() {
        let mut v = ValidationSettings::new();
        v.set_channels(PixelValidationChannels::A);
        assert!(v.are_any_settings_active());
        assert!(v.is_post_processing_allowed());
    }

    #[test]
    fn test_range_stays_ordered() {
        let mut v = ValidationSettings::new();
        v.set_range_min(5.0);
        assert_eq!(v.range_min(), 1.0);
        v.set_range_max(-3.0);
        assert_eq!(v.range_max(), 1.0);
        v.set_range_max(10.0);
        v.set_range_min(2.0);
        assert_eq!((v.range_min(), v.range_max()), (2.0, 10.0));
        v.set_range_min(f32::NAN);
        assert_eq!(v.range_min(), 2.0);
    }
}
