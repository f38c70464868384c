//! Generic field view used to bind subsystem settings to UI controls.
//!
//! A panel builder visiting subsystems does not know their concrete types,
//! so each subsystem describes its fields as a list of [`SettingField`]s and
//! accepts writes through [`FieldValue`]. Enumerations bind to choice
//! controls (current index + names), booleans to toggles.

use crate::resources::debugsettings::error::DebugSettingsError;
use crate::resources::debugsettings::modes::ModeEnum;
use serde::Serialize;

/// One named field of a subsystem, with its current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingField {
    pub name: &'static str,
    pub view: FieldView,
}

/// Current value of a field, shaped for the control it binds to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldView {
    Choice {
        index: usize,
        names: &'static [&'static str],
        enumeration: &'static str,
    },
    Toggle {
        value: bool,
    },
    Flags {
        bits: u32,
        flags: Vec<(&'static str, u32)>,
        enumeration: &'static str,
    },
    Slider {
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Value written to a field through [`DebugSettings::set_field`].
///
/// [`DebugSettings::set_field`]: crate::resources::debugsettings::DebugSettings::set_field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Index(usize),
    Toggle(bool),
    Bits(u32),
    Scalar(f32),
}

impl SettingField {
    pub fn choice<M: ModeEnum>(name: &'static str, mode: M) -> Self {
        Self {
            name,
            view: FieldView::Choice {
                index: mode.index(),
                names: M::NAMES,
                enumeration: M::TYPE_NAME,
            },
        }
    }

    pub fn toggle(name: &'static str, value: bool) -> Self {
        Self {
            name,
            view: FieldView::Toggle { value },
        }
    }

    pub fn slider(name: &'static str, value: f32, min: f32, max: f32) -> Self {
        Self {
            name,
            view: FieldView::Slider { value, min, max },
        }
    }

    pub fn flags(
        name: &'static str,
        enumeration: &'static str,
        bits: u32,
        flags: Vec<(&'static str, u32)>,
    ) -> Self {
        Self {
            name,
            view: FieldView::Flags {
                bits,
                flags,
                enumeration,
            },
        }
    }
}

impl FieldView {
    /// Parse a textual value (as found in config files) into a write for
    /// a field of this shape.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, String> {
        let raw = raw.trim();
        match self {
            FieldView::Choice { names, .. } => names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(raw))
                .map(FieldValue::Index)
                .ok_or_else(|| format!("'{raw}' is not one of {}", names.join(", "))),
            FieldView::Toggle { .. } => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(FieldValue::Toggle(true)),
                "false" | "no" | "off" | "0" => Ok(FieldValue::Toggle(false)),
                _ => Err(format!("'{raw}' is not a boolean")),
            },
            FieldView::Flags { flags, .. } => {
                if let Ok(bits) = raw.parse::<u32>() {
                    return Ok(FieldValue::Bits(bits));
                }
                let mut bits = 0;
                for part in raw.split('|').map(str::trim).filter(|p| !p.is_empty()) {
                    if part.eq_ignore_ascii_case("none") {
                        continue;
                    }
                    let (_, value) = flags
                        .iter()
                        .find(|(name, _)| name.eq_ignore_ascii_case(part))
                        .ok_or_else(|| format!("'{part}' is not a known flag"))?;
                    bits |= value;
                }
                Ok(FieldValue::Bits(bits))
            }
            FieldView::Slider { .. } => raw
                .parse::<f32>()
                .map(FieldValue::Scalar)
                .map_err(|e| format!("'{raw}' is not a number: {e}")),
        }
    }

    /// Check a parsed write against this field's enumeration without
    /// applying it.
    ///
    /// Choice indices past the last name and flag bits naming no flag are
    /// `InvalidState`. Other shapes always pass.
    pub fn check(&self, value: FieldValue) -> Result<(), DebugSettingsError> {
        match (self, value) {
            (FieldView::Choice { names, enumeration, .. }, FieldValue::Index(index))
                if index >= names.len() =>
            {
                Err(DebugSettingsError::invalid(*enumeration, index as u64))
            }
            (FieldView::Flags { flags, enumeration, .. }, FieldValue::Bits(bits)) => {
                let known = flags.iter().fold(0, |acc, (_, value)| acc | value);
                if bits & !known != 0 {
                    Err(DebugSettingsError::invalid(*enumeration, bits))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    /// Render the current value the way [`FieldView::parse`] reads it back.
    pub fn to_config_string(&self) -> String {
        match self {
            FieldView::Choice { index, names, .. } => names[*index].to_string(),
            FieldView::Toggle { value } => value.to_string(),
            FieldView::Flags { bits, flags, .. } => {
                let set: Vec<&str> = flags
                    .iter()
                    .filter(|(_, value)| bits & value != 0)
                    .map(|(name, _)| *name)
                    .collect();
                if set.is_empty() {
                    "none".to_string()
                } else {
                    set.join(" | ")
                }
            }
            FieldView::Slider { value, .. } => value.to_string(),
        }
    }
}

/// Clamp `value` into `[min, max]`, mapping NaN to `min`.
pub(crate) fn clamp_scalar(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::debugsettings::modes::SceneOverrideMode;

    #[test]
    fn test_choice_parse_by_name() {
        let field = SettingField::choice("scene_override_mode", SceneOverrideMode::None);
        assert_eq!(field.view.parse("Wireframe"), Ok(FieldValue::Index(2)));
        assert!(field.view.parse("lines").is_err());
    }

    #[test]
    fn test_toggle_parse() {
        let field = SettingField::toggle("msaa_enabled", true);
        assert_eq!(field.view.parse("off"), Ok(FieldValue::Toggle(false)));
        assert!(field.view.parse("maybe").is_err());
    }

    #[test]
    fn test_flags_parse_names_and_bits() {
        let field = SettingField::flags("features", "Features", 0, vec![("a", 1), ("b", 2), ("c", 4)]);
        assert_eq!(field.view.parse("a | c"), Ok(FieldValue::Bits(5)));
        assert_eq!(field.view.parse("6"), Ok(FieldValue::Bits(6)));
        assert_eq!(field.view.parse("none"), Ok(FieldValue::Bits(0)));
        assert!(field.view.parse("d").is_err());
    }

    #[test]
    fn test_config_string_reads_back() {
        let field = SettingField::flags("features", "Features", 5, vec![("a", 1), ("b", 2), ("c", 4)]);
        assert_eq!(field.view.to_config_string(), "a | c");
        assert_eq!(
            field.view.parse(&field.view.to_config_string()),
            Ok(FieldValue::Bits(5))
        );
    }

    #[test]
    fn test_check_rejects_out_of_range() {
        let choice = SettingField::choice("scene_override_mode", SceneOverrideMode::None);
        assert_eq!(choice.view.check(FieldValue::Index(4)), Ok(()));
        assert_eq!(
            choice.view.check(FieldValue::Index(5)),
            Err(DebugSettingsError::InvalidState {
                enumeration: "SceneOverrideMode",
                value: 5,
            })
        );

        let flags = SettingField::flags("features", "Features", 0, vec![("a", 1), ("b", 2)]);
        assert_eq!(flags.view.check(FieldValue::Bits(3)), Ok(()));
        assert_eq!(
            flags.view.check(FieldValue::Bits(4)),
            Err(DebugSettingsError::InvalidState {
                enumeration: "Features",
                value: 4,
            })
        );
    }

    #[test]
    fn test_clamp_scalar() {
        assert_eq!(clamp_scalar(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp_scalar(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp_scalar(f32::NAN, 0.25, 1.0), 0.25);
    }
}
