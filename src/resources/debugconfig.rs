//! Debug settings configuration resource.
//!
//! Loads the initial debug display state from an INI file. Each section
//! names a settings panel and each key one of its fields; values use the
//! same names the UI shows.
//!
//! # Configuration File Format
//!
//! ```ini
//! [material]
//! material_mode = albedo
//! albedo_max_luminance = 0.85
//!
//! [rendering]
//! scene_override_mode = wireframe
//! post_processing_mode = disabled
//! msaa_enabled = false
//!
//! [lighting]
//! lighting_mode = shadow_cascades
//! feature_flags = main_light | emission
//!
//! [validation]
//! validation_mode = highlight_outside_of_range
//! range_max = 4.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::path::PathBuf;

use crate::resources::debugsettings::{DebugDisplaySettings, FieldValue};

/// Config file used when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "./debugview.ini";

/// Debug settings configuration resource.
///
/// Holds raw `section -> key -> value` strings as read from disk. Values are
/// only interpreted when applied to a [`DebugDisplaySettings`], which is
/// done by the [`apply_debug_config_changes`] system whenever this resource
/// changes.
///
/// [`apply_debug_config_changes`]: crate::systems::debugconfig::apply_debug_config_changes
#[derive(Resource, Debug, Clone)]
pub struct DebugConfig {
    /// Raw values keyed by lowercase panel name, then field name.
    pub sections: FxHashMap<String, FxHashMap<String, String>>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugConfig {
    /// Create an empty configuration using the default file path.
    pub fn new() -> Self {
        Self {
            sections: FxHashMap::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create an empty configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Capture the current field values of every registered panel.
    pub fn from_settings(settings: &DebugDisplaySettings, path: impl Into<PathBuf>) -> Self {
        let mut config = Self::with_path(path);
        for panel in settings.panel_snapshots() {
            let section = config
                .sections
                .entry(panel.name.to_ascii_lowercase())
                .or_default();
            for field in panel.fields {
                section.insert(field.name.to_string(), field.view.to_config_string());
            }
        }
        config
    }

    /// Set a single raw value.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_ascii_lowercase())
            .or_default()
            .insert(key.to_ascii_lowercase(), value.into());
    }

    /// Get a single raw value.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(&section.to_ascii_lowercase())
            .and_then(|s| s.get(&key.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// Load configuration from the INI file.
    ///
    /// Values found in the file replace values already held; keys absent
    /// from the file are kept. Returns an error if the file cannot be read
    /// or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load debug config file: {}", e))?;

        let mut loaded = 0;
        for (section, entries) in ini.get_map_ref() {
            for (key, value) in entries {
                if let Some(value) = value {
                    self.set(section, key, value.clone());
                    loaded += 1;
                }
            }
        }

        info!(
            "Loaded {} debug settings from {:?}",
            loaded, self.config_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut ini = Ini::new();
        for (section, entries) in &self.sections {
            for (key, value) in entries {
                ini.set(section, key, Some(value.clone()));
            }
        }

        ini.write(&self.config_path)
            .map_err(|e| format!("Failed to save debug config file: {}", e))?;

        info!("Saved debug config to {:?}", self.config_path);

        Ok(())
    }

    /// Apply every held value to `settings`.
    ///
    /// Every value is parsed and checked against its field before anything
    /// is written, so an unknown section, unknown key, unparsable value or
    /// out-of-range index or flag set leaves `settings` untouched. Each panel
    /// is then written as one batch through
    /// [`DebugDisplaySettings::set_fields`], which runs the revalidation
    /// hooks once per panel. Returns the number of values applied.
    pub fn apply_to(&self, settings: &mut DebugDisplaySettings) -> Result<usize, String> {
        let snapshots = settings.panel_snapshots();

        for section in self.sections.keys() {
            if !snapshots
                .iter()
                .any(|p| p.name.eq_ignore_ascii_case(section))
            {
                return Err(format!("Unknown debug settings section [{section}]"));
            }
        }

        let mut pending: Vec<(&'static str, Vec<(&'static str, FieldValue)>)> = Vec::new();
        for panel in &snapshots {
            let Some(entries) = self.sections.get(&panel.name.to_ascii_lowercase()) else {
                continue;
            };
            for key in entries.keys() {
                if !panel.fields.iter().any(|f| f.name == key.as_str()) {
                    return Err(format!("Unknown field '{key}' in [{}]", panel.name));
                }
            }
            let mut values = Vec::with_capacity(entries.len());
            for field in &panel.fields {
                let Some(raw) = entries.get(field.name) else {
                    continue;
                };
                let value = field
                    .view
                    .parse(raw)
                    .map_err(|e| format!("[{}] {}: {e}", panel.name, field.name))?;
                field
                    .view
                    .check(value)
                    .map_err(|e| format!("[{}] {}: {e}", panel.name, field.name))?;
                debug!("[{}] {} = {}", panel.name, field.name, raw);
                values.push((field.name, value));
            }
            if !values.is_empty() {
                pending.push((panel.name, values));
            }
        }

        let mut applied = 0;
        for (panel, values) in pending {
            applied += settings
                .set_fields(panel, &values)
                .map_err(|e| format!("[{panel}] {e}"))?;
        }

        Ok(applied)
    }
}
