//! Debug display settings and their aggregation.
//!
//! The rendering pipeline asks four questions once per frame: is any debug
//! override active, may post-processing run, is lighting active, and should
//! the background be cleared to a fixed color. Each debug subsystem
//! (material, rendering, lighting, validation) answers those questions for
//! itself through the [`DebugSettings`] trait; [`DebugDisplaySettings`]
//! combines the answers with fixed precedence rules.
//!
//! # Architecture
//!
//! - [`modes`] - mode enumerations and lighting feature flags
//! - [`fields`] - generic field view for UI binding and config loading
//! - [`material`], [`rendering`], [`lighting`], [`validation`] - the four
//!   canonical subsystems
//! - [`aggregator`] - the registry and resolution policy
//!
//! # Example
//!
//! ```
//! use debugview::resources::debugsettings::{DebugDisplaySettings, RenderingSettings, SceneOverrideMode, ClearColor};
//!
//! let mut settings = DebugDisplaySettings::new();
//! settings.edit::<RenderingSettings, _>(|r| r.set_scene_override_mode(SceneOverrideMode::Overdraw));
//!
//! assert!(settings.are_any_settings_active());
//! assert!(!settings.is_lighting_active());
//! assert_eq!(settings.try_get_screen_clear_color(), Ok(Some(ClearColor::BLACK)));
//! ```

mod aggregator;
mod color;
mod error;
pub mod fields;
mod lighting;
mod material;
pub mod modes;
mod rendering;
mod validation;

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

pub use aggregator::{DebugDisplaySettings, PanelSnapshot, RevalidateHook};
pub use color::ClearColor;
pub use error::DebugSettingsError;
pub use fields::{FieldValue, FieldView, SettingField};
pub use lighting::LightingSettings;
pub use material::MaterialSettings;
pub use modes::*;
pub use rendering::RenderingSettings;
pub use validation::ValidationSettings;

/// Shared, single-threaded handle to a concrete subsystem.
pub type Shared<T> = Rc<RefCell<T>>;

/// Shared handle to any subsystem, as stored in the registry.
pub type SharedSetting = Rc<RefCell<dyn DebugSettings>>;

/// Wrap a subsystem in a [`Shared`] handle.
pub fn shared<T: DebugSettings>(setting: T) -> Shared<T> {
    Rc::new(RefCell::new(setting))
}

/// One independently toggleable cluster of debug settings.
///
/// All queries are pure functions of the current state. Setters on the
/// concrete types take effect immediately for subsequent queries.
pub trait DebugSettings: Any {
    /// Display name of the panel this subsystem builds in the debug UI.
    fn panel_name(&self) -> &'static str;

    /// True iff any mode differs from its "no override" value or any
    /// toggle differs from its declared default.
    fn are_any_settings_active(&self) -> bool;

    /// False while the subsystem shows something post effects would corrupt.
    fn is_post_processing_allowed(&self) -> bool;

    /// False while the subsystem's view bypasses normal lighting.
    fn is_lighting_active(&self) -> bool;

    /// Fixed background color mandated by the current view, if any.
    fn try_get_screen_clear_color(&self) -> Result<Option<ClearColor>, DebugSettingsError> {
        Ok(None)
    }

    /// Current value of every user-facing field.
    fn fields(&self) -> Vec<SettingField> {
        Vec::new()
    }

    /// Write one field by name.
    ///
    /// Returns `Ok(false)` when no field of that name accepts a value of that
    /// shape, and `InvalidState` when the raw index or bits are outside the
    /// field's enumeration.
    fn set_field(&mut self, _name: &str, _value: FieldValue) -> Result<bool, DebugSettingsError> {
        Ok(false)
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
