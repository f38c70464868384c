//! Registry of debug subsystems and the policy combining their answers.
//!
//! Resolution rules:
//! - any settings active: OR over every registered subsystem
//! - lighting active: AND over every registered subsystem
//! - post-processing allowed: decided by the rendering subsystem's master
//!   mode; `Auto` defers to an AND over every registered subsystem
//! - clear color: first answer in the fixed order Material, Rendering,
//!   Lighting, Validation

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::resources::debugsettings::fields::{FieldValue, SettingField};
use crate::resources::debugsettings::modes::PostProcessingMode;
use crate::resources::debugsettings::{
    ClearColor, DebugSettings, DebugSettingsError, LightingSettings, MaterialSettings,
    RenderingSettings, Shared, SharedSetting, ValidationSettings, shared,
};

/// Callback run after a subsystem is edited through the aggregator.
///
/// Receives the panel name of the edited subsystem.
pub type RevalidateHook = Box<dyn FnMut(&'static str)>;

/// Registry identity of a shared setting: the address of its allocation.
fn setting_id<T: ?Sized>(setting: &Rc<RefCell<T>>) -> usize {
    Rc::as_ptr(setting).cast::<()>() as usize
}

/// Serializable view of one registered subsystem.
#[derive(Debug, Clone, Serialize)]
pub struct PanelSnapshot {
    pub name: &'static str,
    pub active: bool,
    pub fields: Vec<SettingField>,
}

/// The debug display settings context.
///
/// Owns the registry of subsystems and answers the pipeline-wide debug
/// queries. The handles are reference counted without synchronization, so
/// this type is `!Send`: a single owner (the main thread) performs all reads
/// and writes, and edits happen between queries.
pub struct DebugDisplaySettings {
    material: SharedSetting,
    rendering: Shared<RenderingSettings>,
    lighting: SharedSetting,
    validation: SharedSetting,
    registry: FxHashMap<usize, SharedSetting>,
    hooks: Vec<RevalidateHook>,
}

impl Default for DebugDisplaySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugDisplaySettings {
    /// Create a fresh context holding the four canonical subsystems at their
    /// defaults. Equivalent to the state after [`reset`](Self::reset).
    pub fn new() -> Self {
        Self::from_parts(
            shared(MaterialSettings::new()),
            shared(RenderingSettings::new()),
            shared(LightingSettings::new()),
            shared(ValidationSettings::new()),
        )
    }

    /// Create a context from caller-supplied subsystems for the four
    /// canonical slots, in clear color priority order. All four are
    /// registered.
    pub fn from_parts(
        material: SharedSetting,
        rendering: Shared<RenderingSettings>,
        lighting: SharedSetting,
        validation: SharedSetting,
    ) -> Self {
        let mut settings = Self {
            material,
            rendering,
            lighting,
            validation,
            registry: FxHashMap::default(),
            hooks: Vec::new(),
        };
        settings.register_canonical();
        settings
    }

    /// Drop every registered subsystem and register fresh canonical ones.
    ///
    /// Revalidation hooks are kept; they belong to the caller.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.material = shared(MaterialSettings::new());
        self.rendering = shared(RenderingSettings::new());
        self.lighting = shared(LightingSettings::new());
        self.validation = shared(ValidationSettings::new());
        self.register_canonical();
        info!("Debug display settings reset to defaults");
    }

    /// Register a subsystem and hand the same handle back.
    ///
    /// Registering an instance that is already registered is a no-op.
    pub fn add<T: DebugSettings>(&mut self, setting: Shared<T>) -> Shared<T> {
        let erased: SharedSetting = setting.clone();
        self.insert(erased);
        setting
    }

    /// Whether this exact instance is registered.
    pub fn contains<T: DebugSettings + ?Sized>(&self, setting: &Rc<RefCell<T>>) -> bool {
        self.registry.contains_key(&setting_id(setting))
    }

    /// Number of registered subsystems.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if no subsystem is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Visit every registered subsystem once, in unspecified order.
    ///
    /// The visitor must not hold a mutable borrow of one subsystem while
    /// querying this context.
    pub fn for_each(&self, mut visit: impl FnMut(&SharedSetting)) {
        for setting in self.registry.values() {
            visit(setting);
        }
    }

    /// Handle to the rendering subsystem, which owns the post-processing
    /// master mode. Writes through this handle do not run revalidation
    /// hooks; prefer [`edit`](Self::edit).
    pub fn rendering(&self) -> &Shared<RenderingSettings> {
        &self.rendering
    }

    /// The post-processing master mode, read from the rendering subsystem.
    pub fn post_processing_mode(&self) -> PostProcessingMode {
        self.rendering.borrow().post_processing_mode()
    }

    /// True if any registered subsystem has a debug override active.
    pub fn are_any_settings_active(&self) -> bool {
        self.registry
            .values()
            .any(|s| s.borrow().are_any_settings_active())
    }

    /// True only if every registered subsystem agrees lighting is active.
    pub fn is_lighting_active(&self) -> bool {
        self.registry.values().all(|s| s.borrow().is_lighting_active())
    }

    /// Whether post-processing may run this frame.
    ///
    /// `Disabled` and `Enabled` bypass the subsystems entirely. `Auto`
    /// requires every registered subsystem to allow it.
    pub fn is_post_processing_allowed(&self) -> bool {
        match self.post_processing_mode() {
            PostProcessingMode::Disabled => false,
            PostProcessingMode::Enabled => true,
            PostProcessingMode::Auto => self
                .registry
                .values()
                .all(|s| s.borrow().is_post_processing_allowed()),
        }
    }

    /// Background color forced by the current debug views, if any.
    ///
    /// Only the four canonical slots are consulted, in the order Material,
    /// Rendering, Lighting, Validation. The first one that answers wins and
    /// later slots are not queried.
    pub fn try_get_screen_clear_color(&self) -> Result<Option<ClearColor>, DebugSettingsError> {
        for setting in self.priority_order() {
            if let Some(color) = setting.borrow().try_get_screen_clear_color()? {
                return Ok(Some(color));
            }
        }
        Ok(None)
    }

    /// Register a callback run after every edit made through this context.
    pub fn on_revalidate(&mut self, hook: impl FnMut(&'static str) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Read the first registered subsystem of type `T`.
    pub fn read<T: DebugSettings, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let setting = self.find::<T>()?;
        let guard = setting.borrow();
        let result = guard.as_any().downcast_ref::<T>().map(f);
        result
    }

    /// Edit the first registered subsystem of type `T`, then run the
    /// revalidation hooks.
    ///
    /// Canonical slots are searched before other registered subsystems.
    pub fn edit<T: DebugSettings, R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let setting = self.find::<T>()?;
        let (result, panel) = {
            let mut guard = setting.borrow_mut();
            let panel = guard.panel_name();
            let result = guard.as_any_mut().downcast_mut::<T>().map(f)?;
            (result, panel)
        };
        self.revalidate(panel);
        Some(result)
    }

    /// Write one field of the registered subsystem whose panel is named
    /// `panel`, then run the revalidation hooks.
    ///
    /// Returns `Ok(false)` if no such panel or field exists.
    pub fn set_field(
        &mut self,
        panel: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<bool, DebugSettingsError> {
        let Some(setting) = self.find_panel(panel) else {
            return Ok(false);
        };
        let (applied, panel) = {
            let mut guard = setting.borrow_mut();
            (guard.set_field(field, value)?, guard.panel_name())
        };
        if applied {
            self.revalidate(panel);
        }
        Ok(applied)
    }

    /// Write several fields of the panel named `panel`, then run the
    /// revalidation hooks once.
    ///
    /// Bounds of a min/max pair are clamped against each other, so the
    /// values are written twice: the second pass lands a min that the first
    /// pass clamped against the old max. Returns the number of fields that
    /// accepted their value.
    pub fn set_fields(
        &mut self,
        panel: &str,
        values: &[(&str, FieldValue)],
    ) -> Result<usize, DebugSettingsError> {
        let Some(setting) = self.find_panel(panel) else {
            return Ok(0);
        };
        let (applied, panel) = {
            let mut guard = setting.borrow_mut();
            let mut applied = 0;
            for &(field, value) in values {
                if guard.set_field(field, value)? {
                    applied += 1;
                }
            }
            for &(field, value) in values {
                guard.set_field(field, value)?;
            }
            (applied, guard.panel_name())
        };
        if applied > 0 {
            self.revalidate(panel);
        }
        Ok(applied)
    }

    /// Fields of every registered subsystem: canonical slots first in
    /// priority order, then the rest sorted by panel name.
    pub fn panel_snapshots(&self) -> Vec<PanelSnapshot> {
        let canonical = self.priority_order();
        let mut extra: Vec<SharedSetting> = self
            .registry
            .values()
            .filter(|s| !canonical.iter().any(|c| Rc::ptr_eq(c, s)))
            .cloned()
            .collect();
        extra.sort_by_key(|s| s.borrow().panel_name());

        canonical
            .iter()
            .chain(extra.iter())
            .map(|s| {
                let s = s.borrow();
                PanelSnapshot {
                    name: s.panel_name(),
                    active: s.are_any_settings_active(),
                    fields: s.fields(),
                }
            })
            .collect()
    }

    fn priority_order(&self) -> [SharedSetting; 4] {
        let rendering: SharedSetting = self.rendering.clone();
        [
            self.material.clone(),
            rendering,
            self.lighting.clone(),
            self.validation.clone(),
        ]
    }

    fn register_canonical(&mut self) {
        for setting in self.priority_order() {
            self.insert(setting);
        }
    }

    fn insert(&mut self, setting: SharedSetting) {
        let id = setting_id(&setting);
        if self.registry.insert(id, setting).is_none() {
            debug!("Registered debug settings panel #{}", self.registry.len());
        }
    }

    fn find<T: DebugSettings>(&self) -> Option<SharedSetting> {
        self.priority_order()
            .into_iter()
            .chain(self.registry.values().cloned())
            .find(|s| s.borrow().as_any().is::<T>())
    }

    fn find_panel(&self, panel: &str) -> Option<SharedSetting> {
        self.priority_order()
            .into_iter()
            .chain(self.registry.values().cloned())
            .find(|s| s.borrow().panel_name().eq_ignore_ascii_case(panel))
    }

    fn revalidate(&mut self, panel: &'static str) {
        debug!("Revalidating after change to {panel} settings");
        for hook in &mut self.hooks {
            hook(panel);
        }
    }
}
