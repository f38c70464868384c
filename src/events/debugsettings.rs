//! Events and observers for debug settings lifecycle.
//!
//! Triggering a [`ResetDebugSettingsEvent`] restores every subsystem to its
//! defaults. Every edit, reset included, ends in a
//! [`DebugSettingsChangedEvent`] which bumps the [`DebugSettingsRevision`].
use crate::resources::debugsettings::DebugDisplaySettings;
use crate::resources::revalidation::DebugSettingsRevision;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Panel name carried by the change event emitted after a reset.
pub const ALL_PANELS: &str = "All";

/// Event used to reset the debug display settings to their defaults.
///
/// This carries no data; subsystems added on top of the canonical four are
/// dropped.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetDebugSettingsEvent {}

/// Event emitted after a debug settings panel was edited.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugSettingsChangedEvent {
    /// Panel name of the edited subsystem, or [`ALL_PANELS`] after a reset.
    pub panel: &'static str,
}

/// Observer that resets the [`DebugDisplaySettings`] non-send resource.
pub fn reset_debug_settings_observer(
    _trigger: On<ResetDebugSettingsEvent>,
    mut settings: NonSendMut<DebugDisplaySettings>,
    mut commands: Commands,
) {
    settings.reset();
    commands.trigger(DebugSettingsChangedEvent { panel: ALL_PANELS });
}

/// Observer that records a change in the [`DebugSettingsRevision`] resource.
pub fn debug_settings_changed_observer(
    trigger: On<DebugSettingsChangedEvent>,
    mut revision: ResMut<DebugSettingsRevision>,
) {
    let panel = trigger.event().panel;
    revision.bump(panel);
    info!(
        "Debug settings changed: {} (revision {})",
        panel, revision.revision
    );
}
