//! Debug settings frame systems.
//!
//! [`install_debug_settings`] wires the settings context, its resources and
//! observers into a world. [`debug_frame_schedule`] holds the systems that
//! run once per frame, before any rendering decision is taken:
//!
//! 1. [`apply_debug_config_changes`] – push changed config values
//! 2. [`flush_revalidation_queue`] – turn queued edits into change events
//! 3. [`resolve_debug_frame_state`] – answer the four debug queries
//!
//! [`apply_debug_config_changes`]: crate::systems::debugconfig::apply_debug_config_changes

use bevy_ecs::prelude::*;
use log::{debug, error};

use crate::events::debugsettings::{
    DebugSettingsChangedEvent, debug_settings_changed_observer, reset_debug_settings_observer,
};
use crate::resources::debugframe::DebugFrameState;
use crate::resources::debugsettings::DebugDisplaySettings;
use crate::resources::revalidation::{DebugSettingsRevision, RevalidationQueue};
use crate::systems::debugconfig::apply_debug_config_changes;

/// Insert `settings` and everything the frame systems need into `world`.
///
/// A hook feeding a [`RevalidationQueue`] is registered on `settings`, so
/// every edit made through the context surfaces as a
/// [`DebugSettingsChangedEvent`] on the next flush.
pub fn install_debug_settings(world: &mut World, mut settings: DebugDisplaySettings) {
    let queue = RevalidationQueue::new();
    settings.on_revalidate(queue.hook());

    world.insert_non_send_resource(settings);
    world.insert_non_send_resource(queue);
    world.insert_resource(DebugFrameState::default());
    world.insert_resource(DebugSettingsRevision::default());

    world.spawn(Observer::new(reset_debug_settings_observer));
    world.spawn(Observer::new(debug_settings_changed_observer));
    world.flush();
}

/// Schedule running the per-frame debug systems in order.
pub fn debug_frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            apply_debug_config_changes,
            flush_revalidation_queue,
            resolve_debug_frame_state,
        )
            .chain(),
    );
    schedule
}

/// Trigger one [`DebugSettingsChangedEvent`] per queued edit.
pub fn flush_revalidation_queue(queue: NonSend<RevalidationQueue>, mut commands: Commands) {
    for panel in queue.drain() {
        commands.trigger(DebugSettingsChangedEvent { panel });
    }
}

/// Resolve the debug queries for this frame into [`DebugFrameState`].
///
/// An invalid stored mode is a programming error: it is logged, debug builds
/// panic, and release builds keep the previous frame's state.
pub fn resolve_debug_frame_state(
    settings: NonSend<DebugDisplaySettings>,
    mut state: ResMut<DebugFrameState>,
) {
    let clear_color = match settings.try_get_screen_clear_color() {
        Ok(color) => color,
        Err(e) => {
            error!("Failed to resolve debug clear color: {}", e);
            if cfg!(debug_assertions) {
                panic!("debug settings in invalid state: {e}");
            }
            return;
        }
    };

    state.frame += 1;
    state.any_settings_active = settings.are_any_settings_active();
    state.post_processing_allowed = settings.is_post_processing_allowed();
    state.lighting_active = settings.is_lighting_active();
    state.clear_color = clear_color;

    if state.any_settings_active {
        debug!(
            "Frame {}: post-processing {}, lighting {}, clear color {:?}",
            state.frame,
            if state.post_processing_allowed { "on" } else { "off" },
            if state.lighting_active { "on" } else { "off" },
            state.clear_color
        );
    }
}
