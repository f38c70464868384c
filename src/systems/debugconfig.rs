//! Debug configuration change detection system.
//!
//! Monitors [`DebugConfig`] for changes and applies its values to the
//! [`DebugDisplaySettings`] context.

use crate::resources::debugconfig::DebugConfig;
use crate::resources::debugsettings::DebugDisplaySettings;
use bevy_ecs::prelude::*;
use log::{info, warn};

/// System that applies debug configuration changes.
///
/// Runs only when [`DebugConfig`] was added or modified. A config holding
/// any value that fails to apply is reported and nothing is applied.
///
/// # Resource Dependencies
/// - `DebugConfig` (optional) - the configuration to monitor
/// - `DebugDisplaySettings` (non-send, mutable) - the settings to update
pub fn apply_debug_config_changes(
    maybe_config: Option<Res<DebugConfig>>,
    mut settings: NonSendMut<DebugDisplaySettings>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        match config.apply_to(&mut settings) {
            Ok(applied) => info!(
                "Applied {} debug settings from {:?}",
                applied, config.config_path
            ),
            Err(e) => warn!("Invalid debug config {:?}: {}", config.config_path, e),
        }
    }
}
