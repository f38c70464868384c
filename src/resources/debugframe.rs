//! Per-frame resolved debug decisions.
//!
//! Written once per frame by
//! [`resolve_debug_frame_state`](crate::systems::debugsettings::resolve_debug_frame_state)
//! and read by the frame setup code to decide whether to branch into debug
//! paths, skip post-processing, skip lighting, or override the clear color.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::resources::debugsettings::ClearColor;

/// Answers to the four debug queries for the current frame.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct DebugFrameState {
    /// Number of frames resolved so far.
    pub frame: u64,
    pub any_settings_active: bool,
    pub post_processing_allowed: bool,
    pub lighting_active: bool,
    /// Background color forced by a debug view, if any.
    pub clear_color: Option<ClearColor>,
}

impl Default for DebugFrameState {
    fn default() -> Self {
        Self {
            frame: 0,
            any_settings_active: false,
            post_processing_allowed: true,
            lighting_active: true,
            clear_color: None,
        }
    }
}
