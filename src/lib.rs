//! Debugview library.
//!
//! This module exposes the debug display settings, their ECS resources,
//! systems, and events for use in integration tests and as a reusable
//! library.

pub mod events;
pub mod resources;
pub mod shader_constants;
pub mod systems;
