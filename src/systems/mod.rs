//! Debug settings systems.
//!
//! Submodules overview
//! - [`debugconfig`] – apply [`crate::resources::debugconfig::DebugConfig`] changes
//! - [`debugsettings`] – install the settings context and resolve per-frame state

pub mod debugconfig;
pub mod debugsettings;
