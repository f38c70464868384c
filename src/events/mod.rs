//! Event types and observers.
//!
//! Submodules:
//! - [`debugsettings`] – reset requests and change notifications for the
//!   debug display settings
pub mod debugsettings;
