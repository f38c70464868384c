//! ECS resources made available to systems.
//!
//! Overview
//! - `debugconfig` – INI-backed initial values for the debug settings
//! - `debugframe` – per-frame answers to the debug queries
//! - `debugsettings` – debug subsystems and the aggregating context
//! - `revalidation` – queue and revision counter for settings changes
pub mod debugconfig;
pub mod debugframe;
pub mod debugsettings;
pub mod revalidation;
