//! Linear RGBA color used for clear color overrides.

use serde::{Deserialize, Serialize};

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    /// Background for the overdraw visualization.
    pub const BLACK: ClearColor = ClearColor::new(0.0, 0.0, 0.0, 1.0);
    /// Background for wireframe and solid wireframe visualizations.
    pub const WIREFRAME_BACKGROUND: ClearColor = ClearColor::new(0.1, 0.1, 0.1, 1.0);

    /// Create a color from its four components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::BLACK
    }
}
