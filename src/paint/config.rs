//! Paint studio configuration parameters.

use serde::{Deserialize, Serialize};

/// Paint studio configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintSettings {
    /// Canvas width in pixels (default: 20).
    pub width: usize,

    /// Canvas height in pixels (default: 20).
    pub height: usize,

    /// Largest brush size (default: 5). Size 1 paints a single pixel.
    pub max_brush: usize,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            max_brush: 5,
        }
    }
}

impl PaintSettings {
    /// Set the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the largest brush.
    #[must_use]
    pub fn with_max_brush(mut self, max_brush: usize) -> Self {
        self.max_brush = max_brush;
        self
    }
}
