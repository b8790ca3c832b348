//! Editor settings.

use serde::{Deserialize, Serialize};

use crate::display::DisplayBounds;
use crate::ops::CircleStyle;
use crate::picture::FilterType;

/// Settings for an editing session.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Area the current picture is fitted into for display.
    pub display: DisplayBounds,
    /// Index of the capture device used by the camera action.
    pub camera_index: u32,
    /// Interpolation used by the resize operation.
    pub resize_filter: FilterType,
    /// Interpolation used when scaling for display.
    pub preview_filter: FilterType,
    /// Stroke used for circle annotations.
    pub circle: CircleStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            display: DisplayBounds::default(),
            camera_index: 0,
            resize_filter: FilterType::Bilinear,
            preview_filter: FilterType::Bilinear,
            circle: CircleStyle::default(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(mut self, max_width: u32, max_height: u32) -> Self {
        self.display = DisplayBounds::new(max_width, max_height);
        self
    }

    pub fn with_camera_index(mut self, index: u32) -> Self {
        self.camera_index = index;
        self
    }
}
