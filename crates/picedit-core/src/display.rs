//! Presentation adapter: fit pictures into a bounded display area and route
//! them, together with user feedback, to a UI surface.

use serde::{Deserialize, Serialize};

use crate::error::{EditError, Severity};
use crate::ops::resize_exact;
use crate::picture::{FilterType, Picture};

/// Maximum size of the area a picture is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for DisplayBounds {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 600,
        }
    }
}

impl DisplayBounds {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Whether a picture of this size can be shown unscaled.
    pub fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }

    /// Display size for a `width` x `height` picture.
    ///
    /// Pictures within bounds keep their size. Larger ones are scaled by a
    /// single factor `min(max_w / w, max_h / h)` so the aspect ratio is kept.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return (0, 0);
        }
        if self.contains(width, height) {
            return (width, height);
        }

        let scale = (self.max_width as f64 / width as f64)
            .min(self.max_height as f64 / height as f64);

        let new_width = ((width as f64 * scale).round() as u32).clamp(1, self.max_width.max(1));
        let new_height = ((height as f64 * scale).round() as u32).clamp(1, self.max_height.max(1));
        (new_width, new_height)
    }
}

/// Scale `image` to fit `bounds`.
///
/// Each call is independent; nothing is cached between renders.
pub fn render(
    image: &Picture,
    bounds: DisplayBounds,
    filter: FilterType,
) -> Result<Picture, EditError> {
    let (width, height) = bounds.fit(image.width, image.height);
    if (width, height) == image.dimensions() {
        return Ok(image.clone());
    }
    if width == 0 || height == 0 {
        return Err(EditError::Processing(format!(
            "cannot display a {}x{} image within {}x{}",
            image.width, image.height, bounds.max_width, bounds.max_height
        )));
    }
    log::debug!(
        "scaling {}x{} to {}x{} for display",
        image.width,
        image.height,
        width,
        height
    );
    resize_exact(image, width, height, filter)
}

/// A message for the user about the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub severity: Severity,
    pub message: String,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl From<&EditError> for Feedback {
    fn from(err: &EditError) -> Self {
        Self {
            severity: err.severity(),
            message: err.to_string(),
        }
    }
}

/// The UI element that shows pictures and messages.
pub trait Surface {
    /// Show an already fitted picture.
    fn show(&mut self, picture: &Picture);

    /// Show a message to the user.
    fn notify(&mut self, feedback: &Feedback);
}

/// A surface that keeps everything it is given, for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub shown: Vec<Picture>,
    pub messages: Vec<Feedback>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_shown(&self) -> Option<&Picture> {
        self.shown.last()
    }

    pub fn last_message(&self) -> Option<&Feedback> {
        self.messages.last()
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, picture: &Picture) {
        self.shown.push(picture.clone());
    }

    fn notify(&mut self, feedback: &Feedback) {
        self.messages.push(feedback.clone());
    }
}
