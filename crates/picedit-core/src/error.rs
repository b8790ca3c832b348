//! Error types for editor actions.

use thiserror::Error;

/// How a failure should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Success or a neutral outcome such as a cancelled prompt.
    Info,
    /// The action was refused but nothing went wrong.
    Warning,
    /// A source or device failed.
    Error,
}

/// Errors produced by editor actions.
///
/// None of these are fatal: every variant is turned into a user-visible
/// message and the session continues.
#[derive(Debug, Error)]
pub enum EditError {
    /// An edit was requested before any picture was loaded or captured.
    #[error("No image loaded")]
    NoImageLoaded,

    /// The file could not be read or decoded as an image.
    #[error("Could not load image: {0}")]
    InvalidSource(String),

    /// The capture device is missing or could not be opened.
    #[error("Camera unavailable: {0}")]
    DeviceUnavailable(String),

    /// The capture device opened but produced no usable frame.
    #[error("Camera produced no frame")]
    DeviceNoFrame,

    /// A parameter was outside its allowed range.
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Pixel buffer conversion failed.
    #[error("Image processing failed: {0}")]
    Processing(String),
}

impl EditError {
    /// Presentation severity of this error.
    pub fn severity(&self) -> Severity {
        match self {
            EditError::NoImageLoaded | EditError::OutOfRange { .. } => Severity::Warning,
            EditError::InvalidSource(_)
            | EditError::DeviceUnavailable(_)
            | EditError::DeviceNoFrame
            | EditError::Processing(_) => Severity::Error,
        }
    }
}

impl From<image::ImageError> for EditError {
    fn from(err: image::ImageError) -> Self {
        EditError::InvalidSource(err.to_string())
    }
}
