//! Exact-size resampling.

use crate::error::EditError;
use crate::picture::{FilterType, Picture};
use crate::prompt::{ask_in_range, IntegerPrompt, ParameterSource};

/// Smallest accepted target edge in pixels.
pub const MIN_EDGE: u32 = 10;
/// Largest accepted target edge in pixels.
pub const MAX_EDGE: u32 = 5000;

/// Target dimensions for a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeParams {
    pub width: u32,
    pub height: u32,
}

impl ResizeParams {
    /// Collect width and then height from `source`.
    ///
    /// Returns `Ok(None)` if either prompt is cancelled.
    pub fn prompt(source: &mut dyn ParameterSource) -> Result<Option<Self>, EditError> {
        let Some(width) = ask_in_range(
            source,
            &IntegerPrompt::new("Resize", "Width", MIN_EDGE as i64, MAX_EDGE as i64),
        )?
        else {
            return Ok(None);
        };
        let Some(height) = ask_in_range(
            source,
            &IntegerPrompt::new("Resize", "Height", MIN_EDGE as i64, MAX_EDGE as i64),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Self {
            width: width as u32,
            height: height as u32,
        }))
    }
}

/// Resample an image to exactly `width` x `height`.
///
/// # Errors
///
/// Returns `EditError::Processing` for zero target dimensions or a pixel
/// buffer that does not match the image dimensions.
pub fn resize_exact(
    image: &Picture,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Picture, EditError> {
    if width == 0 || height == 0 {
        return Err(EditError::Processing(format!(
            "cannot resize to {width}x{height}"
        )));
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| EditError::Processing("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(Picture::from_rgb_image(resized))
}
