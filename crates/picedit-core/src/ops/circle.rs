//! Circle outline annotation.
//!
//! Circles are drawn onto a fresh copy of the source picture, so repeated
//! annotations never accumulate.

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::picture::Picture;
use crate::prompt::{ask_in_range, IntegerPrompt, ParameterSource};

/// Stroke appearance for circle annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleStyle {
    /// Outline color as RGB.
    pub color: [u8; 3],
    /// Stroke width in pixels.
    pub thickness: u32,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            thickness: 2,
        }
    }
}

/// Center and radius of a circle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleParams {
    pub x: u32,
    pub y: u32,
    pub radius: u32,
}

impl CircleParams {
    /// Largest radius accepted for a picture of the given size.
    pub fn max_radius(width: u32, height: u32) -> u32 {
        width.min(height) / 2
    }

    /// Ask for x, y and radius, bounded by the picture's dimensions.
    pub fn prompt(
        source: &mut dyn ParameterSource,
        width: u32,
        height: u32,
    ) -> Result<Option<Self>, EditError> {
        let prompts = [
            IntegerPrompt::new("Circle", "Center X", 0, width as i64 - 1),
            IntegerPrompt::new("Circle", "Center Y", 0, height as i64 - 1),
            IntegerPrompt::new("Circle", "Radius", 1, Self::max_radius(width, height) as i64),
        ];

        let mut values = [0u32; 3];
        for (slot, prompt) in values.iter_mut().zip(prompts.iter()) {
            match ask_in_range(source, prompt)? {
                Some(v) => *slot = v as u32,
                None => return Ok(None),
            }
        }

        let [x, y, radius] = values;
        Ok(Some(Self { x, y, radius }))
    }

    /// Check these parameters against a picture of the given size.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), EditError> {
        let checks = [
            ("Center X", self.x as i64, 0, width as i64 - 1),
            ("Center Y", self.y as i64, 0, height as i64 - 1),
            (
                "Radius",
                self.radius as i64,
                1,
                Self::max_radius(width, height) as i64,
            ),
        ];
        for (name, value, min, max) in checks {
            if !(min..=max).contains(&value) {
                return Err(EditError::OutOfRange {
                    name: name.to_string(),
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Draw a circle outline on a copy of `image`.
///
/// A pixel is painted when the distance from its center to the circle's
/// center lies in `[radius + 0.5 - thickness, radius + 0.5]`, so the stroke
/// is a solid band `thickness` pixels wide whose outer edge sits on `radius`.
pub fn draw_circle(
    image: &Picture,
    params: CircleParams,
    style: CircleStyle,
) -> Result<Picture, EditError> {
    params.validate(image.width, image.height)?;
    if image.pixels.len() as u64 != image.pixel_count() * 3 {
        return Err(EditError::Processing(
            "pixel buffer does not match dimensions".to_string(),
        ));
    }

    let mut out = image.clone();
    let (outer, inner) = stroke_band(params.radius, style.thickness);
    let (outer_sq, inner_sq) = (outer * outer, inner * inner);

    let reach = params.radius as i64 + 1;
    let (cx, cy) = (params.x as i64, params.y as i64);
    let x_range = (cx - reach).max(0)..=(cx + reach).min(image.width as i64 - 1);
    let y_range = (cy - reach).max(0)..=(cy + reach).min(image.height as i64 - 1);

    for y in y_range {
        let dy = (y - cy) as f64;
        for x in x_range.clone() {
            let dx = (x - cx) as f64;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq < inner_sq || dist_sq > outer_sq {
                continue;
            }
            let idx = ((y as usize) * image.width as usize + x as usize) * 3;
            out.pixels[idx..idx + 3].copy_from_slice(&style.color);
        }
    }

    Ok(out)
}

/// Outer and inner distance limits of the stroke.
fn stroke_band(radius: u32, thickness: u32) -> (f64, f64) {
    let outer = radius as f64 + 0.5;
    let inner = (outer - thickness.max(1) as f64).max(0.0);
    (outer, inner)
}
