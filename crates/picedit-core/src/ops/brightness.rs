//! Brightness reduction in HSV space.
//!
//! Each pixel is converted to hue/saturation/value, the value channel is
//! scaled by `1 - percent / 100` and clamped, and the result is converted
//! back to RGB. Hue and saturation are untouched.

use crate::error::EditError;
use crate::picture::Picture;
use crate::prompt::{ask_in_range, IntegerPrompt, ParameterSource};

pub const MIN_PERCENT: u8 = 1;
pub const MAX_PERCENT: u8 = 100;

/// How much brightness to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessParams {
    /// Percentage of the value channel to remove (1 to 100).
    pub percent: u8,
}

impl BrightnessParams {
    /// Ask `source` for the reduction percentage.
    pub fn prompt(source: &mut dyn ParameterSource) -> Result<Option<Self>, EditError> {
        let prompt = IntegerPrompt::new(
            "Brightness",
            "Percent",
            MIN_PERCENT as i64,
            MAX_PERCENT as i64,
        );
        Ok(ask_in_range(source, &prompt)?.map(|p| Self { percent: p as u8 }))
    }

    /// Multiplier applied to the value channel.
    #[inline]
    pub fn factor(self) -> f32 {
        1.0 - self.percent.min(MAX_PERCENT) as f32 / 100.0
    }
}

/// A color in hue/saturation/value form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees (0.0 to 360.0, exclusive).
    pub h: f32,
    /// Saturation (0.0 to 1.0).
    pub s: f32,
    /// Value on the 0-255 scale.
    pub v: f32,
}

/// Convert an 8-bit RGB triple to HSV.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };

    Hsv { h, s, v: max }
}

/// Convert HSV back to an 8-bit RGB triple, clamping each component.
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> [u8; 3] {
    let v = hsv.v.clamp(0.0, 255.0);
    let c = v * hsv.s.clamp(0.0, 1.0);
    let hp = hsv.h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        (r + m).round().clamp(0.0, 255.0) as u8,
        (g + m).round().clamp(0.0, 255.0) as u8,
        (b + m).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Darken an image by scaling its HSV value channel.
pub fn reduce_brightness(image: &Picture, params: BrightnessParams) -> Picture {
    let factor = params.factor();
    let mut pixels = image.pixels.clone();

    for chunk in pixels.chunks_exact_mut(3) {
        let mut hsv = rgb_to_hsv(chunk[0], chunk[1], chunk[2]);
        hsv.v = (hsv.v * factor).clamp(0.0, 255.0);
        chunk.copy_from_slice(&hsv_to_rgb(hsv));
    }

    Picture::new(image.width, image.height, pixels)
}

/// Value channel of an RGB pixel on the 0-255 scale.
#[inline]
pub fn value_of(rgb: &[u8]) -> u8 {
    rgb[0].max(rgb[1]).max(rgb[2])
}
