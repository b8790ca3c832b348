//! Edit operations.
//!
//! Every operation is a pure function of the original picture and its
//! parameters. None of them reads the previously edited result, so edits
//! never compound: applying one replaces whatever was shown before.
//!
//! # Operations
//!
//! - Channel isolation (red, green or blue)
//! - Exact resize, 10 to 5000 pixels per edge
//! - Brightness reduction by 1 to 100 percent in HSV space
//! - Circle outline annotation

pub mod brightness;
pub mod channel;
pub mod circle;
pub mod resize;

pub use brightness::{reduce_brightness, BrightnessParams};
pub use channel::{isolate_channel, Channel};
pub use circle::{draw_circle, CircleParams, CircleStyle};
pub use resize::{resize_exact, ResizeParams};
