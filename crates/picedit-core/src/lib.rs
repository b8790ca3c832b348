//! Picedit Core - interactive image editing model
//!
//! This crate holds everything behind the editor's buttons: the session's
//! original and current pictures, the canned edit operations, parameter
//! prompting, camera capture and fitting pictures into the display area.
//!
//! # Module Structure
//!
//! - `store` - The original/current picture pair
//! - `ops` - Channel isolation, resize, brightness reduction, circle annotation
//! - `prompt` - Range-checked parameter collection
//! - `camera` - Scoped single-frame capture
//! - `display` - Fit-to-bounds rendering and user feedback
//! - `editor` - Runs one user action at a time against the store

pub mod camera;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod ops;
pub mod picture;
pub mod prompt;
pub mod source;
pub mod store;

pub use camera::{capture_frame, CaptureDevice, NoCaptureDevice};
pub use config::EditorConfig;
pub use display::{render, DisplayBounds, Feedback, Surface};
pub use editor::{Action, Editor, Outcome};
pub use error::{EditError, Severity};
pub use ops::Channel;
pub use picture::{FilterType, Picture};
pub use prompt::{IntegerPrompt, ParameterSource, ScriptedParameters};
pub use store::ImageStore;
