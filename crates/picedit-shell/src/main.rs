//! Picedit - a small interactive image editor for the terminal.

mod commands;
mod session;
mod terminal;

use std::io;

use picedit_core::{CaptureDevice, Editor, EditorConfig};

use crate::session::Session;
use crate::terminal::Terminal;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = EditorConfig::default();
    log::info!(
        "starting picedit (display {}x{}, camera {})",
        config.display.max_width,
        config.display.max_height,
        config.camera_index
    );

    let mut camera = camera();
    let stdin = io::stdin();
    let terminal = Terminal::new(stdin.lock(), io::stdout());

    Session::new(Editor::new(config), terminal, camera.as_mut()).run();
    Ok(())
}

#[cfg(feature = "webcam")]
fn camera() -> Box<dyn CaptureDevice> {
    Box::new(picedit_core::camera::NativeCamera::new())
}

#[cfg(not(feature = "webcam"))]
fn camera() -> Box<dyn CaptureDevice> {
    Box::new(picedit_core::NoCaptureDevice)
}
