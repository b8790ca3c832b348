//! The editing session controller.
//!
//! [`Editor`] owns the session's [`ImageStore`] and runs one user action at a
//! time to completion: check that a source picture exists, collect any
//! parameters, apply the operation to the original picture, store the result
//! as the current picture and hand a fitted copy to the UI surface.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::camera::{capture_frame, CaptureDevice};
use crate::config::EditorConfig;
use crate::display::{render, Feedback, Surface};
use crate::error::EditError;
use crate::ops::{
    brightness, draw_circle, isolate_channel, reduce_brightness, resize, resize_exact,
    BrightnessParams, Channel, CircleParams, ResizeParams,
};
use crate::picture::Picture;
use crate::prompt::ParameterSource;
use crate::source;
use crate::store::ImageStore;

/// A user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadFile(PathBuf),
    Capture,
    Isolate(Channel),
    Resize,
    ReduceBrightness,
    DrawCircle,
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::LoadFile(path) => write!(f, "load {}", path.display()),
            Action::Capture => f.write_str("capture"),
            Action::Isolate(channel) => write!(f, "{channel} channel"),
            Action::Resize => f.write_str("resize"),
            Action::ReduceBrightness => f.write_str("brightness"),
            Action::DrawCircle => f.write_str("circle"),
            Action::Reset => f.write_str("reset"),
        }
    }
}

/// Result of an action that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The current picture was replaced. Carries a short summary.
    Applied(String),
    /// A prompt was dismissed; nothing changed.
    Cancelled,
}

/// An editing session.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    store: ImageStore,
    config: EditorConfig,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            store: ImageStore::new(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn original(&self) -> Option<&Picture> {
        self.store.original()
    }

    pub fn current(&self) -> Option<&Picture> {
        self.store.current()
    }

    // ===== Sources =====

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), EditError> {
        let picture = source::load_file(path)?;
        self.store.set_original(picture);
        Ok(())
    }

    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), EditError> {
        let picture = source::load_bytes(bytes)?;
        self.store.set_original(picture);
        Ok(())
    }

    /// Capture one frame from the configured camera and make it the original.
    pub fn capture(&mut self, device: &mut dyn CaptureDevice) -> Result<(), EditError> {
        let frame = capture_frame(device, self.config.camera_index)?;
        self.store.set_original(frame);
        Ok(())
    }

    // ===== Operations with known parameters =====

    pub fn isolate_channel(&mut self, channel: Channel) -> Result<(), EditError> {
        let out = isolate_channel(self.store.require_original()?, channel);
        log::debug!("isolated {channel} channel");
        self.store.set_current(out);
        Ok(())
    }

    pub fn apply_resize(&mut self, params: ResizeParams) -> Result<(), EditError> {
        let original = self.store.require_original()?;
        for (name, value) in [("Width", params.width), ("Height", params.height)] {
            if !(resize::MIN_EDGE..=resize::MAX_EDGE).contains(&value) {
                return Err(EditError::OutOfRange {
                    name: name.to_string(),
                    value: value as i64,
                    min: resize::MIN_EDGE as i64,
                    max: resize::MAX_EDGE as i64,
                });
            }
        }

        let out = resize_exact(
            original,
            params.width,
            params.height,
            self.config.resize_filter,
        )?;
        log::debug!(
            "resized {}x{} to {}x{}",
            original.width,
            original.height,
            out.width,
            out.height
        );
        self.store.set_current(out);
        Ok(())
    }

    pub fn apply_brightness(&mut self, params: BrightnessParams) -> Result<(), EditError> {
        let original = self.store.require_original()?;
        if !(brightness::MIN_PERCENT..=brightness::MAX_PERCENT).contains(&params.percent) {
            return Err(EditError::OutOfRange {
                name: "Percent".to_string(),
                value: params.percent as i64,
                min: brightness::MIN_PERCENT as i64,
                max: brightness::MAX_PERCENT as i64,
            });
        }

        let out = reduce_brightness(original, params);
        log::debug!("brightness reduced by {}%", params.percent);
        self.store.set_current(out);
        Ok(())
    }

    pub fn apply_circle(&mut self, params: CircleParams) -> Result<(), EditError> {
        let out = draw_circle(self.store.require_original()?, params, self.config.circle)?;
        log::debug!(
            "circle at ({}, {}) radius {}",
            params.x,
            params.y,
            params.radius
        );
        self.store.set_current(out);
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), EditError> {
        self.store.reset()?;
        log::debug!("reset to original");
        Ok(())
    }

    // ===== Operations with prompted parameters =====

    /// Prompt for a size and resize the original. The store is checked first,
    /// so nothing is asked when no picture is loaded.
    pub fn resize(&mut self, source: &mut dyn ParameterSource) -> Result<Outcome, EditError> {
        self.store.require_original()?;
        let Some(params) = ResizeParams::prompt(source)? else {
            return Ok(Outcome::Cancelled);
        };
        self.apply_resize(params)?;
        Ok(Outcome::Applied(format!(
            "Resized to {}x{}",
            params.width, params.height
        )))
    }

    pub fn reduce_brightness(
        &mut self,
        source: &mut dyn ParameterSource,
    ) -> Result<Outcome, EditError> {
        self.store.require_original()?;
        let Some(params) = BrightnessParams::prompt(source)? else {
            return Ok(Outcome::Cancelled);
        };
        self.apply_brightness(params)?;
        Ok(Outcome::Applied(format!(
            "Brightness reduced by {}%",
            params.percent
        )))
    }

    pub fn draw_circle(&mut self, source: &mut dyn ParameterSource) -> Result<Outcome, EditError> {
        let (width, height) = self.store.require_original()?.dimensions();
        let Some(params) = CircleParams::prompt(source, width, height)? else {
            return Ok(Outcome::Cancelled);
        };
        self.apply_circle(params)?;
        Ok(Outcome::Applied(format!(
            "Circle drawn at ({}, {}) with radius {}",
            params.x, params.y, params.radius
        )))
    }

    // ===== Dispatch =====

    /// Run `action` without touching any UI.
    pub fn run(
        &mut self,
        action: &Action,
        source: &mut dyn ParameterSource,
        camera: &mut dyn CaptureDevice,
    ) -> Result<Outcome, EditError> {
        match action {
            Action::LoadFile(path) => {
                self.load_file(path)?;
                Ok(self.loaded_summary("Loaded"))
            }
            Action::Capture => {
                self.capture(camera)?;
                Ok(self.loaded_summary("Captured"))
            }
            Action::Isolate(channel) => {
                self.isolate_channel(*channel)?;
                Ok(Outcome::Applied(format!("Showing {channel} channel")))
            }
            Action::Resize => self.resize(source),
            Action::ReduceBrightness => self.reduce_brightness(source),
            Action::DrawCircle => self.draw_circle(source),
            Action::Reset => {
                self.reset()?;
                Ok(Outcome::Applied("Reset to original".to_string()))
            }
        }
    }

    /// Run `action` with `ui` answering prompts, show the new current picture
    /// on `ui` and report the outcome to the user. Failures are reported,
    /// never propagated.
    pub fn perform<U>(
        &mut self,
        action: &Action,
        ui: &mut U,
        camera: &mut dyn CaptureDevice,
    ) -> Feedback
    where
        U: ParameterSource + Surface,
    {
        let feedback = match self.run(action, ui, camera) {
            Ok(Outcome::Applied(summary)) => match self.render_current() {
                Ok(Some(view)) => {
                    ui.show(&view);
                    Feedback::info(summary)
                }
                Ok(None) => Feedback::info(summary),
                Err(err) => Feedback::from(&err),
            },
            Ok(Outcome::Cancelled) => {
                Feedback::info(format!("{} cancelled", capitalize(&action.to_string())))
            }
            Err(err) => {
                log::warn!("{action} failed: {err}");
                Feedback::from(&err)
            }
        };

        ui.notify(&feedback);
        feedback
    }

    /// The current picture fitted to the configured display bounds.
    pub fn render_current(&self) -> Result<Option<Picture>, EditError> {
        self.store
            .current()
            .map(|current| render(current, self.config.display, self.config.preview_filter))
            .transpose()
    }

    fn loaded_summary(&self, verb: &str) -> Outcome {
        let (width, height) = self
            .store
            .original()
            .map(Picture::dimensions)
            .unwrap_or_default();
        Outcome::Applied(format!("{verb} {width}x{height} image"))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{FakeCamera, NoCaptureDevice};
    use crate::display::RecordingSurface;
    use crate::error::Severity;
    use crate::prompt::ScriptedParameters;

    fn gradient(width: u32, height: u32) -> Picture {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x % 256) as u8);
                pixels.push((y % 256) as u8);
                pixels.push(((x + y) % 256) as u8);
            }
        }
        Picture::new(width, height, pixels)
    }

    fn loaded(width: u32, height: u32) -> Editor {
        let mut editor = Editor::default();
        let mut cam = FakeCamera::with_frame(gradient(width, height));
        editor.capture(&mut cam).unwrap();
        editor
    }

    /// Scripted answers plus a recording surface.
    #[derive(Default)]
    struct Ui {
        params: ScriptedParameters,
        surface: RecordingSurface,
    }

    impl Ui {
        fn answering(answers: impl IntoIterator<Item = Option<i64>>) -> Self {
            Self {
                params: ScriptedParameters::new(answers),
                surface: RecordingSurface::new(),
            }
        }
    }

    impl ParameterSource for Ui {
        fn ask_integer(&mut self, prompt: &crate::prompt::IntegerPrompt) -> Option<i64> {
            self.params.ask_integer(prompt)
        }
    }

    impl Surface for Ui {
        fn show(&mut self, picture: &Picture) {
            self.surface.show(picture);
        }

        fn notify(&mut self, feedback: &Feedback) {
            self.surface.notify(feedback);
        }
    }

    // ===== No image loaded =====

    #[test]
    fn test_every_edit_warns_without_image() {
        let mut editor = Editor::default();
        let actions = [
            Action::Isolate(Channel::Red),
            Action::Resize,
            Action::ReduceBrightness,
            Action::DrawCircle,
            Action::Reset,
        ];

        for action in actions {
            let mut ui = Ui::answering([Some(100), Some(100), Some(10)]);
            let fb = editor.perform(&action, &mut ui, &mut NoCaptureDevice);

            assert_eq!(fb.severity, Severity::Warning, "{action}");
            assert_eq!(fb.message, "No image loaded");
            assert!(ui.surface.shown.is_empty());
            // No prompt is shown before the store check
            assert!(ui.params.asked().is_empty(), "{action} prompted");
            assert!(editor.current().is_none());
        }
    }

    // ===== Sources =====

    #[test]
    fn test_capture_sets_both_buffers() {
        let editor = loaded(20, 10);
        assert_eq!(editor.original(), Some(&gradient(20, 10)));
        assert_eq!(editor.current(), Some(&gradient(20, 10)));
    }

    #[test]
    fn test_capture_failures_are_distinct() {
        let mut editor = Editor::default();
        let mut ui = Ui::default();

        let fb = editor.perform(&Action::Capture, &mut ui, &mut FakeCamera::unavailable());
        assert_eq!(fb.severity, Severity::Error);
        assert!(fb.message.starts_with("Camera unavailable"));

        let mut blank = FakeCamera::blank();
        let fb = editor.perform(&Action::Capture, &mut ui, &mut blank);
        assert_eq!(fb.severity, Severity::Error);
        assert_eq!(fb.message, "Camera produced no frame");
        assert!(editor.current().is_none());
        assert_eq!((blank.acquired, blank.released), (1, 1));
        assert!(!blank.is_open());
    }

    #[test]
    fn test_failed_load_keeps_previous_image() {
        let mut editor = loaded(10, 10);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = editor.load_file(&path).unwrap_err();
        assert!(matches!(err, EditError::InvalidSource(_)));
        assert_eq!(editor.original(), Some(&gradient(10, 10)));
    }

    #[test]
    fn test_load_file_action() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        gradient(12, 8).to_rgb_image().unwrap().save(&path).unwrap();

        let mut editor = Editor::default();
        let mut ui = Ui::default();
        let fb = editor.perform(&Action::LoadFile(path), &mut ui, &mut NoCaptureDevice);

        assert_eq!(fb, Feedback::info("Loaded 12x8 image"));
        assert_eq!(editor.current(), Some(&gradient(12, 8)));
        assert_eq!(ui.surface.last_shown(), Some(&gradient(12, 8)));
    }

    // ===== Edits =====

    #[test]
    fn test_channel_isolation_reads_original() {
        let mut editor = loaded(8, 8);
        editor.isolate_channel(Channel::Red).unwrap();
        editor.isolate_channel(Channel::Green).unwrap();

        let expected = isolate_channel(&gradient(8, 8), Channel::Green);
        assert_eq!(editor.current(), Some(&expected));
    }

    #[test]
    fn test_resize_via_prompts() {
        let mut editor = loaded(40, 30);
        let mut params = ScriptedParameters::new([Some(64), Some(12)]);
        let outcome = editor.resize(&mut params).unwrap();

        assert_eq!(outcome, Outcome::Applied("Resized to 64x12".to_string()));
        assert_eq!(editor.current().unwrap().dimensions(), (64, 12));
        assert_eq!(editor.original().unwrap().dimensions(), (40, 30));
    }

    #[test]
    fn test_resize_width_five_rejected() {
        let mut editor = loaded(40, 30);
        editor.isolate_channel(Channel::Blue).unwrap();
        let before = editor.current().cloned();

        let mut params = ScriptedParameters::new([Some(5), Some(100)]);
        let err = editor.resize(&mut params).unwrap_err();

        assert!(matches!(err, EditError::OutOfRange { value: 5, .. }));
        assert_eq!(editor.current().cloned(), before);
    }

    #[test]
    fn test_resize_cancel_leaves_current() {
        let mut editor = loaded(40, 30);
        editor.isolate_channel(Channel::Blue).unwrap();
        let before = editor.current().cloned();

        let mut ui = Ui::answering([Some(100), None]);
        let fb = editor.perform(&Action::Resize, &mut ui, &mut NoCaptureDevice);

        assert_eq!(fb, Feedback::info("Resize cancelled"));
        assert_eq!(editor.current().cloned(), before);
        assert!(ui.surface.shown.is_empty());
        assert_eq!(ui.surface.last_message(), Some(&fb));
    }

    #[test]
    fn test_apply_resize_bounds() {
        let mut editor = loaded(20, 20);
        assert!(editor
            .apply_resize(ResizeParams {
                width: 9,
                height: 20
            })
            .is_err());
        assert!(editor
            .apply_resize(ResizeParams {
                width: 20,
                height: 5001
            })
            .is_err());
        editor
            .apply_resize(ResizeParams {
                width: 10,
                height: 5000,
            })
            .unwrap();
        assert_eq!(editor.current().unwrap().dimensions(), (10, 5000));
    }

    #[test]
    fn test_brightness_via_prompt() {
        let mut editor = Editor::default();
        editor.store.set_original(Picture::filled(4, 4, [200, 100, 50]));

        let mut params = ScriptedParameters::new([Some(50)]);
        editor.reduce_brightness(&mut params).unwrap();
        assert_eq!(editor.current().unwrap().pixel(0, 0), Some([100, 50, 25]));
    }

    #[test]
    fn test_edits_do_not_compound() {
        let mut editor = loaded(40, 30);
        editor
            .apply_resize(ResizeParams {
                width: 20,
                height: 20,
            })
            .unwrap();
        editor
            .apply_brightness(BrightnessParams { percent: 10 })
            .unwrap();

        // Brightness works on the original, so the resize is gone
        assert_eq!(editor.current().unwrap().dimensions(), (40, 30));
    }

    #[test]
    fn test_circle_scenarios() {
        let mut editor = loaded(100, 100);

        let mut params = ScriptedParameters::new([Some(0), Some(0), Some(1)]);
        assert!(matches!(
            editor.draw_circle(&mut params),
            Ok(Outcome::Applied(_))
        ));

        let annotated = editor.current().cloned();
        let mut params = ScriptedParameters::new([Some(100), Some(100), Some(1)]);
        assert!(matches!(
            editor.draw_circle(&mut params),
            Err(EditError::OutOfRange { .. })
        ));
        assert_eq!(editor.current().cloned(), annotated);
    }

    #[test]
    fn test_circles_are_not_cumulative() {
        let mut editor = loaded(60, 60);
        editor
            .apply_circle(CircleParams {
                x: 10,
                y: 10,
                radius: 5,
            })
            .unwrap();
        editor
            .apply_circle(CircleParams {
                x: 40,
                y: 40,
                radius: 5,
            })
            .unwrap();

        let current = editor.current().unwrap();
        // First circle is gone, second is present
        assert_eq!(current.pixel(15, 10), gradient(60, 60).pixel(15, 10));
        assert_eq!(current.pixel(45, 40), Some([255, 0, 0]));
        assert_eq!(editor.original(), Some(&gradient(60, 60)));
    }

    #[test]
    fn test_reset_after_circle() {
        let mut editor = loaded(50, 50);
        editor
            .apply_circle(CircleParams {
                x: 25,
                y: 25,
                radius: 20,
            })
            .unwrap();
        editor.reset().unwrap();
        assert_eq!(editor.current(), Some(&gradient(50, 50)));
    }

    // ===== Presentation =====

    #[test]
    fn test_render_current_fits_bounds() {
        let mut editor = Editor::default();
        editor.store.set_original(Picture::filled(1000, 500, [9, 9, 9]));

        let view = editor.render_current().unwrap().unwrap();
        assert_eq!(view.dimensions(), (800, 400));
        // The stored picture keeps its native size
        assert_eq!(editor.current().unwrap().dimensions(), (1000, 500));
    }

    #[test]
    fn test_render_current_empty() {
        assert_eq!(Editor::default().render_current().unwrap(), None);
    }

    #[test]
    fn test_perform_shows_fitted_result() {
        let config = EditorConfig::new().with_display(50, 50);
        let mut editor = Editor::new(config);
        let mut cam = FakeCamera::with_frame(gradient(100, 40));
        let mut ui = Ui::default();

        let fb = editor.perform(&Action::Capture, &mut ui, &mut cam);
        assert_eq!(fb, Feedback::info("Captured 100x40 image"));
        assert_eq!(ui.surface.last_shown().unwrap().dimensions(), (50, 20));

        editor.perform(&Action::Isolate(Channel::Green), &mut ui, &mut cam);
        assert_eq!(ui.surface.shown.len(), 2);
        assert_eq!(
            ui.surface.last_message(),
            Some(&Feedback::info("Showing green channel"))
        );
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Isolate(Channel::Blue).to_string(), "blue channel");
        assert_eq!(Action::ReduceBrightness.to_string(), "brightness");
        assert_eq!(capitalize("circle"), "Circle");
        assert_eq!(capitalize(""), "");
    }
}
