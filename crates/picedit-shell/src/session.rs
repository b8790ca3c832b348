//! The interactive read-eval loop.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use picedit_core::{CaptureDevice, EditError, Editor, Feedback, Picture, Surface};

use crate::commands::{self, Command, HELP};
use crate::terminal::Terminal;

/// Runs commands until `quit` or end of input.
pub struct Session<'a, R, W> {
    editor: Editor,
    terminal: Terminal<R, W>,
    camera: &'a mut dyn CaptureDevice,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(editor: Editor, terminal: Terminal<R, W>, camera: &'a mut dyn CaptureDevice) -> Self {
        Self {
            editor,
            terminal,
            camera,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn terminal(&self) -> &Terminal<R, W> {
        &self.terminal
    }

    pub fn run(&mut self) {
        self.terminal.say(format_args!("picedit - type 'help' for commands"));
        while let Some(line) = self.terminal.read_line("> ") {
            match commands::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command),
                Ok(None) => {}
                Err(message) => self.terminal.notify(&Feedback::warning(message)),
            }
        }
        log::debug!("session finished");
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Edit(action) => {
                self.editor
                    .perform(&action, &mut self.terminal, &mut *self.camera);
            }
            Command::Show(path) => {
                let Some(view) = self.terminal.last_view() else {
                    self.terminal.notify(&Feedback::from(&EditError::NoImageLoaded));
                    return;
                };
                let feedback = match save_view(view, &path) {
                    Ok(()) => Feedback::info(format!("Saved preview to {}", path.display())),
                    Err(e) => Feedback::error(format!("{e:#}")),
                };
                self.terminal.notify(&feedback);
            }
            Command::Info => self.info(),
            Command::Help => self.terminal.say(format_args!("{HELP}")),
            Command::Quit => {}
        }
    }

    fn info(&mut self) {
        let (Some(original), Some(current)) = (self.editor.original(), self.editor.current())
        else {
            self.terminal.notify(&Feedback::from(&EditError::NoImageLoaded));
            return;
        };
        let message = format!(
            "original {}x{}, current {}x{}",
            original.width, original.height, current.width, current.height
        );
        self.terminal.notify(&Feedback::info(message));
    }
}

fn save_view(view: &Picture, path: &Path) -> anyhow::Result<()> {
    let rgb = view
        .to_rgb_image()
        .context("preview buffer does not match its dimensions")?;
    rgb.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
