//! Line-based terminal UI: prompts, messages and the preview surface.

use std::fmt;
use std::io::{BufRead, Write};

use picedit_core::{Feedback, IntegerPrompt, ParameterSource, Picture, Severity, Surface};

/// A terminal that reads lines from `input` and writes to `output`.
///
/// Integer prompts behave like modal dialogs: invalid or out-of-range answers
/// are asked again, and an empty line or end of input cancels.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    last_view: Option<Picture>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            last_view: None,
        }
    }

    /// The most recently shown (already fitted) picture.
    pub fn last_view(&self) -> Option<&Picture> {
        self.last_view.as_ref()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.write(format_args!("{prompt}"));
        if let Err(e) = self.output.flush() {
            log::warn!("terminal flush failed: {e}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("terminal read failed: {e}");
                None
            }
        }
    }

    pub fn say(&mut self, args: fmt::Arguments<'_>) {
        self.write(args);
        self.write(format_args!("\n"));
    }

    fn write(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args) {
            log::warn!("terminal write failed: {e}");
        }
    }
}

impl<R: BufRead, W: Write> ParameterSource for Terminal<R, W> {
    fn ask_integer(&mut self, prompt: &IntegerPrompt) -> Option<i64> {
        let text = format!(
            "{} - {} [{}-{}]: ",
            prompt.title, prompt.label, prompt.min, prompt.max
        );
        loop {
            let answer = self.read_line(&text)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return None;
            }
            match answer.parse::<i64>() {
                Ok(value) if prompt.accepts(value) => return Some(value),
                _ => self.say(format_args!(
                    "Please enter a whole number between {} and {}.",
                    prompt.min, prompt.max
                )),
            }
        }
    }
}

impl<R: BufRead, W: Write> Surface for Terminal<R, W> {
    fn show(&mut self, picture: &Picture) {
        self.say(format_args!(
            "[preview {}x{}]",
            picture.width, picture.height
        ));
        self.last_view = Some(picture.clone());
    }

    fn notify(&mut self, feedback: &Feedback) {
        let tag = match feedback.severity {
            Severity::Info => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        self.say(format_args!("{tag}: {}", feedback.message));
    }
}
