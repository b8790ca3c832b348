//! Parsing of shell command lines.

use std::path::PathBuf;

use picedit_core::{Action, Channel};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An editor action.
    Edit(Action),
    /// Write the last shown picture to a PNG file.
    Show(PathBuf),
    /// Print the size of the original and current pictures.
    Info,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  load <path>     open an image file
  camera          take a picture with the camera
  red|green|blue  show a single color channel
  resize          resize to a new width and height
  brightness      darken by a percentage
  circle          draw a red circle
  reset           go back to the original
  show <path>     save the displayed preview as PNG
  info            print image sizes
  help            print this text
  quit            leave";

/// Parse a command line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "load" | "open" => Command::Edit(Action::LoadFile(require_path(word, rest)?)),
        "camera" | "capture" => Command::Edit(Action::Capture),
        "red" | "green" | "blue" => {
            let channel: Channel = word.parse()?;
            Command::Edit(Action::Isolate(channel))
        }
        "resize" | "size" => Command::Edit(Action::Resize),
        "brightness" | "darken" => Command::Edit(Action::ReduceBrightness),
        "circle" => Command::Edit(Action::DrawCircle),
        "reset" => Command::Edit(Action::Reset),
        "show" | "save" => Command::Show(require_path(word, rest)?),
        "info" => Command::Info,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };

    Ok(Some(command))
}

fn require_path(word: &str, rest: &str) -> Result<PathBuf, String> {
    if rest.is_empty() {
        Err(format!("usage: {word} <path>"))
    } else {
        Ok(PathBuf::from(rest))
    }
}
