//! Parameter collection for edit operations.
//!
//! Operations never talk to dialogs directly. They ask a [`ParameterSource`]
//! for one integer at a time, and [`ask_in_range`] enforces the allowed range
//! before any value reaches an operation.

use std::collections::VecDeque;

use crate::error::EditError;

/// A request for a single bounded integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerPrompt {
    /// Dialog title, usually the operation name.
    pub title: &'static str,
    /// Name of the requested value.
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
}

impl IntegerPrompt {
    pub fn new(title: &'static str, label: &'static str, min: i64, max: i64) -> Self {
        Self {
            title,
            label,
            min,
            max,
        }
    }

    #[inline]
    pub fn accepts(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Something that can answer integer prompts, such as a modal dialog.
pub trait ParameterSource {
    /// Ask for a value. `None` means the user cancelled.
    fn ask_integer(&mut self, prompt: &IntegerPrompt) -> Option<i64>;
}

/// Ask `source` for a value and reject anything outside the prompt's range.
///
/// Returns `Ok(None)` on cancellation.
pub fn ask_in_range(
    source: &mut dyn ParameterSource,
    prompt: &IntegerPrompt,
) -> Result<Option<i64>, EditError> {
    let Some(value) = source.ask_integer(prompt) else {
        log::debug!("{}: {} prompt cancelled", prompt.title, prompt.label);
        return Ok(None);
    };

    if !prompt.accepts(value) {
        log::warn!(
            "{}: rejected {} = {value} (allowed {}..={})",
            prompt.title,
            prompt.label,
            prompt.min,
            prompt.max
        );
        return Err(EditError::OutOfRange {
            name: prompt.label.to_string(),
            value,
            min: prompt.min,
            max: prompt.max,
        });
    }

    Ok(Some(value))
}

/// A queue of canned answers, for tests and scripted sessions.
///
/// Each prompt pops the next answer; an exhausted queue behaves like a
/// cancelled dialog.
#[derive(Debug, Clone, Default)]
pub struct ScriptedParameters {
    answers: VecDeque<Option<i64>>,
    asked: Vec<&'static str>,
}

impl ScriptedParameters {
    pub fn new(answers: impl IntoIterator<Item = Option<i64>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Labels of the prompts asked so far, in order.
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ParameterSource for ScriptedParameters {
    fn ask_integer(&mut self, prompt: &IntegerPrompt) -> Option<i64> {
        self.asked.push(prompt.label);
        self.answers.pop_front().flatten()
    }
}
