//! Line input for the game.
//!
//! Everything the game asks of the player arrives through an [`InputSource`]:
//! a `rustyline` editor when playing in a terminal, or a [`ScriptedInput`]
//! replaying fixed lines. Numbered choices go through [`prompt_selection`],
//! which keeps asking until it gets a usable answer.

use std::collections::VecDeque;

use anyhow::Result;
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::style::GameStyle;
use crate::view::{View, ViewItem};

/// Outcome of reading a line from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything the game can ask for a line of input.
pub trait InputSource {
    /// Show `prompt` and wait for one line.
    ///
    /// # Errors
    /// Returns an error if the underlying reader fails.
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent>;
}

/// Terminal input backed by a `rustyline` editor with in-memory history.
pub struct InputManager {
    editor: DefaultEditor,
}

impl InputManager {
    /// # Errors
    /// Returns an error if the terminal editor cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl InputSource for InputManager {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        let prompt = prompt.prompt_style().to_string();
        match self.editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    warn!("failed to append to history: {err}");
                }
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(err) => Err(err.into()),
        }
    }
}

/// Replays a fixed sequence of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<InputEvent> {
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}

/// Why a numbered choice was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{choice} is not between 1 and {max}")]
    OutOfRange { choice: usize, max: usize },
}

/// Convert a 1-based choice among `len` options into a 0-based index.
///
/// # Errors
/// Fails if `text` is not a non-negative integer or falls outside `1..=len`.
pub fn parse_selection(text: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = text.trim();
    let choice = trimmed
        .parse::<usize>()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if choice == 0 || choice > len {
        return Err(SelectionError::OutOfRange { choice, max: len });
    }
    Ok(choice - 1)
}

/// Returns true for the single-letter quit signal, in either case.
pub fn is_quit(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("q")
}

/// Ask for a numbered choice until a valid one arrives.
///
/// Pending view output is flushed before each read. Returns `Ok(None)` when
/// the player quits (only if `allow_quit`), interrupts, or input runs out.
///
/// # Errors
/// Propagates failures from the input source.
pub fn prompt_selection(
    input: &mut dyn InputSource,
    view: &mut View,
    prompt: &str,
    len: usize,
    allow_quit: bool,
) -> Result<Option<usize>> {
    loop {
        view.flush();
        let line = match input.read_line(prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => {
                info!("selection prompt abandoned");
                return Ok(None);
            },
        };
        if allow_quit && is_quit(&line) {
            return Ok(None);
        }
        match parse_selection(&line, len) {
            Ok(index) => return Ok(Some(index)),
            Err(err) => {
                warn!("rejected selection: {err}");
                view.push(ViewItem::InvalidChoice(format!("Invalid choice, try again. ({err})")));
            },
        }
    }
}
