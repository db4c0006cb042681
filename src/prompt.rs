// src/prompt.rs - Line-based interactive front end

use crate::action::{self, Action, ActionKind};
use crate::editor::{self, SharedEditor};
use std::io::{self, BufRead, Write};

const ACTION_PROMPT: &str = "Enter 'write', 'delete', or 'undo': ";
const TEXT_PROMPT: &str = "Enter text to write: ";
const LENGTH_PROMPT: &str = "Enter a number of characters to delete: ";
// One retry after the first bad length
const LENGTH_ATTEMPTS: usize = 2;

/// Reads actions from `input` until EOF and applies them to the shared
/// editor. Bad input is reported on `output` and never ends the loop.
///
/// The editor lock is only taken once a full action has been read, never
/// while waiting on input.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    editor: SharedEditor,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, editor: SharedEditor) -> Self {
        Self {
            input,
            output,
            editor,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        while let Some(line) = self.ask(ACTION_PROMPT)? {
            self.handle(line.trim())?;
        }
        log::debug!("Prompt input closed");
        Ok(())
    }

    fn handle(&mut self, line: &str) -> io::Result<()> {
        let kind = match line.parse::<ActionKind>() {
            Ok(kind) => kind,
            Err(_) => return writeln!(self.output, "Invalid command."),
        };

        let action = match kind {
            ActionKind::Write => match self.ask(TEXT_PROMPT)? {
                Some(text) => Action::Write(text),
                None => return Ok(()),
            },
            ActionKind::Delete => match self.read_length()? {
                Some(count) => Action::Delete(count),
                None => return Ok(()),
            },
            ActionKind::Undo => Action::Undo,
        };

        let name = action.name();
        let outcome = {
            let mut editor = editor::lock(&self.editor);
            editor.perform(action).map(|()| editor.text())
        };
        match outcome {
            Ok(text) => writeln!(self.output, "Text after {}: {}", name, text),
            Err(err) => writeln!(self.output, "{}", err),
        }
    }

    fn read_length(&mut self) -> io::Result<Option<usize>> {
        for attempt in 1..=LENGTH_ATTEMPTS {
            let Some(line) = self.ask(LENGTH_PROMPT)? else {
                return Ok(None);
            };
            match action::parse_length(&line) {
                Ok(count) => return Ok(Some(count)),
                Err(_) if attempt < LENGTH_ATTEMPTS => writeln!(self.output, "Enter an integer")?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
        Ok(None)
    }

    /// Prints `question` and reads one line with its line ending removed.
    /// Returns `None` at EOF.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
