// src/command.rs - Reversible edit commands

use crate::buffer::Buffer;

/// A reversible edit against a [`Buffer`].
///
/// `Remove` keeps the text it took out so that its inverse does not depend
/// on the buffer's single `last_removed` slot; undoing several deletes in a
/// row restores each one correctly.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Insert(String),
    Remove {
        count: usize,
        /// Filled in by `execute`; empty until then
        removed: String,
    },
}

impl Command {
    pub fn insert(text: impl Into<String>) -> Self {
        Command::Insert(text.into())
    }

    pub fn remove(count: usize) -> Self {
        Command::Remove {
            count,
            removed: String::new(),
        }
    }

    pub fn execute(&mut self, buffer: &mut Buffer) {
        match self {
            Command::Insert(text) => buffer.write(text),
            Command::Remove { count, removed } => {
                *removed = buffer.delete(*count);
            }
        }
    }

    /// Reverses a previous `execute`; only meaningful on a command that has
    /// run, which is all `History` ever holds. A `Remove` that never ran has
    /// nothing stored and restores nothing, while an `Insert` would still
    /// trim its own length off the end.
    pub fn inverse(&self, buffer: &mut Buffer) {
        match self {
            Command::Insert(text) => {
                buffer.delete(text.chars().count());
            }
            Command::Remove { removed, .. } => buffer.append(removed),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert(_) => "write",
            Command::Remove { .. } => "delete",
        }
    }
}
