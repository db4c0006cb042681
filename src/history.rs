// src/history.rs - Undo stack of applied commands

use crate::buffer::Buffer;
use crate::command::Command;
use crate::error::EditorError;

/// Stack of commands that have been applied and not yet undone.
///
/// Depth is unbounded; there is no redo, an undone command is dropped.
#[derive(Debug, Default)]
pub struct History {
    stack: Vec<Command>,
}

impl History {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn apply(&mut self, mut cmd: Command, buffer: &mut Buffer) {
        cmd.execute(buffer);
        self.stack.push(cmd);
    }

    /// Pops the most recent command and reverses it, returning it.
    pub fn undo(&mut self, buffer: &mut Buffer) -> Result<Command, EditorError> {
        let cmd = self.stack.pop().ok_or(EditorError::EmptyHistory)?;
        cmd.inverse(buffer);
        Ok(cmd)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
