// src/editor.rs - Buffer + history coordinator shared by the front ends

use crate::action::Action;
use crate::buffer::Buffer;
use crate::command::Command;
use crate::error::EditorError;
use crate::history::History;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One editor per process, handed to both the prompt loop and the HTTP
/// server. Each apply/undo runs under a single lock acquisition.
pub type SharedEditor = Arc<Mutex<Editor>>;

#[derive(Debug, Default)]
pub struct Editor {
    buffer: Buffer,
    history: History,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            history: History::new(),
        }
    }

    pub fn shared() -> SharedEditor {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn apply(&mut self, cmd: Command) {
        let name = cmd.name();
        self.history.apply(cmd, &mut self.buffer);
        log::debug!("Text after {}: {}", name, self.buffer);
    }

    pub fn undo(&mut self) -> Result<(), EditorError> {
        let cmd = self.history.undo(&mut self.buffer)?;
        log::debug!("Text after undo {}: {}", cmd.name(), self.buffer);
        Ok(())
    }

    pub fn write(&mut self, text: &str) {
        self.apply(Command::insert(text));
    }

    pub fn delete(&mut self, count: usize) {
        self.apply(Command::remove(count));
    }

    /// Runs a validated front-end request.
    pub fn perform(&mut self, action: Action) -> Result<(), EditorError> {
        match action.into_command() {
            Some(cmd) => {
                self.apply(cmd);
                Ok(())
            }
            None => self.undo(),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn depth(&self) -> usize {
        self.history.depth()
    }
}

/// Locks the shared editor, ignoring poisoning. Every mutation is a single
/// rope edit, so a panicked holder cannot leave the buffer half-written.
pub fn lock(editor: &SharedEditor) -> MutexGuard<'_, Editor> {
    editor.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perform_sequence() {
        let mut editor = Editor::new();
        editor.perform(Action::Write("hello".to_string())).unwrap();
        editor.perform(Action::Delete(2)).unwrap();
        assert_eq!(editor.text(), "hel");
        assert_eq!(editor.buffer.last_removed(), "lo");
        editor.perform(Action::Undo).unwrap();
        assert_eq!(editor.text(), "hello");
        editor.perform(Action::Undo).unwrap();
        assert_eq!(editor.text(), "");
        assert_eq!(editor.perform(Action::Undo), Err(EditorError::EmptyHistory));
    }

    #[test]
    fn test_depth_tracks_apply_and_undo() {
        let mut editor = Editor::new();
        editor.write("ab");
        editor.delete(1);
        assert_eq!(editor.depth(), 2);
        editor.undo().unwrap();
        assert_eq!(editor.depth(), 1);
        editor.undo().unwrap();
        assert!(editor.undo().is_err());
        assert_eq!(editor.depth(), 0);
    }

    #[test]
    fn test_shared_editor_across_threads() {
        let editor = Editor::shared();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let editor = Arc::clone(&editor);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        lock(&editor).write("x");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let editor = lock(&editor);
        assert_eq!(editor.depth(), 100);
        assert_eq!(editor.buffer.len_chars(), 100);
    }
}
