// src/buffer.rs - Append-only text buffer with truncate-from-end

use ropey::Rope;
use std::fmt;

/// The text under edit.
///
/// Content only ever grows at the end (`write`/`append`) or shrinks from the
/// end (`delete`). Lengths are counted in chars, the unit `Rope` indexes by.
#[derive(Debug, Clone)]
pub struct Buffer {
    rope: Rope,
    /// Most recent deletion; overwritten by every `delete`
    last_removed: String,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            last_removed: String::new(),
        }
    }

    pub fn write(&mut self, text: &str) {
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
    }

    /// Removes the last `count` chars and returns them.
    ///
    /// A `count` past the start of the buffer removes everything.
    pub fn delete(&mut self, count: usize) -> String {
        let end = self.rope.len_chars();
        let start = end.saturating_sub(count);
        let removed = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        self.last_removed.clone_from(&removed);
        removed
    }

    /// Restores previously deleted text at the end of the buffer.
    pub fn append(&mut self, text: &str) {
        self.write(text);
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn last_removed(&self) -> &str {
        &self.last_removed
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}
