// src/error.rs - Errors surfaced to the prompt and HTTP front ends

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Invalid action")]
    InvalidAction(String),
    #[error("Length must be an integer")]
    InvalidLength,
    #[error("Text is required")]
    MissingText,
    #[error("Nothing to undo")]
    EmptyHistory,
}
