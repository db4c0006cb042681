// src/action.rs - Requests accepted by the prompt and HTTP front ends

use crate::command::Command;
use crate::error::EditorError;
use std::str::FromStr;

/// What a front end asked for, once its input has been validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Write(String),
    Delete(usize),
    Undo,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Write(_) => "write",
            Action::Delete(_) => "delete",
            Action::Undo => "undo",
        }
    }

    /// The command to apply, or `None` for `Undo`.
    pub fn into_command(self) -> Option<Command> {
        match self {
            Action::Write(text) => Some(Command::insert(text)),
            Action::Delete(count) => Some(Command::remove(count)),
            Action::Undo => None,
        }
    }
}

/// Action name without its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Write,
    Delete,
    Undo,
}

impl FromStr for ActionKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "write" => Ok(ActionKind::Write),
            "delete" => Ok(ActionKind::Delete),
            "undo" => Ok(ActionKind::Undo),
            other => Err(EditorError::InvalidAction(other.to_string())),
        }
    }
}

pub fn parse_length(input: &str) -> Result<usize, EditorError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| EditorError::InvalidLength)
}
