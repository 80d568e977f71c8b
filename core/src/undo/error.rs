//! Error type for the undo engine.

use thiserror::Error;

/// Errors produced by the undo buffer and engine construction.
///
/// Only [`InvalidArgument`](Self::InvalidArgument) and [`Config`](Self::Config)
/// are expected to reach callers. [`Empty`](Self::Empty) and
/// [`InvalidState`](Self::InvalidState) come from the raw
/// [`UndoStack`](super::UndoStack) and indicate a bug if they ever surface
/// through [`UndoEngine`](super::UndoEngine).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UndoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("undo stack is empty")]
    Empty,
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for undo operations.
pub type UndoResult<T = ()> = Result<T, UndoError>;
