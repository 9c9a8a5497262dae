//! Structured failures from the underlying Git engine.
//!
//! [`EngineError`] is the only error type the engine layer produces. Failures
//! from spawned `git` commands keep their raw diagnostic stream separate from
//! the generic message so the classifier can prefer it; failures from the
//! `git2` library carry only their message text.
//!
//! These errors never cross the executor boundary: the controller converts
//! every one of them into a failed [`crate::core::result::CommandResult`].

use thiserror::Error;

/// Failures surfaced by the underlying Git engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A spawned `git` command exited unsuccessfully.
    #[error("{message}")]
    CommandFailed {
        message: String,
        /// Raw diagnostic output captured from the command, when any existed.
        stderr: Option<String>,
    },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Repository is bare")]
    BareRepository,

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,
}

/// Convenience type alias for Results inside the engine layer
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a command failure with an optional raw diagnostic stream.
    pub fn command_failed(message: impl Into<String>, stderr: Option<String>) -> Self {
        Self::CommandFailed {
            message: message.into(),
            stderr,
        }
    }

    /// The raw diagnostic stream, when one was captured and is non-empty.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::CommandFailed {
                stderr: Some(text), ..
            } if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}
