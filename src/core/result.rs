//! Uniform outcome record for every Git operation.
//!
//! Every operation on [`crate::core::controller::AppController`] returns a
//! [`CommandResult`], whether it succeeded or failed. The record carries a
//! human-readable representation of the attempted command (for display and
//! logging, not for re-execution), a short description, optional output and a
//! typed payload for read operations.
//!
//! # Invariant
//! `error_message` is set if and only if `success` is false. Construct results
//! through [`CommandResult::ok`] and [`CommandResult::err`] to preserve this.

use serde::Serialize;
use std::path::PathBuf;

use crate::core::status::ChangedFiles;

/// Typed payload for read-only operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResultData {
    /// Local branch names, from a branch listing.
    Branches(Vec<String>),
    /// The current branch name (or the no-branch sentinel).
    Branch(String),
    /// Snapshot of the working tree partition.
    ChangedFiles(ChangedFiles),
}

/// Immutable record of one operation attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable form of what was attempted, e.g. `git commit -m 'fix'`.
    pub command: String,
    /// Short localized summary of the operation.
    pub description: String,
    /// Optional human-readable output detail.
    pub output: Option<String>,
    /// Learner-facing explanation of the failure; only set when `success` is false.
    pub error_message: Option<String>,
    /// Operation-specific extra payload.
    pub data: Option<ResultData>,
}

impl CommandResult {
    /// Build a successful result.
    pub fn ok(command: impl Into<String>, description: impl Into<String>) -> Self {
        CommandResult {
            success: true,
            command: command.into(),
            description: description.into(),
            output: None,
            error_message: None,
            data: None,
        }
    }

    /// Build a failed result carrying a learner-facing message.
    pub fn err(
        command: impl Into<String>,
        description: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        CommandResult {
            success: false,
            command: command.into(),
            description: description.into(),
            output: None,
            error_message: Some(error_message.into()),
            data: None,
        }
    }

    /// Attach human-readable output detail.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Attach a typed payload.
    pub fn with_data(mut self, data: ResultData) -> Self {
        self.data = Some(data);
        self
    }

    /// The result's truth value: true exactly when the operation succeeded.
    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// Whether the result represents a failure with an attached message.
    pub fn is_error(&self) -> bool {
        !self.success && self.error_message.is_some()
    }

    /// Convert into a flat record suitable for structured logs.
    pub fn to_log_record(&self) -> serde_json::Value {
        serde_json::json!({
            "command": self.command,
            "description": self.description,
            "success": self.success,
            "output": self.output,
            "error_message": self.error_message,
        })
    }

    /// Convenience accessor for the changed-files payload, if present.
    pub fn changed_files(&self) -> Option<&ChangedFiles> {
        match &self.data {
            Some(ResultData::ChangedFiles(files)) => Some(files),
            _ => None,
        }
    }

    /// Convenience accessor for the branch-list payload, if present.
    pub fn branch_names(&self) -> Option<&[String]> {
        match &self.data {
            Some(ResultData::Branches(names)) => Some(names),
            _ => None,
        }
    }
}

/// Flatten a path set into the display form used in command strings.
pub(crate) fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
