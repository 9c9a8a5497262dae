//! Maps raw engine failures to learner-friendly explanations.
//!
//! Classification scans an ordered table of lowercase substring patterns
//! against the failure's diagnostic text (the raw stream captured from `git`
//! when one exists, the generic message otherwise). The first matching entry
//! wins, so the declaration order below encodes precedence: "rejected" must
//! come before anything broader, "remote ... already exists" before the branch
//! group's bare "already exists", "repository not found" before the bare
//! "not found", and the divergence patterns before the bare "conflict".
//!
//! Unmatched diagnostics surface verbatim (trimmed). Classification never
//! fails; its only side effect is an error-severity log of the raw text.

use log::error;

use crate::core::error::EngineError;
use crate::core::result::CommandResult;

/// Message returned by every operation invoked without an open repository.
pub const MSG_NO_REPOSITORY: &str = "No repository is selected. Open or create one first.";

/// Ordered pattern table: first matching substring decides the message.
const ERROR_PATTERNS: &[(&str, &str)] = &[
    // Network
    (
        "could not resolve host",
        "Cannot reach the network. Check your internet connection.",
    ),
    ("connection refused", "Could not connect to the remote server."),
    ("timed out", "The connection timed out. Try again later."),
    // Authentication
    (
        "authentication failed",
        "Authentication failed. Check your credentials.",
    ),
    ("permission denied", "You do not have permission to do that."),
    (
        "invalid username or password",
        "The username or password is incorrect.",
    ),
    // Remote
    (
        "rejected",
        "The push was rejected. Pull the latest changes first.",
    ),
    ("no such remote", "That remote does not exist."),
    (
        "remote origin already exists",
        "A remote with that name already exists.",
    ),
    (
        "already exists",
        "A branch with that name already exists.",
    ),
    ("repository not found", "The repository could not be found."),
    // Branches
    //
    // Checking out an unknown branch and staging an unknown path both report
    // an unmatched pathspec; only the checkout form ends with "known to git".
    (
        "did not match any file(s) known to git",
        "That branch could not be found.",
    ),
    ("not found", "That branch could not be found."),
    (
        "cannot delete checked out branch",
        "You cannot delete the branch you are currently on.",
    ),
    (
        "cannot delete branch",
        "You cannot delete the branch you are currently on.",
    ),
    (
        "checked out at",
        "You cannot delete the branch you are currently on.",
    ),
    (
        "not fully merged",
        "That branch has changes that are not merged yet. Merge it first.",
    ),
    // Staging and commits
    ("nothing to commit", "There are no changes to commit."),
    (
        "nothing added to commit",
        "No files are staged. Stage some changes first.",
    ),
    ("pathspec", "That file could not be found."),
    // Merging
    (
        "unrelated histories",
        "These branches share no history and cannot be merged normally.",
    ),
    (
        "divergent branches",
        "The branches have diverged. Merge the remote changes to bring them together.",
    ),
    (
        "need to specify how to reconcile",
        "The branches have diverged. Merge the remote changes to bring them together.",
    ),
    (
        "conflict",
        "A merge conflict occurred. Resolve the conflicting files by hand, then commit.",
    ),
    ("merge is not possible", "Merging is not possible here."),
    (
        "not something we can merge",
        "That is not something that can be merged.",
    ),
    // Working tree safety
    (
        "local changes would be overwritten",
        "You have uncommitted changes that would be overwritten. Commit or stash them first.",
    ),
    (
        "uncommitted changes",
        "You have uncommitted changes that would be overwritten. Commit or stash them first.",
    ),
    (
        "your local changes",
        "You have uncommitted changes that would be overwritten. Commit or stash them first.",
    ),
    // Repository identity
    ("not a git repository", "This folder is not a Git repository."),
    (
        "could not find repository",
        "No Git repository was found at that location.",
    ),
];

/// Convert an engine failure into a failed [`CommandResult`].
///
/// `command` is the literal attempted command text; `description` names the
/// operation and becomes "{description} failed" on the result. Deterministic
/// and infallible.
pub fn classify(failure: &EngineError, command: &str, description: &str) -> CommandResult {
    let raw = match failure.diagnostic() {
        Some(stream) => stream.to_string(),
        None => failure.to_string(),
    };
    error!("{} failed: {}", command, raw.trim());

    let haystack = raw.to_lowercase();
    let message = ERROR_PATTERNS
        .iter()
        .find(|(pattern, _)| haystack.contains(pattern))
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| raw.trim().to_string());

    CommandResult::err(command, format!("{description} failed"), message)
}
