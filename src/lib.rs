//! Gitcoach - a learner-friendly Git client core.
//!
//! This library wraps a Git engine behind a uniform operation surface: every
//! action (open/clone/stage/commit/push/pull/branch/merge) returns a
//! [`core::CommandResult`], raw engine failures are classified into plain
//! explanations, and state changes are published as events so observers (a
//! GUI, the bundled CLI, logs) stay consistent with the repository.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`core::AppController`]: the operation executor
//! - [`core::AppEvent`] / [`core::EventHub`]: state-change notifications
//! - [`core::CommandResult`]: the uniform outcome record
//! - [`core::ChangedFiles`]: the staged/unstaged/untracked/deleted partition
//! - [`core::Glossary`]: bundled reference terms for learners

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    classify,
    print_error,
    print_info,
    print_result,
    print_section_header,
    print_success,

    AppController,

    AppEvent,
    ChangedFiles,
    CommandResult,
    // Engine and failures
    EngineError,
    EventHub,
    GitEngine,
    // Glossary
    Glossary,
    GlossaryTerm,
    RepoSession,
    Result,
    ResultData,

    MSG_NO_REPOSITORY,
    NO_BRANCH,
};
