//! Core functionality for gitcoach.
//!
//! This module provides the building blocks of the client core: the Git
//! engine, the error classifier, the operation executor, the notification
//! hub, and the supporting data types.

pub mod classify;
pub mod controller;
pub mod engine;
pub mod error;
pub mod events;
pub mod glossary;
pub mod output;
pub mod result;
pub mod session;
pub mod status;

// === Operation executor ===
// One entry point per Git action; every operation returns a CommandResult
pub use controller::AppController;

// === Results ===
// Uniform outcome record and typed payloads
pub use result::{CommandResult, ResultData};

// === Notifications ===
// Synchronous publish/subscribe layer for state-change events
pub use events::{AppEvent, EventHub};

// === Error handling ===
// Engine failure type and the learner-facing classifier
pub use classify::{classify, MSG_NO_REPOSITORY};
pub use error::{EngineError, Result};

// === Engine and session ===
pub use engine::GitEngine;
pub use session::{RepoSession, NO_BRANCH};

// === Working-tree snapshot ===
pub use status::ChangedFiles;

// === Glossary ===
pub use glossary::{Glossary, GlossaryTerm};

// === Output formatting ===
pub use output::{print_error, print_info, print_result, print_section_header, print_success};
