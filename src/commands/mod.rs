//! CLI command entry points.
//!
//! Each command is a thin UI collaborator: it constructs an [`AppController`],
//! invokes one core operation, and renders the returned result. No Git logic
//! lives here.

pub mod branch;
pub mod commit;
pub mod glossary_cmd;
pub mod remote;
pub mod repo;
pub mod stage;
pub mod status;

pub use branch::*;
pub use commit::*;
pub use glossary_cmd::*;
pub use remote::*;
pub use repo::*;
pub use stage::*;
pub use status::*;

use std::path::PathBuf;

use crate::core::{AppController, CommandResult};

/// Build a controller with a debug-logging observer and open the repository
/// at the current working directory.
pub(crate) fn open_controller_here() -> (AppController, CommandResult) {
    let mut controller = AppController::new();
    controller.subscribe(|event| log::debug!("event: {}", event.name()));
    let path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let result = controller.open_repository(&path);
    (controller, result)
}
