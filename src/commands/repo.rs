use std::path::Path;

use crate::core::{print_result, AppController, CommandResult};

/// Create a new repository at the given path.
pub fn execute_init(path: &Path) -> CommandResult {
    let mut controller = AppController::new();
    controller.subscribe(|event| log::debug!("event: {}", event.name()));
    let result = controller.init_repository(path);
    print_result(&result);
    result
}

/// Clone a repository to the given destination.
pub fn execute_clone(url: &str, destination: &Path) -> CommandResult {
    let mut controller = AppController::new();
    controller.subscribe(|event| log::debug!("event: {}", event.name()));
    let result = controller.clone_repository(url, destination);
    print_result(&result);
    result
}
