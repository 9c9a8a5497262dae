use std::path::PathBuf;

use crate::commands::open_controller_here;
use crate::core::{print_result, CommandResult};

/// Stage the given repo-relative paths.
pub fn execute_stage(paths: &[PathBuf]) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.stage_files(paths);
    print_result(&result);
    result
}

/// Remove the given paths from the index, keeping working-tree changes.
pub fn execute_unstage(paths: &[PathBuf]) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.unstage_files(paths);
    print_result(&result);
    result
}
