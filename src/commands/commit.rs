use crate::commands::open_controller_here;
use crate::core::{print_result, CommandResult};

/// Commit the staged changes with the given message.
pub fn execute_commit(message: &str) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.commit(message);
    print_result(&result);
    result
}
