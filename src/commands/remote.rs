use crate::commands::open_controller_here;
use crate::core::{print_result, CommandResult};

/// Register a remote under the given name.
pub fn execute_remote_add(url: &str, name: &str) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.connect_remote(url, Some(name));
    print_result(&result);
    result
}

/// Push to a remote; the branch defaults to the current one.
pub fn execute_push(remote: &str, branch: Option<&str>) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.push(Some(remote), branch);
    print_result(&result);
    result
}

/// Pull from a remote (fetch plus merge, never a rebase).
pub fn execute_pull(remote: &str, branch: Option<&str>) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.pull(Some(remote), branch);
    print_result(&result);
    result
}
