use colored::*;

use crate::commands::open_controller_here;
use crate::core::{print_info, print_result, print_section_header, CommandResult};

/// List local branches, marking the current one.
pub fn execute_branches() -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let current = controller.current_branch_name().unwrap_or_default();
    let result = controller.branches();
    match result.branch_names() {
        Some(names) if !names.is_empty() => {
            print_section_header("Local Branches");
            for name in names {
                if *name == current {
                    println!("{} {}", "*".white(), name.blue());
                } else {
                    println!("  {}", name.blue());
                }
            }
            println!();
        }
        Some(_) => print_info("No branches yet. Make your first commit to create one."),
        None => print_result(&result),
    }
    result
}

/// Create a branch and switch to it.
pub fn execute_branch_create(name: &str) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.create_branch(name);
    print_result(&result);
    result
}

/// Switch to an existing branch.
pub fn execute_branch_switch(name: &str) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.switch_branch(name);
    print_result(&result);
    result
}

/// Delete a branch.
pub fn execute_branch_delete(name: &str) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.delete_branch(name);
    print_result(&result);
    result
}

/// Merge a source branch into the target (or the current branch).
pub fn execute_merge(source: &str, target: Option<&str>) -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let result = controller.merge_branch(source, target);
    print_result(&result);
    result
}
