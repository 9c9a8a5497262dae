use colored::*;

use crate::commands::open_controller_here;
use crate::core::{print_info, print_result, print_section_header, CommandResult};

/// Show the current branch and the four-way changed-files partition.
pub fn execute_status() -> CommandResult {
    let (controller, opened) = open_controller_here();
    if !opened.success {
        print_result(&opened);
        return opened;
    }

    let branch = controller
        .current_branch_name()
        .unwrap_or_else(|| "unknown".to_string());
    println!("\nOn branch {}", branch.blue());

    let result = controller.changed_files();
    match result.changed_files() {
        Some(files) if !files.is_empty() => {
            print_group("Staged", &files.staged, Color::Green);
            print_group("Modified", &files.unstaged, Color::Yellow);
            print_group("Untracked", &files.untracked, Color::Red);
            print_group("Deleted", &files.deleted, Color::Red);
        }
        Some(_) => print_info("\nNothing changed. The working tree is clean."),
        None => print_result(&result),
    }
    println!();
    result
}

fn print_group(title: &str, paths: &[std::path::PathBuf], color: Color) {
    if paths.is_empty() {
        return;
    }
    print_section_header(title);
    for path in paths {
        println!("  {}", path.display().to_string().color(color));
    }
}
