//! Output formatting utilities for the CLI front end.
//!
//! Renders [`CommandResult`] fields and section output with a consistent
//! color scheme: red for errors, green for successes, blue for headers,
//! bright_black for muted detail. The core never prints on its own; these
//! helpers exist for the command layer.

use colored::*;

use crate::core::result::CommandResult;

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}\n", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("{}", message.bright_black());
}

/// Prints a section header followed by its underline
pub fn print_section_header(title: &str) {
    println!("\n{}", title.blue().bold());
}

/// Render one operation result: description, attempted command, and either
/// the output detail or the learner-facing error message.
pub fn print_result(result: &CommandResult) {
    if result.success {
        print_success(&result.description);
        if let Some(output) = &result.output {
            print_info(output);
        }
    } else if let Some(message) = &result.error_message {
        print_error(message);
        print_info(&format!("attempted: {}", result.command));
    } else {
        print_error(&result.description);
    }
}
