use colored::*;

use crate::core::{print_error, print_info, print_section_header, Glossary};

/// Show one glossary term, or list all of them.
///
/// Returns false only when a requested term does not exist.
pub fn execute_glossary(term: Option<&str>) -> bool {
    let glossary = Glossary::bundled();

    match term {
        Some(name) => match glossary.term(name) {
            Some(entry) => {
                print_section_header(&entry.term);
                println!("{}\n", entry.short_desc.white());
                println!("{}\n", entry.description);
                if !entry.command.is_empty() {
                    println!("{} {}", "try:".bright_black(), entry.command.blue());
                }
                if !entry.related.is_empty() {
                    print_info(&format!("related: {}", entry.related.join(", ")));
                }
                println!();
                true
            }
            None => {
                print_error(&format!("No glossary entry for '{name}'."));
                false
            }
        },
        None => {
            print_section_header("Glossary");
            for entry in glossary.all_terms() {
                println!("  {:<14} {}", entry.term.blue(), entry.short_desc);
            }
            println!();
            true
        }
    }
}
