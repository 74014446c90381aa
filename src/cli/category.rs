//! Custom category CLI commands

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::services::LedgerService;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a custom category label
    Add {
        /// Label, matched exactly (case-sensitive)
        label: String,
    },

    /// List custom categories in the order they were added
    List,
}

/// Handle a category command
pub fn handle_category_command(
    service: &mut LedgerService,
    cmd: CategoryCommands,
) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::Add { label } => {
            if service.add_custom_category(&label)? {
                println!("Added category '{}'", label);
            } else {
                println!("Category '{}' already exists", label);
            }
        }

        CategoryCommands::List => {
            let categories = service.custom_categories();
            if categories.is_empty() {
                println!("No custom categories.");
            }
            for category in categories {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
