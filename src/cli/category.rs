//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::CategoryId;
use crate::services::LedgerStore;
use crate::storage::PersistenceSlot;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a spending category
    Add {
        /// Category name
        name: String,
        /// Budget for the category (e.g., "400" or "400.00")
        #[arg(allow_hyphen_values = true)]
        budget: String,
    },

    /// Remove a category by id
    #[command(alias = "rm")]
    Remove {
        /// Category id as shown by `list`
        id: String,
    },

    /// List all categories
    #[command(alias = "ls")]
    List,
}

/// Handle a category command
pub fn handle_category_command<S: PersistenceSlot>(
    store: &mut LedgerStore<S>,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::Add { name, budget } => {
            let category = store.add_category(&name, &budget)?;
            println!(
                "Created category '{}' with budget {} (id {})",
                category.name,
                store.format_currency(category.budget),
                category.id
            );
        }

        CategoryCommands::Remove { id } => {
            let id: CategoryId = id
                .parse()
                .map_err(|_| BudgetError::Validation(format!("Invalid id: {}", id)))?;

            if store.remove_category(id)? {
                println!("Removed category {}", id);
            } else {
                println!("No category with id {}", id);
            }
        }

        CategoryCommands::List => {
            print!("{}", format_category_table(store.categories(), store.settings()));
        }
    }

    Ok(())
}
