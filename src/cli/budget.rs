//! Budget CLI commands
//!
//! Implements CLI commands for saved-budget management.

use clap::Subcommand;

use crate::display::{format_budget_details, format_budget_list};
use crate::error::TravelResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List all saved budgets
    List,
    /// Show a saved budget in detail
    Show {
        /// Budget ID (full or short form from the list view)
        id: String,
    },
    /// Edit a saved budget's name or notes
    Edit {
        /// Budget ID (full or short form from the list view)
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New notes (pass an empty string to clear)
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a saved budget
    Remove {
        /// Budget ID (full or short form from the list view)
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> TravelResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::List => {
            let budgets = service.list()?;
            print!("{}", format_budget_list(&budgets));
            if budgets.is_empty() {
                println!();
            }
        }
        BudgetCommands::Show { id } => {
            let budget = service.resolve(&id)?;
            print!("{}", format_budget_details(&budget));
        }
        BudgetCommands::Edit { id, name, notes } => {
            let budget = service.resolve(&id)?;
            let edited = service.edit(&budget.id, name, notes)?;
            println!("Updated budget '{}' ({})", edited.name, edited.id);
        }
        BudgetCommands::Remove { id } => {
            let budget = service.resolve(&id)?;
            service.remove(&budget.id)?;
            println!("Removed budget '{}' ({})", budget.name, budget.id);
        }
    }

    Ok(())
}
