//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod destination;
pub mod estimate;

pub use budget::{handle_budget_command, BudgetCommands};
pub use destination::{handle_destination_command, DestinationCommands};
pub use estimate::{handle_estimate_command, EstimateArgs};
