//! Destination CLI commands

use clap::Subcommand;

use crate::api::PricingClient;
use crate::display::format_destination_list;
use crate::error::TravelResult;
use crate::services::CatalogService;

/// Destination subcommands
#[derive(Subcommand)]
pub enum DestinationCommands {
    /// List available destinations
    List,
}

/// Handle a destination command
pub fn handle_destination_command(
    client: Option<&PricingClient>,
    cmd: DestinationCommands,
) -> TravelResult<()> {
    let catalog = CatalogService::new(client);

    match cmd {
        DestinationCommands::List => {
            print!("{}", format_destination_list(&catalog.destinations()));
        }
    }

    Ok(())
}
