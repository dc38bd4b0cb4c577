use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use voyage::api::PricingClient;
use voyage::cli::{
    handle_budget_command, handle_destination_command, handle_estimate_command, BudgetCommands,
    DestinationCommands, EstimateArgs,
};
use voyage::config::{paths::VoyagePaths, settings::Settings};
use voyage::storage::Storage;

#[derive(Parser)]
#[command(
    name = "voyage",
    version,
    about = "Terminal-based travel budget planner",
    long_about = "Voyage estimates what a trip will cost across accommodation, \
                  food, transportation, activities, and miscellaneous expenses, \
                  and keeps a collection of saved budgets for trips you are \
                  planning."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the cost of a trip
    #[command(alias = "est")]
    Estimate(EstimateArgs),

    /// Saved budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Destination catalog commands
    #[command(subcommand, alias = "dest")]
    Destination(DestinationCommands),

    /// Create the data directory and a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // RUST_LOG controls verbosity; default keeps normal output clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = VoyagePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let client = if settings.api.is_configured() {
        Some(PricingClient::new(&settings.api)?)
    } else {
        None
    };

    match cli.command {
        Commands::Estimate(args) => {
            let storage = open_storage(&paths)?;
            handle_estimate_command(&storage, client.as_ref(), &settings.currency, args)?;
        }
        Commands::Budget(cmd) => {
            let storage = open_storage(&paths)?;
            handle_budget_command(&storage, cmd)?;
        }
        Commands::Destination(cmd) => {
            handle_destination_command(client.as_ref(), cmd)?;
        }
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized voyage data in {}", paths.base_dir().display());
        }
        Commands::Config => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Budgets file:    {}", paths.budgets_file().display());
            println!("Currency:        {}", settings.currency);
            println!(
                "Pricing API:     {}",
                if settings.api.is_configured() {
                    settings.api.base_url.as_str()
                } else {
                    "not configured (using built-in tables)"
                }
            );
        }
    }

    Ok(())
}

fn open_storage(paths: &VoyagePaths) -> Result<Storage> {
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    Ok(storage)
}
