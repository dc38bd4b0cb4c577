//! Estimate CLI command
//!
//! Computes a cost breakdown for a trip and optionally saves it as a
//! named budget in one step.

use chrono::{Duration, NaiveDate, Utc};
use clap::Args;

use crate::api::PricingClient;
use crate::display::format_breakdown;
use crate::error::TravelResult;
use crate::models::{CostTier, TripDates, TripParameters};
use crate::services::{BudgetService, CatalogService, Estimator};
use crate::storage::Storage;

/// Arguments for the estimate command
#[derive(Args)]
pub struct EstimateArgs {
    /// Destination ID (see `voyage destination list`)
    pub destination: String,

    /// Trip start date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// Trip end date (YYYY-MM-DD, defaults to one week after the start)
    #[arg(short, long)]
    pub end: Option<NaiveDate>,

    /// Number of travelers (1-20)
    #[arg(short, long, default_value = "2")]
    pub travelers: u32,

    /// Cost tier: budget, moderate, or luxury (defaults to the
    /// destination's own tier)
    #[arg(long)]
    pub tier: Option<String>,

    /// Save the estimate as a budget with this name
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Notes to attach when saving
    #[arg(long, requires = "save")]
    pub notes: Option<String>,
}

/// Handle the estimate command
pub fn handle_estimate_command(
    storage: &Storage,
    client: Option<&PricingClient>,
    currency: &str,
    args: EstimateArgs,
) -> TravelResult<()> {
    let catalog = CatalogService::new(client);
    let destination = catalog.resolve(&args.destination)?;

    let start = args.start.unwrap_or_else(|| Utc::now().date_naive());
    let end = args.end.unwrap_or(start + Duration::days(7));
    let dates = TripDates::new(start, end);

    let tier = match &args.tier {
        Some(tier) => CostTier::parse(tier),
        None => destination.cost_level,
    };

    let params = TripParameters::new(destination.id.clone(), dates, args.travelers, tier);
    params.validate()?;

    let estimator = Estimator::new(client, currency);
    let breakdown = estimator.estimate(&params);

    println!(
        "Estimate for {} ({} tier), {} - {}, {} travelers:",
        destination.name, tier, dates.start, dates.end, args.travelers
    );
    println!();
    print!("{}", format_breakdown(&breakdown));

    if let Some(name) = args.save {
        let service = BudgetService::new(storage);
        let saved = service.save_estimate(
            &name,
            destination,
            dates,
            args.travelers,
            &breakdown,
            args.notes,
        )?;
        println!();
        println!("Saved budget '{}' ({})", saved.name, saved.id);
    }

    Ok(())
}
