//! Destination catalog
//!
//! Destinations come from the pricing service's catalog endpoint when it is
//! reachable, and from a built-in list otherwise. Either way the caller
//! always gets a usable catalog.

use tracing::debug;

use crate::api::PricingClient;
use crate::error::{TravelError, TravelResult};
use crate::models::{CostTier, Destination};

/// The built-in destination list used when the catalog API is unavailable
pub fn builtin_destinations() -> Vec<Destination> {
    fn dest(id: &str, name: &str, country: &str, continent: &str, cost_level: CostTier) -> Destination {
        Destination {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            continent: continent.into(),
            cost_level,
        }
    }

    vec![
        dest("paris", "Paris", "France", "Europe", CostTier::Luxury),
        dest("bangkok", "Bangkok", "Thailand", "Asia", CostTier::Budget),
        dest("nyc", "New York City", "USA", "North America", CostTier::Luxury),
        dest("tokyo", "Tokyo", "Japan", "Asia", CostTier::Luxury),
        dest("bali", "Bali", "Indonesia", "Asia", CostTier::Budget),
        dest("rome", "Rome", "Italy", "Europe", CostTier::Moderate),
        dest("cancun", "Cancun", "Mexico", "North America", CostTier::Moderate),
        dest("capetown", "Cape Town", "South Africa", "Africa", CostTier::Moderate),
    ]
}

/// Service for looking up destinations
pub struct CatalogService<'a> {
    client: Option<&'a PricingClient>,
}

impl<'a> CatalogService<'a> {
    pub fn new(client: Option<&'a PricingClient>) -> Self {
        Self { client }
    }

    /// All known destinations
    ///
    /// Falls back to the built-in list on any catalog failure.
    pub fn destinations(&self) -> Vec<Destination> {
        if let Some(client) = self.client {
            match client.destinations() {
                Ok(destinations) if !destinations.is_empty() => return destinations,
                Ok(_) => debug!("catalog returned no destinations, using built-in list"),
                Err(e) => debug!(error = %e, "catalog fetch failed, using built-in list"),
            }
        }

        builtin_destinations()
    }

    /// Resolve a destination by its catalog key
    pub fn resolve(&self, id: &str) -> TravelResult<Destination> {
        self.destinations()
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| TravelError::destination_not_found(id))
    }
}
