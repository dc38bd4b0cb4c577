//! Cost estimator
//!
//! Produces a five-category cost breakdown for a trip. When a pricing
//! client is available it is consulted first; any failure falls back to
//! the deterministic local tables, so estimation as a whole never fails.

use tracing::debug;

use crate::api::PricingClient;
use crate::models::{CostBreakdown, Money, TripParameters};

/// Fraction of the effective per-diem allocated to each category
const ACCOMMODATION_SHARE: f64 = 0.40;
const FOOD_SHARE: f64 = 0.30;
const TRANSPORTATION_SHARE: f64 = 0.15;
const ACTIVITIES_SHARE: f64 = 0.10;
const OTHER_SHARE: f64 = 0.05;

/// Flat per-traveler transportation surcharge, independent of duration
/// (models a round-trip ticket)
const TRANSPORTATION_FLAT_PER_TRAVELER: f64 = 100.0;

/// Base per-diem for destinations missing from the rate table
const DEFAULT_BASE_PER_DIEM: f64 = 100.0;

/// Base daily spending rate per destination, in whole currency units
fn base_per_diem(destination_id: &str) -> f64 {
    match destination_id {
        "paris" => 150.0,
        "bangkok" => 50.0,
        "nyc" => 200.0,
        "tokyo" => 180.0,
        "bali" => 60.0,
        "rome" => 120.0,
        "cancun" => 100.0,
        "capetown" => 80.0,
        _ => DEFAULT_BASE_PER_DIEM,
    }
}

/// Trip cost estimator
pub struct Estimator<'a> {
    client: Option<&'a PricingClient>,
    currency: String,
}

impl<'a> Estimator<'a> {
    /// Create an estimator
    ///
    /// `client` is the optional remote pricing service; `currency` is the
    /// reporting currency for locally computed estimates.
    pub fn new(client: Option<&'a PricingClient>, currency: impl Into<String>) -> Self {
        Self {
            client,
            currency: currency.into(),
        }
    }

    /// An estimator with no remote service, quoting in USD
    pub fn offline() -> Self {
        Self::new(None, "USD")
    }

    /// Estimate the cost of a trip
    ///
    /// Total from the caller's perspective: a remote failure degrades to
    /// the local heuristic instead of surfacing an error.
    pub fn estimate(&self, params: &TripParameters) -> CostBreakdown {
        if let Some(client) = self.client {
            match client.estimate(params) {
                Ok(breakdown) => return breakdown,
                Err(e) => {
                    debug!(error = %e, "remote estimate failed, using local tables");
                }
            }
        }

        self.local_estimate(params)
    }

    /// Deterministic estimate from the built-in rate tables
    pub fn local_estimate(&self, params: &TripParameters) -> CostBreakdown {
        let days = params.dates.duration_days() as f64;
        let travelers = params.travelers as f64;

        let per_diem = base_per_diem(&params.destination_id) * params.tier.multiplier();
        let trip_spend = per_diem * days * travelers;

        // Categories round independently; the total is the sum of the
        // rounded parts, so it always matches what is displayed per line.
        CostBreakdown::from_categories(
            Money::round_half_up(trip_spend * ACCOMMODATION_SHARE),
            Money::round_half_up(trip_spend * FOOD_SHARE),
            Money::round_half_up(
                trip_spend * TRANSPORTATION_SHARE + TRANSPORTATION_FLAT_PER_TRAVELER * travelers,
            ),
            Money::round_half_up(trip_spend * ACTIVITIES_SHARE),
            Money::round_half_up(trip_spend * OTHER_SHARE),
            self.currency.clone(),
        )
    }
}

/// Convenience wrapper for one-off local estimates
pub fn estimate_local(params: &TripParameters) -> CostBreakdown {
    Estimator::offline().local_estimate(params)
}
