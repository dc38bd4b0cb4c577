//! Trip parameter models
//!
//! A trip is a destination, a date range, a traveler count, and a cost tier.
//! The estimator itself accepts any parameters (it is total); validation is
//! applied at the service boundary before anything is saved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::destination::CostTier;
use crate::error::{TravelError, TravelResult};

/// Maximum traveler count accepted at the service boundary
pub const MAX_TRAVELERS: u32 = 20;

/// An inclusive-start, exclusive-end trip date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TripDates {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Trip duration in days, never less than 1
    ///
    /// A same-day or inverted range still prices as a one-day trip; inverted
    /// ranges are rejected separately by [`TripParameters::validate`].
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }
}

/// The full set of inputs to one estimation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripParameters {
    /// Catalog key of the destination
    pub destination_id: String,

    /// Trip date range
    pub dates: TripDates,

    /// Number of travelers
    pub travelers: u32,

    /// Pricing band for the estimate
    pub tier: CostTier,
}

impl TripParameters {
    pub fn new(
        destination_id: impl Into<String>,
        dates: TripDates,
        travelers: u32,
        tier: CostTier,
    ) -> Self {
        Self {
            destination_id: destination_id.into(),
            dates,
            travelers,
            tier,
        }
    }

    /// Validate parameters before saving or estimating through the services
    ///
    /// Rejects inverted date ranges and traveler counts outside 1..=20.
    pub fn validate(&self) -> TravelResult<()> {
        if self.destination_id.trim().is_empty() {
            return Err(TravelError::Validation(
                "destination must not be empty".into(),
            ));
        }

        if self.dates.end < self.dates.start {
            return Err(TravelError::Validation(format!(
                "end date {} is before start date {}",
                self.dates.end, self.dates.start
            )));
        }

        if self.travelers < 1 || self.travelers > MAX_TRAVELERS {
            return Err(TravelError::Validation(format!(
                "travelers must be between 1 and {}, got {}",
                MAX_TRAVELERS, self.travelers
            )));
        }

        Ok(())
    }
}
