//! Destination model
//!
//! Destinations are immutable reference data sourced from the catalog API,
//! or from the built-in fallback list when the catalog is unreachable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named pricing band controlling the multiplier applied to a
/// destination's base daily rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    /// Hostels, street food, public transit
    Budget,
    /// Mid-range hotels and restaurants
    #[default]
    Moderate,
    /// High-end hotels, fine dining, private transport
    Luxury,
}

impl CostTier {
    /// Multiplier applied to a destination's base per-diem rate
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Budget => 0.7,
            Self::Moderate => 1.0,
            Self::Luxury => 1.8,
        }
    }

    /// Parse a tier from user or wire input
    ///
    /// Unrecognized values fall back to Moderate rather than failing, so a
    /// tier string is never a hard error on the estimation path.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "budget" => Self::Budget,
            "luxury" => Self::Luxury,
            _ => Self::Moderate,
        }
    }

    /// Wire representation ("budget", "moderate", "luxury")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A travel destination from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique catalog key (e.g., "paris")
    pub id: String,

    /// Display name (e.g., "Paris")
    pub name: String,

    /// Country name
    pub country: String,

    /// Continent name
    pub continent: String,

    /// Typical price band for the destination
    pub cost_level: CostTier,
}
