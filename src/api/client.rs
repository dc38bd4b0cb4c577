//! HTTP client for the remote pricing service
//!
//! The service exposes a destination catalog and a cost estimator. Both
//! calls are authenticated with a bearer token and a partner identifier
//! sent as request headers. Every failure mode (transport error, non-2xx
//! status, malformed payload) surfaces as `TravelError::Api`; callers
//! decide whether that triggers a fallback.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::settings::ApiSettings;
use crate::error::{TravelError, TravelResult};
use crate::models::{CostBreakdown, Destination, Money, TripParameters};

/// Client for the pricing service
pub struct PricingClient {
    http: Client,
    base_url: String,
    token: String,
    partner_id: String,
}

/// Wire format of an estimate request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateRequest<'a> {
    destination_id: &'a str,
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
    travelers: u32,
    cost_level: &'a str,
}

/// Wire format of an estimate response
#[derive(Debug, Clone, Deserialize)]
struct EstimatePayload {
    accommodation: Money,
    food: Money,
    transportation: Money,
    activities: Money,
    other: Money,
    total: Money,
    currency: String,
}

/// Wire format of the catalog response
#[derive(Debug, Clone, Deserialize)]
struct DestinationsPayload {
    destinations: Vec<Destination>,
}

impl PricingClient {
    /// Build a client from API settings
    ///
    /// The settings must have a base URL; check [`ApiSettings::is_configured`]
    /// before calling.
    pub fn new(settings: &ApiSettings) -> TravelResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| TravelError::Api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            partner_id: settings.partner_id.clone(),
        })
    }

    /// Fetch the destination catalog
    pub fn destinations(&self) -> TravelResult<Vec<Destination>> {
        let url = format!("{}/destinations", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("X-Partner-ID", &self.partner_id)
            .send()?;

        if !response.status().is_success() {
            return Err(TravelError::Api(format!(
                "destination catalog returned status {}",
                response.status()
            )));
        }

        let payload: DestinationsPayload = response
            .json()
            .map_err(|e| TravelError::Api(format!("malformed catalog payload: {}", e)))?;

        Ok(payload.destinations)
    }

    /// Request a cost estimate for the given trip parameters
    pub fn estimate(&self, params: &TripParameters) -> TravelResult<CostBreakdown> {
        let url = format!("{}/estimate", self.base_url);

        let request = EstimateRequest {
            destination_id: &params.destination_id,
            start_date: params.dates.start,
            end_date: params.dates.end,
            travelers: params.travelers,
            cost_level: params.tier.as_str(),
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("X-Partner-ID", &self.partner_id)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(TravelError::Api(format!(
                "pricing service returned status {}",
                response.status()
            )));
        }

        let payload: EstimatePayload = response
            .json()
            .map_err(|e| TravelError::Api(format!("malformed estimate payload: {}", e)))?;

        breakdown_from_payload(payload)
    }
}

/// Validate a remote payload into a breakdown
///
/// A payload whose total disagrees with its categories, or with a negative
/// amount anywhere, is malformed; rejecting it here lets the estimator fall
/// back rather than hand out an inconsistent breakdown.
fn breakdown_from_payload(payload: EstimatePayload) -> TravelResult<CostBreakdown> {
    let breakdown = CostBreakdown {
        accommodation: payload.accommodation,
        food: payload.food,
        transportation: payload.transportation,
        activities: payload.activities,
        other: payload.other,
        total: payload.total,
        currency: payload.currency,
    };

    if breakdown.categories().iter().any(|(_, amount)| amount.is_negative()) {
        return Err(TravelError::Api(
            "malformed estimate payload: negative category amount".into(),
        ));
    }

    if !breakdown.is_consistent() {
        return Err(TravelError::Api(format!(
            "malformed estimate payload: total {} does not match category sum {}",
            breakdown.total,
            breakdown.category_sum()
        )));
    }

    Ok(breakdown)
}
