//! User settings for Voyage
//!
//! Manages user preferences and the pricing-API credentials. Settings live
//! in `config.json` under the base directory; the API block can also be
//! supplied through environment variables, which win over the file.

use serde::{Deserialize, Serialize};

use super::paths::VoyagePaths;
use crate::error::TravelError;

/// Connection settings for the remote pricing service
///
/// The service is a best-effort enhancement: when no base URL is configured
/// the estimator runs purely on the built-in tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL of the pricing service (empty = disabled)
    #[serde(default)]
    pub base_url: String,

    /// Bearer token sent in the Authorization header
    #[serde(default)]
    pub token: String,

    /// Partner identifier sent in the X-Partner-ID header
    #[serde(default)]
    pub partner_id: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiSettings {
    /// Whether enough is configured to attempt remote calls
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            partner_id: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// User settings for Voyage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Reporting currency for locally computed estimates
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Remote pricing service configuration
    #[serde(default)]
    pub api: ApiSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            api: ApiSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    ///
    /// Environment variables `VOYAGE_API_URL`, `VOYAGE_API_TOKEN` and
    /// `VOYAGE_PARTNER_ID` override the corresponding file values.
    pub fn load_or_create(paths: &VoyagePaths) -> Result<Self, TravelError> {
        let settings_path = paths.settings_file();

        let mut settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TravelError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| TravelError::Config(format!("Failed to parse settings file: {}", e)))?
        } else {
            Self::default()
        };

        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VoyagePaths) -> Result<(), TravelError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TravelError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TravelError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("VOYAGE_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(token) = std::env::var("VOYAGE_API_TOKEN") {
            self.api.token = token;
        }
        if let Ok(partner) = std::env::var("VOYAGE_PARTNER_ID") {
            self.api.partner_id = partner;
        }
    }
}
