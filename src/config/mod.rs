//! Configuration and path management for Voyage

pub mod paths;
pub mod settings;

pub use paths::VoyagePaths;
pub use settings::{ApiSettings, Settings};
