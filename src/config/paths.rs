//! Path management for Voyage
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `VOYAGE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/voyage-cli` or `~/.config/voyage-cli`
//! 3. Windows: `%APPDATA%\voyage-cli`

use std::path::PathBuf;

use crate::error::TravelError;

/// Manages all paths used by Voyage
#[derive(Debug, Clone)]
pub struct VoyagePaths {
    /// Base directory for all Voyage data
    base_dir: PathBuf,
}

impl VoyagePaths {
    /// Create a new VoyagePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TravelError> {
        let base_dir = if let Ok(custom) = std::env::var("VOYAGE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create VoyagePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/voyage-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/voyage-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budgets.json (the saved-budget collection)
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TravelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TravelError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TravelError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(unix)]
fn resolve_default_path() -> Result<PathBuf, TravelError> {
    // Prefer XDG_CONFIG_HOME, fall back to ~/.config
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("voyage-cli"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| TravelError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("voyage-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TravelError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TravelError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("voyage-cli"))
}
