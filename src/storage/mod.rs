//! Storage layer for Voyage
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The budget store persists the full collection after every
//! mutation and reloads it once at startup.

pub mod budgets;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use file_io::{read_json_or_default, write_json_atomic};

use crate::config::paths::VoyagePaths;
use crate::error::TravelError;

/// Main storage coordinator
pub struct Storage {
    paths: VoyagePaths,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: VoyagePaths) -> Result<Self, TravelError> {
        paths.ensure_directories()?;

        Ok(Self {
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &VoyagePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), TravelError> {
        self.budgets.load()?;
        Ok(())
    }
}
