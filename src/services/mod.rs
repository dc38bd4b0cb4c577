//! Service layer for Voyage
//!
//! The service layer provides business logic on top of the storage and API
//! layers: estimation, catalog lookup, and saved-budget management.

pub mod budgets;
pub mod catalog;
pub mod estimator;

pub use budgets::BudgetService;
pub use catalog::{builtin_destinations, CatalogService};
pub use estimator::Estimator;
