//! Terminal output formatting
//!
//! Plain-text table and detail views; no interactive UI.

pub mod budget;
pub mod destination;
pub mod estimate;

pub use budget::{format_budget_details, format_budget_list};
pub use destination::format_destination_list;
pub use estimate::format_breakdown;
