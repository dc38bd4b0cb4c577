//! Saved budget model
//!
//! A saved budget pairs trip parameters with the expense lines of a
//! previously computed estimate. Records are created only through the
//! store's add operation, which assigns the identifier and timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::destination::Destination;
use super::ids::BudgetId;
use super::money::Money;

/// One named expense line within a saved budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseLine {
    /// Category label (e.g., "Accommodation")
    pub category: String,

    /// Amount in whole currency units
    pub amount: Money,

    /// True for lines the user added by hand rather than derived from an
    /// estimate
    #[serde(default)]
    pub is_custom: bool,
}

impl ExpenseLine {
    /// A line derived from an estimate breakdown
    pub fn estimated(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
            is_custom: false,
        }
    }

    /// A user-entered line
    pub fn custom(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
            is_custom: true,
        }
    }
}

/// A persisted budget record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBudget {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: BudgetId,

    /// User-chosen display name (e.g., "Honeymoon")
    pub name: String,

    /// Copy of the destination the estimate was computed against
    pub destination: Destination,

    /// First day of the trip
    pub start_date: NaiveDate,

    /// Last day of the trip
    pub end_date: NaiveDate,

    /// Number of travelers
    pub travelers: u32,

    /// Named expense lines, in allocation order
    pub expenses: Vec<ExpenseLine>,

    /// Total budgeted amount
    pub total_budget: Money,

    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the record was created, assigned by the store
    pub created_at: DateTime<Utc>,
}

/// A budget as submitted to the store, before an id and timestamp exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetDraft {
    pub name: String,
    pub destination: Destination,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub expenses: Vec<ExpenseLine>,
    pub total_budget: Money,
    pub notes: Option<String>,
}

impl BudgetDraft {
    /// Promote the draft into a full record with a fresh id and timestamp
    pub(crate) fn into_budget(self) -> SavedBudget {
        SavedBudget {
            id: BudgetId::new(),
            name: self.name,
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            travelers: self.travelers,
            expenses: self.expenses,
            total_budget: self.total_budget,
            notes: self.notes,
            created_at: Utc::now(),
        }
    }
}
