//! Budget service
//!
//! Business logic on top of the budget store: converting estimates into
//! saved records, validating trip parameters before anything is persisted,
//! and editing existing records.

use crate::error::{TravelError, TravelResult};
use crate::models::{
    BudgetDraft, BudgetId, CostBreakdown, Destination, SavedBudget, TripDates, TripParameters,
};
use crate::storage::Storage;

/// Service for saved-budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Save an estimate as a named budget record
    ///
    /// The breakdown's category lines become the record's expense lines and
    /// its total becomes the budgeted amount. Trip parameters are validated
    /// here so degenerate trips never reach the store.
    pub fn save_estimate(
        &self,
        name: &str,
        destination: Destination,
        dates: TripDates,
        travelers: u32,
        breakdown: &CostBreakdown,
        notes: Option<String>,
    ) -> TravelResult<SavedBudget> {
        if name.trim().is_empty() {
            return Err(TravelError::Validation("budget name must not be empty".into()));
        }

        let params = TripParameters::new(
            destination.id.clone(),
            dates,
            travelers,
            destination.cost_level,
        );
        params.validate()?;

        if !breakdown.is_consistent() {
            return Err(TravelError::Validation(
                "estimate total does not match its categories".into(),
            ));
        }

        self.storage.budgets.add(BudgetDraft {
            name: name.trim().to_string(),
            destination,
            start_date: dates.start,
            end_date: dates.end,
            travelers,
            expenses: breakdown.expense_lines(),
            total_budget: breakdown.total,
            notes: notes.filter(|n| !n.trim().is_empty()),
        })
    }

    /// All saved budgets in insertion order
    pub fn list(&self) -> TravelResult<Vec<SavedBudget>> {
        self.storage.budgets.list()
    }

    /// Look up a saved budget, erroring if it does not exist
    pub fn get(&self, id: &BudgetId) -> TravelResult<SavedBudget> {
        self.storage
            .budgets
            .get(id)?
            .ok_or_else(|| TravelError::budget_not_found(id.to_string()))
    }

    /// Resolve a budget from user input
    ///
    /// Accepts the full UUID or the short display form from the list view
    /// ("bgt-1a2b3c4d" or just the leading hex). A short key must match
    /// exactly one record.
    pub fn resolve(&self, key: &str) -> TravelResult<SavedBudget> {
        if let Ok(id) = key.parse::<BudgetId>() {
            return self.get(&id);
        }

        let prefix = key.strip_prefix("bgt-").unwrap_or(key).to_lowercase();
        if prefix.is_empty() {
            return Err(TravelError::budget_not_found(key));
        }

        let mut matches: Vec<SavedBudget> = self
            .list()?
            .into_iter()
            .filter(|b| b.id.as_uuid().to_string().starts_with(&prefix))
            .collect();

        match matches.len() {
            0 => Err(TravelError::budget_not_found(key)),
            1 => Ok(matches.remove(0)),
            n => Err(TravelError::Validation(format!(
                "'{}' matches {} budgets, use a longer id",
                key, n
            ))),
        }
    }

    /// Remove a saved budget
    ///
    /// Removing an unknown ID is a no-op, mirroring the store.
    pub fn remove(&self, id: &BudgetId) -> TravelResult<()> {
        self.storage.budgets.remove(id)
    }

    /// Edit the name and/or notes of a saved budget
    ///
    /// Only the provided fields change; identity and trip data stay as they
    /// are. Unlike the raw store update, editing a missing record is an
    /// error here so the CLI can report it.
    pub fn edit(
        &self,
        id: &BudgetId,
        name: Option<String>,
        notes: Option<String>,
    ) -> TravelResult<SavedBudget> {
        let mut budget = self.get(id)?;

        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(TravelError::Validation("budget name must not be empty".into()));
            }
            budget.name = name.trim().to_string();
        }

        if let Some(notes) = notes {
            budget.notes = if notes.trim().is_empty() {
                None
            } else {
                Some(notes)
            };
        }

        self.storage.budgets.update(budget.clone())?;
        Ok(budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::VoyagePaths;
    use crate::models::Money;
    use crate::services::catalog::builtin_destinations;
    use crate::services::estimator::estimate_local;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> Storage {
        Storage::new(VoyagePaths::with_base_dir(dir.path().to_path_buf())).unwrap()
    }

    fn bangkok() -> Destination {
        builtin_destinations()
            .into_iter()
            .find(|d| d.id == "bangkok")
            .unwrap()
    }

    fn dates(start: &str, end: &str) -> TripDates {
        TripDates::new(start.parse().unwrap(), end.parse().unwrap())
    }

    fn sample_breakdown(destination: &Destination, dates: TripDates, travelers: u32) -> CostBreakdown {
        estimate_local(&TripParameters::new(
            destination.id.clone(),
            dates,
            travelers,
            destination.cost_level,
        ))
    }

    #[test]
    fn test_save_estimate_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let destination = bangkok();
        let trip = dates("2026-09-01", "2026-09-04");
        let breakdown = sample_breakdown(&destination, trip, 2);

        let saved = service
            .save_estimate(
                "Street food week",
                destination.clone(),
                trip,
                2,
                &breakdown,
                Some("check visa rules".into()),
            )
            .unwrap();

        assert_eq!(saved.destination, destination);
        assert_eq!(saved.travelers, 2);
        assert_eq!(saved.total_budget, breakdown.total);
        assert_eq!(saved.expenses.len(), 5);
        assert_eq!(saved.expenses[0].category, "Accommodation");
        assert_eq!(saved.expenses[0].amount, breakdown.accommodation);

        let listed = service.list().unwrap();
        assert_eq!(listed, vec![saved]);
    }

    #[test]
    fn test_save_estimate_rejects_blank_name() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let destination = bangkok();
        let trip = dates("2026-09-01", "2026-09-04");
        let breakdown = sample_breakdown(&destination, trip, 2);

        let err = service
            .save_estimate("   ", destination, trip, 2, &breakdown, None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_save_estimate_rejects_inverted_dates() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let destination = bangkok();
        let trip = dates("2026-09-04", "2026-09-01");
        let breakdown = sample_breakdown(&destination, trip, 2);

        let err = service
            .save_estimate("Backwards", destination, trip, 2, &breakdown, None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_save_estimate_rejects_zero_travelers() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let destination = bangkok();
        let trip = dates("2026-09-01", "2026-09-04");
        let breakdown = sample_breakdown(&destination, trip, 2);

        assert!(service
            .save_estimate("Nobody going", destination, trip, 0, &breakdown, None)
            .is_err());
    }

    #[test]
    fn test_save_estimate_rejects_inconsistent_breakdown() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let destination = bangkok();
        let trip = dates("2026-09-01", "2026-09-04");
        let mut breakdown = sample_breakdown(&destination, trip, 2);
        breakdown.total = Money::from_units(1);

        assert!(service
            .save_estimate("Tampered", destination, trip, 2, &breakdown, None)
            .is_err());
    }

    #[test]
    fn test_edit_changes_only_requested_fields() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let destination = bangkok();
        let trip = dates("2026-09-01", "2026-09-04");
        let breakdown = sample_breakdown(&destination, trip, 2);
        let saved = service
            .save_estimate("Original", destination, trip, 2, &breakdown, None)
            .unwrap();

        let edited = service
            .edit(&saved.id, Some("Renamed".into()), Some("pack light".into()))
            .unwrap();

        assert_eq!(edited.id, saved.id);
        assert_eq!(edited.created_at, saved.created_at);
        assert_eq!(edited.name, "Renamed");
        assert_eq!(edited.notes.as_deref(), Some("pack light"));
        assert_eq!(edited.total_budget, saved.total_budget);
    }

    #[test]
    fn test_edit_missing_budget_errors() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let err = service.edit(&BudgetId::new(), Some("x".into()), None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_by_short_id() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        let destination = bangkok();
        let trip = dates("2026-09-01", "2026-09-04");
        let breakdown = sample_breakdown(&destination, trip, 2);
        let saved = service
            .save_estimate("Findable", destination, trip, 2, &breakdown, None)
            .unwrap();

        // Full UUID, short display form, and bare prefix all resolve
        let by_uuid = service.resolve(&saved.id.as_uuid().to_string()).unwrap();
        assert_eq!(by_uuid.id, saved.id);

        let by_display = service.resolve(&saved.id.to_string()).unwrap();
        assert_eq!(by_display.id, saved.id);

        assert!(service.resolve("bgt-00000000").is_err());
    }

    #[test]
    fn test_remove_unknown_id_is_silent() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let service = BudgetService::new(&storage);

        assert!(service.remove(&BudgetId::new()).is_ok());
    }
}
