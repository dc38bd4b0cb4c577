//! Saved-budget repository for JSON storage
//!
//! The repository owns the ordered collection of saved budgets. Records keep
//! insertion order, and every mutation persists the full collection before
//! returning. Callers get snapshot clones, never live references.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TravelError, TravelResult};
use crate::models::{BudgetDraft, BudgetId, SavedBudget};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Serializable budget collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<SavedBudget>,
}

/// Repository for saved-budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<SavedBudget>>,
}

impl BudgetRepository {
    /// Create a new budget repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    /// Load the collection from disk
    ///
    /// A missing or corrupt data file loads as an empty collection (the
    /// corruption is logged by the reader), never as a partial one.
    pub fn load(&self) -> TravelResult<()> {
        let file_data: BudgetData = read_json_or_default(&self.path);

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| TravelError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *budgets = file_data.budgets;
        Ok(())
    }

    /// Save the collection to disk
    pub fn save(&self) -> TravelResult<()> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TravelError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: budgets.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all saved budgets in insertion order
    pub fn list(&self) -> TravelResult<Vec<SavedBudget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TravelError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.clone())
    }

    /// Get a saved budget by ID
    pub fn get(&self, id: &BudgetId) -> TravelResult<Option<SavedBudget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TravelError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().find(|b| b.id == *id).cloned())
    }

    /// Add a new budget to the end of the collection, then persist
    ///
    /// The identifier and creation timestamp are assigned here; the caller
    /// never supplies them.
    pub fn add(&self, draft: BudgetDraft) -> TravelResult<SavedBudget> {
        let budget = draft.into_budget();

        {
            let mut budgets = self.budgets.write().map_err(|e| {
                TravelError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            budgets.push(budget.clone());
        }

        self.save()?;
        Ok(budget)
    }

    /// Remove the budget with the given ID, then persist
    ///
    /// Removing an unknown ID is a silent no-op, not an error.
    pub fn remove(&self, id: &BudgetId) -> TravelResult<()> {
        {
            let mut budgets = self.budgets.write().map_err(|e| {
                TravelError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            budgets.retain(|b| b.id != *id);
        }

        self.save()
    }

    /// Replace the budget whose ID matches, in place, then persist
    ///
    /// Position in the collection is preserved, and the stored `id` and
    /// `created_at` always win over whatever the caller passed in. An
    /// unknown ID is a silent no-op.
    pub fn update(&self, record: SavedBudget) -> TravelResult<()> {
        {
            let mut budgets = self.budgets.write().map_err(|e| {
                TravelError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            if let Some(existing) = budgets.iter_mut().find(|b| b.id == record.id) {
                let created_at = existing.created_at;
                *existing = record;
                existing.created_at = created_at;
            }
        }

        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostTier, Destination, ExpenseLine, Money};
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> BudgetRepository {
        BudgetRepository::new(dir.path().join("budgets.json"))
    }

    fn draft(name: &str) -> BudgetDraft {
        BudgetDraft {
            name: name.into(),
            destination: Destination {
                id: "rome".into(),
                name: "Rome".into(),
                country: "Italy".into(),
                continent: "Europe".into(),
                cost_level: CostTier::Moderate,
            },
            start_date: "2026-10-01".parse().unwrap(),
            end_date: "2026-10-05".parse().unwrap(),
            travelers: 2,
            expenses: vec![ExpenseLine::estimated("Accommodation", Money::from_units(384))],
            total_budget: Money::from_units(960),
            notes: None,
        }
    }

    #[test]
    fn test_add_assigns_identity_and_persists() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let saved = repo.add(draft("Rome long weekend")).unwrap();
        assert!(!saved.id.as_uuid().is_nil());

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], saved);
        assert!(dir.path().join("budgets.json").exists());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        repo.add(draft("first")).unwrap();
        repo.add(draft("second")).unwrap();
        repo.add(draft("third")).unwrap();

        let names: Vec<_> = repo.list().unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = TempDir::new().unwrap();

        let first = repo(&dir);
        let a = first.add(draft("alpha")).unwrap();
        let b = first.add(draft("beta")).unwrap();

        // A fresh repository over the same file sees the same records
        let second = repo(&dir);
        second.load().unwrap();
        assert_eq!(second.list().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        repo.add(draft("keep me")).unwrap();
        repo.remove(&BudgetId::new()).unwrap();

        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_deletes_matching_record() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let a = repo.add(draft("a")).unwrap();
        let b = repo.add(draft("b")).unwrap();

        repo.remove(&a.id).unwrap();

        let remaining = repo.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
    }

    #[test]
    fn test_update_preserves_position_and_identity() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let a = repo.add(draft("a")).unwrap();
        let b = repo.add(draft("b")).unwrap();
        let c = repo.add(draft("c")).unwrap();

        let mut edited = b.clone();
        edited.name = "b, renamed".into();
        edited.notes = Some("bring an umbrella".into());
        // A caller-tampered timestamp must not survive the update
        edited.created_at = "2001-01-01T00:00:00Z".parse().unwrap();

        repo.update(edited).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed[0].id, a.id);
        assert_eq!(listed[1].id, b.id);
        assert_eq!(listed[2].id, c.id);

        assert_eq!(listed[1].name, "b, renamed");
        assert_eq!(listed[1].notes.as_deref(), Some("bring an umbrella"));
        assert_eq!(listed[1].created_at, b.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let a = repo.add(draft("original")).unwrap();

        let mut ghost = a.clone();
        ghost.id = BudgetId::new();
        ghost.name = "ghost".into();
        repo.update(ghost).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "original");
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join("budgets.json"), "{ definitely not json").unwrap();

        let repo = repo(&dir);
        repo.load().unwrap();
        assert!(repo.list().unwrap().is_empty());
    }
}
