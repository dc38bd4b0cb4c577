//! Cost estimate models
//!
//! A [`CostBreakdown`] is the output of one estimation call: five category
//! amounts plus their sum, in a single currency. It is never persisted on
//! its own; saving converts it into the expense lines of a budget record.

use serde::{Deserialize, Serialize};

use super::budget::ExpenseLine;
use super::money::Money;

/// Display labels for the five estimate categories, in allocation order
pub const CATEGORY_LABELS: [&str; 5] = [
    "Accommodation",
    "Food & Dining",
    "Transportation",
    "Activities & Sightseeing",
    "Miscellaneous",
];

/// Estimated costs for one trip, split across five categories
///
/// Invariant: `total` equals the sum of the five category amounts. The
/// constructor derives the total from the parts, so a locally built
/// breakdown cannot drift; remote payloads are checked on receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub accommodation: Money,
    pub food: Money,
    pub transportation: Money,
    pub activities: Money,
    pub other: Money,
    pub total: Money,
    pub currency: String,
}

impl CostBreakdown {
    /// Build a breakdown from category amounts; the total is the sum of the
    /// parts, not an independently rounded figure.
    pub fn from_categories(
        accommodation: Money,
        food: Money,
        transportation: Money,
        activities: Money,
        other: Money,
        currency: impl Into<String>,
    ) -> Self {
        let total = accommodation + food + transportation + activities + other;
        Self {
            accommodation,
            food,
            transportation,
            activities,
            other,
            total,
            currency: currency.into(),
        }
    }

    /// Category amounts in allocation order, paired with their labels
    pub fn categories(&self) -> [(&'static str, Money); 5] {
        [
            (CATEGORY_LABELS[0], self.accommodation),
            (CATEGORY_LABELS[1], self.food),
            (CATEGORY_LABELS[2], self.transportation),
            (CATEGORY_LABELS[3], self.activities),
            (CATEGORY_LABELS[4], self.other),
        ]
    }

    /// Sum of the five category amounts
    pub fn category_sum(&self) -> Money {
        self.categories().iter().map(|(_, amount)| *amount).sum()
    }

    /// Whether the stored total matches the category sum
    pub fn is_consistent(&self) -> bool {
        self.total == self.category_sum()
    }

    /// Convert into named expense lines for a budget record
    pub fn expense_lines(&self) -> Vec<ExpenseLine> {
        self.categories()
            .into_iter()
            .map(|(label, amount)| ExpenseLine::estimated(label, amount))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostBreakdown {
        CostBreakdown::from_categories(
            Money::from_units(84),
            Money::from_units(63),
            Money::from_units(232),
            Money::from_units(21),
            Money::from_units(11),
            "USD",
        )
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let breakdown = sample();
        assert_eq!(breakdown.total.units(), 411);
        assert!(breakdown.is_consistent());
    }

    #[test]
    fn test_inconsistent_breakdown_detected() {
        let mut breakdown = sample();
        breakdown.total = Money::from_units(999);
        assert!(!breakdown.is_consistent());
    }

    #[test]
    fn test_expense_lines_carry_labels_and_amounts() {
        let lines = sample().expense_lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].category, "Accommodation");
        assert_eq!(lines[0].amount.units(), 84);
        assert_eq!(lines[4].category, "Miscellaneous");
        assert_eq!(lines[4].amount.units(), 11);
        assert!(lines.iter().all(|line| !line.is_custom));
    }
}
