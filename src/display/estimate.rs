//! Estimate display formatting
//!
//! Formats a cost breakdown for terminal output.

use crate::models::CostBreakdown;

/// Format a breakdown as a two-column table with a total row
pub fn format_breakdown(breakdown: &CostBreakdown) -> String {
    let categories = breakdown.categories();

    let label_width = categories
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(8)
        .max("Category".len());

    let amount_width = categories
        .iter()
        .map(|(_, amount)| amount.to_string().len())
        .max()
        .unwrap_or(6)
        .max(breakdown.total.to_string().len())
        .max("Amount".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<label_width$}  {:>amount_width$}\n",
        "Category", "Amount",
    ));
    output.push_str(&format!(
        "{:-<label_width$}  {:->amount_width$}\n",
        "", "",
    ));

    for (label, amount) in categories {
        output.push_str(&format!(
            "{:<label_width$}  {:>amount_width$}\n",
            label,
            amount.to_string(),
        ));
    }

    output.push_str(&format!(
        "{:-<label_width$}  {:->amount_width$}\n",
        "", "",
    ));
    output.push_str(&format!(
        "{:<label_width$}  {:>amount_width$}  ({})\n",
        "Total",
        breakdown.total.to_string(),
        breakdown.currency,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_breakdown_contains_all_rows() {
        let breakdown = CostBreakdown::from_categories(
            Money::from_units(84),
            Money::from_units(63),
            Money::from_units(232),
            Money::from_units(21),
            Money::from_units(11),
            "USD",
        );

        let output = format_breakdown(&breakdown);
        assert!(output.contains("Accommodation"));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("Miscellaneous"));
        assert!(output.contains("$232"));
        assert!(output.contains("$411"));
        assert!(output.contains("(USD)"));
    }
}
