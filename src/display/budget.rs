//! Saved-budget display formatting
//!
//! Formats the saved-budget list and single-record detail views for
//! terminal output.

use crate::models::SavedBudget;

/// Format a list of saved budgets as a table
pub fn format_budget_list(budgets: &[SavedBudget]) -> String {
    if budgets.is_empty() {
        return "No saved budgets yet.".to_string();
    }

    let name_width = budgets
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max("Name".len());

    let dest_width = budgets
        .iter()
        .map(|b| b.destination.name.len())
        .max()
        .unwrap_or(11)
        .max("Destination".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<dest_width$}  {:<23}  {:>9}  {:>10}\n",
        "ID", "Name", "Destination", "Dates", "Travelers", "Total",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<dest_width$}  {:-<23}  {:->9}  {:->10}\n",
        "", "", "", "", "", "",
    ));

    for budget in budgets {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<dest_width$}  {} - {}  {:>9}  {:>10}\n",
            budget.id.to_string(),
            budget.name,
            budget.destination.name,
            budget.start_date,
            budget.end_date,
            budget.travelers,
            budget.total_budget.to_string(),
        ));
    }

    output
}

/// Format a single saved budget with its expense lines
pub fn format_budget_details(budget: &SavedBudget) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", budget.name, budget.id));
    output.push_str(&format!(
        "  Destination: {}, {} ({})\n",
        budget.destination.name, budget.destination.country, budget.destination.continent,
    ));
    output.push_str(&format!(
        "  Dates: {} - {} ({} travelers)\n",
        budget.start_date, budget.end_date, budget.travelers,
    ));
    output.push_str(&format!(
        "  Created: {}\n",
        budget.created_at.format("%Y-%m-%d %H:%M UTC"),
    ));

    output.push_str("\n  Expenses:\n");
    for line in &budget.expenses {
        let marker = if line.is_custom { " (custom)" } else { "" };
        output.push_str(&format!(
            "    {:<26} {:>10}{}\n",
            line.category,
            line.amount.to_string(),
            marker,
        ));
    }
    output.push_str(&format!("    {:<26} {:>10}\n", "Total", budget.total_budget.to_string()));

    if let Some(notes) = &budget.notes {
        output.push_str(&format!("\n  Notes: {}\n", notes));
    }

    output
}
