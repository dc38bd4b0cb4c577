//! Destination catalog display formatting

use crate::models::Destination;

/// Format the destination catalog as a table
pub fn format_destination_list(destinations: &[Destination]) -> String {
    if destinations.is_empty() {
        return "No destinations available.".to_string();
    }

    let name_width = destinations
        .iter()
        .map(|d| d.name.len())
        .max()
        .unwrap_or(4)
        .max("Name".len());

    let country_width = destinations
        .iter()
        .map(|d| d.country.len())
        .max()
        .unwrap_or(7)
        .max("Country".len());

    let continent_width = destinations
        .iter()
        .map(|d| d.continent.len())
        .max()
        .unwrap_or(9)
        .max("Continent".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<name_width$}  {:<country_width$}  {:<continent_width$}  {}\n",
        "ID", "Name", "Country", "Continent", "Tier",
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<name_width$}  {:-<country_width$}  {:-<continent_width$}  {:-<8}\n",
        "", "", "", "", "",
    ));

    for dest in destinations {
        output.push_str(&format!(
            "{:<10}  {:<name_width$}  {:<country_width$}  {:<continent_width$}  {}\n",
            dest.id, dest.name, dest.country, dest.continent, dest.cost_level,
        ));
    }

    output
}
