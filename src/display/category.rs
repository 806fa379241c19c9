//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Settings};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format categories as a table with budget, spent and remaining columns
pub fn format_category_table(categories: &[Category], settings: &Settings) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_string();
    }

    let rows = categories.iter().map(|c| {
        let over = if c.is_over_budget() { " (over)" } else { "" };
        CategoryRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            budget: settings.format_currency(c.budget),
            spent: settings.format_currency(c.spent),
            remaining: format!("{}{}", settings.format_currency(c.remaining()), over),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}
