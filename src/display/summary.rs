//! Summary and settings display

use crate::models::{BalanceStatus, LedgerSummary, Settings};

/// Format the totals block
pub fn format_summary(summary: &LedgerSummary, settings: &Settings) -> String {
    let marker = match summary.status {
        BalanceStatus::Positive => "+",
        BalanceStatus::Negative => "!",
        BalanceStatus::Zero => "=",
    };

    let mut output = String::new();
    output.push_str("Budget Summary\n");
    output.push_str(&"=".repeat(36));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:   {:>14}  ({} entries)\n",
        settings.format_currency(summary.total_income),
        summary.income_count
    ));
    output.push_str(&format!(
        "Total Expenses: {:>14}  ({} entries)\n",
        settings.format_currency(summary.total_expenses),
        summary.expense_count
    ));
    output.push_str(&"-".repeat(36));
    output.push('\n');
    output.push_str(&format!(
        "Balance:        {:>14}  {} {}\n",
        settings.format_currency(summary.balance),
        marker,
        summary.status
    ));

    if summary.category_count > 0 {
        output.push_str(&format!(
            "\nBudgeted across {} categories: {}\n",
            summary.category_count,
            settings.format_currency(summary.total_budgeted)
        ));
    }

    output
}

pub fn format_settings(settings: &Settings) -> String {
    format!("Currency: {}\nTheme:    {}\n", settings.currency, settings.theme)
}
