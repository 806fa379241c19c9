//! Settings CLI commands

use clap::Subcommand;

use crate::display::format_settings;
use crate::error::BudgetResult;
use crate::services::LedgerStore;
use crate::storage::PersistenceSlot;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current currency and theme
    Show,

    /// Set the currency symbol placed before amounts
    Currency {
        /// Symbol or prefix (e.g., "$", "€", "CHF ")
        symbol: String,
    },

    /// Set the display theme
    Theme {
        /// light or dark
        theme: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command<S: PersistenceSlot>(
    store: &mut LedgerStore<S>,
    cmd: SettingsCommands,
) -> BudgetResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(store.settings()));
        }

        SettingsCommands::Currency { symbol } => {
            store.update_currency(&symbol)?;
            println!(
                "Currency set to '{}' (e.g. {})",
                symbol,
                store.format_currency(crate::models::Money::from_cents(123456))
            );
        }

        // The theme hook registered by the caller reports the change
        SettingsCommands::Theme { theme } => {
            store.update_theme_named(&theme)?;
        }
    }

    Ok(())
}
