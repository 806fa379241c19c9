//! Whole-ledger CLI commands: export, import, clear

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_file_name, write_export, ExportFormat};
use crate::services::LedgerStore;
use crate::storage::PersistenceSlot;

/// Handle `export`
pub fn handle_export<S: PersistenceSlot>(
    store: &LedgerStore<S>,
    output: Option<PathBuf>,
    format: ExportFormat,
    to_stdout: bool,
) -> BudgetResult<()> {
    if to_stdout {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        write_export(store.state(), format, &mut lock)?;
        lock.flush()?;
        return Ok(());
    }

    let output =
        output.unwrap_or_else(|| PathBuf::from(export_file_name(Local::now().date_naive(), format)));

    let file = File::create(&output).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_export(store.state(), format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    println!("Ledger exported to: {}", output.display());
    Ok(())
}

/// Handle `import`
pub fn handle_import<S: PersistenceSlot>(store: &mut LedgerStore<S>, file: &Path) -> BudgetResult<()> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| BudgetError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let state = store.import_state(&text)?;
    println!("Data imported successfully from {}", file.display());
    println!(
        "  {} income, {} expenses, {} categories",
        state.income.len(),
        state.expenses.len(),
        state.categories.len()
    );
    Ok(())
}

/// Handle `clear`; nothing happens without `force`
pub fn handle_clear<S: PersistenceSlot>(store: &mut LedgerStore<S>, force: bool) -> BudgetResult<()> {
    if !force {
        let summary = store.summary();
        println!(
            "WARNING: This will delete {} income entries, {} expenses and {} categories.",
            summary.income_count, summary.expense_count, summary.category_count
        );
        println!("This action cannot be undone. Currency and theme are kept.");
        println!("To proceed, run again with --force flag:");
        println!("  budget clear --force");
        return Ok(());
    }

    store.clear_all_data()?;
    println!("All income, expenses and categories cleared.");
    Ok(())
}
