//! Persistence slots
//!
//! A slot is one named key in a local key-value store that holds the whole
//! serialized ledger. The store reads it once at startup and rewrites it after
//! every mutation; nothing else touches it.

use std::path::{Path, PathBuf};

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_text_optional, write_atomic};

/// A single named location holding the serialized ledger
pub trait PersistenceSlot {
    /// Key of the slot
    fn name(&self) -> &str;

    /// Read the saved document, `None` if nothing was ever written
    fn load(&self) -> BudgetResult<Option<String>>;

    /// Replace the saved document
    fn store(&mut self, contents: &str) -> BudgetResult<()>;
}

/// Slot backed by `<data_dir>/<name>.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileSlot {
    name: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// The slot called `name` inside the configured data directory
    pub fn in_data_dir(paths: &BudgetPaths, name: &str) -> Self {
        Self::new(name, paths.slot_file(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceSlot for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> BudgetResult<Option<String>> {
        read_text_optional(&self.path)
    }

    fn store(&mut self, contents: &str) -> BudgetResult<()> {
        write_atomic(&self.path, contents.as_bytes()).map_err(|e| match e {
            BudgetError::Persistence(msg) => {
                BudgetError::Persistence(format!("slot '{}': {}", self.name, msg))
            }
            other => other,
        })
    }
}

/// In-process slot, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    name: String,
    contents: Option<String>,
}

impl MemorySlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: None,
        }
    }

    /// A slot that already holds a saved document
    pub fn with_contents(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Some(contents.into()),
        }
    }

    /// The last document stored
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl PersistenceSlot for MemorySlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> BudgetResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn store(&mut self, contents: &str) -> BudgetResult<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}
