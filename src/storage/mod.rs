//! Storage layer for the budget tracker
//!
//! Provides JSON file storage with atomic writes and the persistence slots
//! the ledger store saves into.

pub mod file_io;
pub mod slot;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use slot::{FileSlot, MemorySlot, PersistenceSlot};
