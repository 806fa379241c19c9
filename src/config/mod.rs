//! Configuration module for the budget tracker
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - Application configuration persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{AppConfig, DisplayOptions};
