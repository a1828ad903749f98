//! Configuration module for spendbook
//!
//! This module provides:
//! - Settings file location resolution
//! - User settings loading and saving

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
