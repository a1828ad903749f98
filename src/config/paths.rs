//! Path management for spendbook
//!
//! Only the settings file is ever read from disk; tracker data stays in
//! memory.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit settings file (the `--config` flag)
//! 2. A config directory (`--config-dir` or `SPENDBOOK_CONFIG_DIR`)
//! 3. The platform config directory from `directories::ProjectDirs`
//!    (e.g. `~/.config/spendbook` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SPENDBOOK_CONFIG_DIR";

const SETTINGS_FILE_NAME: &str = "config.json";

/// Locations used by spendbook
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    settings_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths given an explicit file and/or directory override
    ///
    /// # Errors
    ///
    /// Returns an error if neither override is given and no home directory
    /// can be determined.
    pub fn resolve(
        explicit_file: Option<PathBuf>,
        env_dir: Option<PathBuf>,
    ) -> Result<Self, TrackerError> {
        if let Some(file) = explicit_file {
            return Ok(Self::with_settings_file(file));
        }

        if let Some(dir) = env_dir {
            return Ok(Self::with_base_dir(dir));
        }

        let dirs = ProjectDirs::from("", "", "spendbook").ok_or_else(|| {
            TrackerError::Config("Could not determine a configuration directory".into())
        })?;
        Ok(Self::with_base_dir(dirs.config_dir().to_path_buf()))
    }

    /// Use `config.json` inside a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            settings_file: base_dir.join(SETTINGS_FILE_NAME),
        }
    }

    pub fn with_settings_file(settings_file: PathBuf) -> Self {
        Self { settings_file }
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }
}
