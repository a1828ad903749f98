//! User settings for spendbook
//!
//! Presentation and credential preferences, read from a JSON settings file.
//! Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::credential::{CredentialPolicy, CredentialScheme};
use crate::error::TrackerError;

/// User settings for spendbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How credentials are stored and checked
    #[serde(default)]
    pub credentials: CredentialPolicy,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// How many activity entries the menu shows, newest last
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "error".to_string()
}

fn default_activity_limit() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            credentials: CredentialPolicy::default(),
            log_filter: default_log_filter(),
            activity_limit: default_activity_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Apply command-line overrides on top of loaded values
    pub fn with_overrides(
        mut self,
        currency_symbol: Option<String>,
        scheme: Option<CredentialScheme>,
    ) -> Self {
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol;
        }
        if let Some(scheme) = scheme {
            self.credentials.scheme = scheme;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.credentials.scheme, CredentialScheme::Plaintext);
        assert_eq!(settings.log_filter, "error");
        assert_eq!(settings.activity_limit, 20);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_default(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            activity_limit: 5,
            ..Settings::default().with_overrides(Some("€".into()), Some(CredentialScheme::Argon2))
        };
        std::fs::write(paths.settings_file(), serde_json::to_string_pretty(&settings).unwrap())
            .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.credentials.scheme, CredentialScheme::Argon2);
        assert_eq!(loaded.activity_limit, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.schema_version, 1);
        assert_eq!(loaded.credentials, CredentialPolicy::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let result = Settings::load_or_default(&paths);
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_overrides_leave_unset_fields() {
        let settings = Settings::default().with_overrides(None, None);
        assert_eq!(settings, Settings::default());
    }
}
