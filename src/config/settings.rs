//! User settings for spendtrack
//!
//! Holds the persistence API location, display preferences and the budget
//! goals. Budgets live here rather than on the server: they are local
//! preferences, not expense data.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::SpendPaths;
use crate::api::http::DEFAULT_API_URL;
use crate::error::SpendError;
use crate::file_io::{read_json, write_json_atomic};
use crate::models::BudgetGoals;

/// User settings for spendtrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the persistence API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Seconds before an API request is abandoned
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Per-category budget goals
    #[serde(default)]
    pub budgets: BudgetGoals,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            currency_symbol: default_currency(),
            budgets: BudgetGoals::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| {
            SpendError::Config(format!("Failed to load settings: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        self.validate()?;
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Check the values that deserialization alone cannot
    pub fn validate(&self) -> Result<(), SpendError> {
        Self::validate_api_url(&self.api_url)?;
        if self.request_timeout_secs == 0 {
            return Err(SpendError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        self.budgets
            .validate()
            .map_err(|e| SpendError::Config(e.to_string()))
    }

    /// Check an API base URL, from the file or a command-line override
    pub fn validate_api_url(api_url: &str) -> Result<(), SpendError> {
        if api_url.trim().is_empty() {
            return Err(SpendError::Config("api_url cannot be empty".into()));
        }
        reqwest::Url::parse(api_url).map_err(|e| {
            SpendError::Config(format!("api_url '{}' is not a valid URL: {}", api_url, e))
        })?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
