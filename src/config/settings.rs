//! Client settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Default REST API path prefix.
pub const DEFAULT_API_PATH: &str = "/rest/api/3";

/// Default Agile API path prefix.
pub const DEFAULT_AGILE_PATH: &str = "/rest/agile/1.0";

/// Largest accepted `max_retries`.
pub const MAX_RETRIES_LIMIT: u32 = 10;

/// Settings shared by every profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The name of the profile used when none is given.
    pub default_profile: Option<String>,
    /// REST API path prefix. Empty means the default.
    pub api_path: String,
    /// Agile API path prefix. Empty means the default.
    pub agile_path: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Attempts made for a read before giving up.
    pub max_retries: u32,
    /// Base delay between read retries in milliseconds, doubled per attempt.
    pub retry_delay_ms: u64,
    /// Page size for board, sprint and sprint-issue listings.
    pub board_page_size: u32,
    /// Page size for JQL search.
    pub search_page_size: u32,
}

impl Settings {
    /// The REST API path prefix, falling back to the default when empty.
    pub fn api_path(&self) -> &str {
        non_empty_or(&self.api_path, DEFAULT_API_PATH)
    }

    /// The Agile API path prefix, falling back to the default when empty.
    pub fn agile_path(&self) -> &str {
        non_empty_or(&self.agile_path, DEFAULT_AGILE_PATH)
    }

    /// Check numeric settings for values the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.max_retries == 0 || self.max_retries > MAX_RETRIES_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_retries must be between 1 and {}",
                MAX_RETRIES_LIMIT
            )));
        }
        if self.board_page_size == 0 || self.search_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "page sizes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_profile: None,
            api_path: DEFAULT_API_PATH.to_string(),
            agile_path: DEFAULT_AGILE_PATH.to_string(),
            timeout_secs: 30,
            max_retries: 3,
            retry_delay_ms: 1000,
            board_page_size: 50,
            search_page_size: 15,
        }
    }
}
