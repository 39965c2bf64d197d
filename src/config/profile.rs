//! Jira connection profiles.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Connection details for one Jira site.
///
/// The API token is not part of the profile; it lives in the OS keyring
/// under the profile name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Unique, whitespace-free profile name.
    pub name: String,
    /// Site URL, e.g. `https://company.atlassian.net`.
    pub url: String,
    /// Account email used for Basic auth.
    pub email: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, url: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            email: email.into(),
        }
    }

    /// Validate this profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(invalid("profile name cannot be empty".to_string()));
        }
        if self.name.contains(char::is_whitespace) {
            return Err(invalid(format!(
                "profile name '{}' cannot contain whitespace",
                self.name
            )));
        }

        if self.url.is_empty() {
            return Err(invalid(format!("profile '{}': URL cannot be empty", self.name)));
        }
        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(invalid(format!(
                "profile '{}': URL must start with http:// or https://",
                self.name
            )));
        }

        if self.email.is_empty() {
            return Err(invalid(format!("profile '{}': email cannot be empty", self.name)));
        }
        if !self.email.contains('@') {
            return Err(invalid(format!(
                "profile '{}': '{}' does not appear to be a valid email address",
                self.name, self.email
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError(message)
}
