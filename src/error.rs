//! Crate-level error type.
//!
//! Aggregates configuration and API errors so that entry points which touch
//! both (such as [`crate::connect`]) can return a single type, and maps them
//! to messages suitable for end users.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Errors returned by entry points that span configuration and the API.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// A message for end users, without technical detail.
    pub fn user_message(&self) -> String {
        match self {
            Error::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find the configuration directory.".to_string()
                }
                ConfigError::CreateDirError(_) | ConfigError::WriteError(_) => {
                    "Could not save configuration. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => "Could not read the configuration file.".to_string(),
                ConfigError::ParseError(_) | ConfigError::SerializeError(_) => {
                    "The configuration file is invalid. Please check its format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                ConfigError::ProfileNotFound(name) => format!("Profile '{}' not found.", name),
            },
            Error::Api(e) => match e {
                ApiError::Unauthorized => {
                    "Authentication failed. Please check your email and API token.".to_string()
                }
                ApiError::Forbidden => {
                    "Access denied. You don't have permission to access this resource.".to_string()
                }
                ApiError::NotFound(resource) => format!("'{}' was not found.", resource),
                ApiError::BadRequest(msg) => format!("Jira rejected the request: {}", msg),
                ApiError::Conflict => {
                    "The resource was modified concurrently. Please try again.".to_string()
                }
                ApiError::RateLimited => {
                    "Too many requests. Please wait a moment and try again.".to_string()
                }
                ApiError::ServerError(_) => "Jira server error. Please try again later.".to_string(),
                ApiError::Network(_) => {
                    "Connection failed. Please check your internet connection.".to_string()
                }
                ApiError::InvalidUrl(_) => "Invalid Jira URL in configuration.".to_string(),
                ApiError::Keyring(_) => {
                    "Could not read the API token from secure storage.".to_string()
                }
                ApiError::InvalidResponse(_) => {
                    "Unexpected response from Jira. Please try again.".to_string()
                }
                ApiError::Serialization(_) => "Could not encode the request.".to_string(),
                ApiError::ConnectionFailed(_) => {
                    "Could not connect to Jira. Please check your URL and network.".to_string()
                }
            },
        }
    }

    /// Whether retrying the operation later may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Api(ApiError::RateLimited)
                | Error::Api(ApiError::ServerError(_))
                | Error::Api(ApiError::Network(_))
                | Error::Api(ApiError::ConnectionFailed(_))
                | Error::Api(ApiError::Conflict)
        )
    }

    /// A suggested next step for the user, if there is an obvious one.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            Error::Config(ConfigError::ProfileNotFound(_))
            | Error::Config(ConfigError::ValidationError(_)) => {
                Some("Add a [[profiles]] entry to config.toml with name, url and email.")
            }
            Error::Api(ApiError::Unauthorized) | Error::Api(ApiError::Keyring(_)) => Some(
                "Create an API token at https://id.atlassian.com/manage-profile/security/api-tokens and store it in the OS keyring under service 'jira-rest' with the profile name as the user.",
            ),
            Error::Api(ApiError::RateLimited) => Some("Wait a few seconds and try again."),
            Error::Api(ApiError::Network(_)) | Error::Api(ApiError::ConnectionFailed(_)) => {
                Some("Check your internet connection and Jira URL.")
            }
            _ => None,
        }
    }
}

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;
