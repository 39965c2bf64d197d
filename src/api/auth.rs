//! Basic authentication for Jira Cloud.
//!
//! Jira Cloud accepts HTTP Basic auth built from the account email and an
//! API token. Tokens are read from the OS keyring, keyed by profile name.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::error::{ApiError, Result};

/// The keyring service name under which API tokens are stored.
const KEYRING_SERVICE: &str = "jira-rest";

/// Authentication credentials for Jira.
#[derive(Clone)]
pub struct Auth {
    /// The user's email address.
    email: String,
    /// The complete `Basic ...` authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create credentials from an email and API token.
    ///
    /// The token is encoded immediately and the raw token is not kept.
    pub fn new(email: &str, token: &str) -> Self {
        Self {
            email: email.to_string(),
            auth_header: build_auth_header(email, token),
        }
    }

    /// Create credentials using the token stored in the OS keyring for a profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Keyring` if no token can be read for the profile.
    pub fn from_keyring(profile_name: &str, email: &str) -> Result<Self> {
        let token = get_token(profile_name)?;
        Ok(Self::new(email, &token))
    }

    /// The `Authorization` header value for HTTP requests.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// The account email.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("email", &self.email)
            .field("auth_header", &"Basic <redacted>")
            .finish()
    }
}

/// Encode `email:token` in Base64 and prepend `Basic `.
fn build_auth_header(email: &str, token: &str) -> String {
    let credentials = format!("{}:{}", email, token);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
}

/// Retrieve the API token stored for a profile.
///
/// # Errors
///
/// Returns an error if the token cannot be retrieved.
pub fn get_token(profile_name: &str) -> Result<String> {
    keyring::Entry::new(KEYRING_SERVICE, profile_name)
        .map_err(|e| ApiError::Keyring(format!("failed to access keyring: {}", e)))?
        .get_password()
        .map_err(|e| ApiError::Keyring(format!("failed to retrieve token: {}", e)))
}
