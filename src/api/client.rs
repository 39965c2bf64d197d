//! Jira API client implementation.
//!
//! This module holds the client handle and the request plumbing shared by the
//! endpoint modules: URL construction, authentication headers, status
//! handling, and retries for idempotent reads.

use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use super::types::CurrentUser;
use crate::config::{Profile, Settings};

/// Upper bound on the wait between two read attempts.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// The Jira API client.
///
/// Holds an immutable connection configuration and a pooled HTTP client.
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct JiraClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_path: String,
    pub(crate) agile_path: String,
    pub(crate) auth: Auth,
    pub(crate) max_retries: u32,
    pub(crate) retry_delay: Duration,
    pub(crate) board_page_size: u32,
    pub(crate) search_page_size: u32,
}

impl JiraClient {
    /// Create a client for a profile and validate the connection.
    ///
    /// The API token is read from the OS keyring.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token cannot be retrieved from the keyring
    /// - The HTTP client cannot be built
    /// - Connection validation fails
    #[instrument(skip(profile, settings), fields(profile_name = %profile.name))]
    pub async fn new(profile: &Profile, settings: &Settings) -> Result<Self> {
        info!("Creating Jira client for profile");

        let auth = Auth::from_keyring(&profile.name, &profile.email)?;
        let jira = Self::with_settings(&profile.url, auth, settings)?;

        jira.validate_connection().await?;

        info!("Jira client created and connection validated");
        Ok(jira)
    }

    /// Create a client with explicit credentials and default settings.
    ///
    /// Does NOT validate the connection.
    pub fn with_credentials(base_url: &str, email: &str, token: &str) -> Result<Self> {
        Self::with_settings(base_url, Auth::new(email, token), &Settings::default())
    }

    /// Create a client from explicit credentials and settings.
    pub fn with_settings(base_url: &str, auth: Auth, settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
            api_path: normalize_path(settings.api_path()),
            agile_path: normalize_path(settings.agile_path()),
            auth,
            max_retries: settings.max_retries.max(1),
            retry_delay: Duration::from_millis(settings.retry_delay_ms),
            board_page_size: settings.board_page_size.max(1),
            search_page_size: settings.search_page_size.max(1),
        })
    }

    /// Validate the connection by calling the `/myself` endpoint.
    #[instrument(skip(self))]
    pub async fn validate_connection(&self) -> Result<CurrentUser> {
        debug!("Validating Jira connection");

        let user = self.current_user().await.map_err(|e| {
            error!("Connection validation failed: {}", e);
            match e {
                ApiError::Unauthorized => e,
                ApiError::Network(_) => {
                    ApiError::ConnectionFailed(format!("Cannot connect to {}: {}", self.base_url, e))
                }
                _ => ApiError::ConnectionFailed(e.to_string()),
            }
        })?;

        info!("Connected as user: {}", user.display_name);
        Ok(user)
    }

    /// Get the authenticated user.
    pub async fn current_user(&self) -> Result<CurrentUser> {
        self.get(&self.api_url("/myself")).await
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The REST API path prefix, e.g. `/rest/api/3`.
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// The Agile API path prefix, e.g. `/rest/agile/1.0`.
    pub fn agile_path(&self) -> &str {
        &self.agile_path
    }

    /// Build a URL under the REST API prefix.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_path, path)
    }

    /// Build a URL under the Agile API prefix.
    pub(crate) fn agile_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.agile_path, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, self.auth.header_value())
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
    }

    /// GET a URL and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        decode(&body)
    }

    /// GET a URL and return the raw body.
    ///
    /// Retries transient failures (rate limiting, server errors, transport
    /// errors) with exponential backoff.
    #[instrument(skip(self), fields(url = %url))]
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!("Request attempt {}/{}", attempts, self.max_retries);

            match self.execute(self.request(Method::GET, url)).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_transient() && attempts < self.max_retries => {
                    let delay = self.retry_delay_for(attempts);
                    warn!(
                        "Request failed (attempt {}), retrying in {}ms: {}",
                        attempts,
                        delay.as_millis(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    error!("GET {} failed: {}", url, e);
                    return Err(e);
                }
            }
        }
    }

    /// Send a JSON body and return the raw response body.
    ///
    /// Writes are not retried.
    #[instrument(skip(self, body), fields(method = %method, url = %url))]
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<String> {
        let response = self.send_json_raw(method.clone(), url, body).await?;
        self.handle_response(response).await.map_err(|e| {
            error!("{} {} failed: {}", method, url, e);
            e
        })
    }

    /// Send a JSON body and return the response without inspecting its status.
    pub(crate) async fn send_json_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<Response> {
        let payload = serde_json::to_vec(body)?;
        self.request(method, url)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                ApiError::Network(e)
            })
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Check the status and read the body, mapping failures to `ApiError`.
    async fn handle_response(&self, response: Response) -> Result<String> {
        let status = response.status();
        let url = response.url().to_string();

        if status.is_success() {
            response.text().await.map_err(ApiError::Network)
        } else {
            let error_body = response.text().await.unwrap_or_default();
            debug!("Error response body: {}", error_body);

            Err(Self::error_from_response(status, &url, &error_body))
        }
    }

    /// Create an error from an HTTP response, folding in Jira's
    /// `errorMessages` and `errors` payloads when present.
    fn error_from_response(status: StatusCode, url: &str, body: &str) -> ApiError {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(messages) = json.get("errorMessages").and_then(|m| m.as_array()) {
                if !messages.is_empty() {
                    return ApiError::from_status(
                        status,
                        &messages
                            .iter()
                            .filter_map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                }
            }
            if let Some(errors) = json.get("errors").and_then(|e| e.as_object()) {
                let error_strings: Vec<String> =
                    errors.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                if !error_strings.is_empty() {
                    return ApiError::from_status(status, &error_strings.join(", "));
                }
            }
        }

        ApiError::from_status(status, url)
    }

    /// Backoff before the next attempt: the base delay doubled per failed
    /// attempt, never more than `MAX_RETRY_DELAY`.
    fn retry_delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.retry_delay.saturating_mul(factor).min(MAX_RETRY_DELAY)
    }
}

/// Decode a JSON body, reporting failures as `InvalidResponse`.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');

    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(ApiError::InvalidUrl(format!(
            "'{}' must start with http:// or https://",
            url
        )));
    }

    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    Ok(url.to_string())
}

/// Ensure a path prefix has a single leading slash and no trailing slash.
fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

/// Percent-encode a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
