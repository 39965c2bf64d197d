//! # jira-rest
//!
//! An async client for the Jira Cloud REST (`/rest/api/3`) and Agile
//! (`/rest/agile/1.0`) APIs: issues, comments, assignment, transitions, user
//! search, boards, sprints and JQL search.
//!
//! ```no_run
//! # async fn run() -> Result<(), jira_rest::ApiError> {
//! let client = jira_rest::JiraClient::with_credentials(
//!     "https://company.atlassian.net",
//!     "me@company.com",
//!     "api-token",
//! )?;
//!
//! for issue in client.get_issues_via_jql("assignee = currentUser()").await? {
//!     println!("{}", issue);
//! }
//! client.add_comment("OPS-12", "Deployed to staging").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::{ApiError, Auth, JiraClient};
pub use config::{Config, Profile, Settings};
pub use error::{Error, Result};

/// Connect using the configuration file at its default location.
///
/// Uses the named profile, or the default profile when `profile_name` is
/// `None`. The API token is read from the OS keyring and the connection is
/// validated before the client is returned.
pub async fn connect(profile_name: Option<&str>) -> Result<JiraClient> {
    let config = Config::load()?;
    connect_with(&config, profile_name).await
}

/// Connect using an already loaded configuration.
pub async fn connect_with(config: &Config, profile_name: Option<&str>) -> Result<JiraClient> {
    let profile = match profile_name {
        Some(name) => config.profile(name)?,
        None => config.default_profile()?,
    };
    tracing::debug!(profile = %profile.name, "Connecting");

    Ok(JiraClient::new(profile, &config.settings).await?)
}
