//! Opt-in logging setup for applications built on this crate.
//!
//! The library itself only emits `tracing` events. Binaries that want them
//! written somewhere can call [`init`], which installs:
//! - A daily rotating log file in the user's local data directory
//! - Log level configuration via the `RUST_LOG` environment variable
//! - File/line and thread information on every event

use std::path::{Path, PathBuf};

use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default filter if `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "jira_rest=info,warn";

/// Prefix of every log file name; the appender adds the date.
const LOG_FILE_PREFIX: &str = "jira-rest.log";

/// Install the global tracing subscriber.
///
/// Logs go to `{data_local_dir}/jira-rest/logs/jira-rest.log.<date>`, e.g.
/// `~/.local/share/jira-rest/logs/` on Linux.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// jira_rest::logging::init().expect("Failed to initialize logging");
/// ```
pub fn init() -> anyhow::Result<()> {
    init_in(&get_log_directory()?)
}

/// Install the global tracing subscriber, writing into `log_dir`.
///
/// The filter comes from `RUST_LOG`, or `jira_rest=info,warn` when unset.
pub fn init_in(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing::subscriber::set_global_default(build_subscriber(log_dir, filter))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "jira-rest logging initialized");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

/// Build the file subscriber without installing it.
///
/// `log_dir` must already exist.
pub fn build_subscriber(log_dir: &Path, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
}

fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("jira-rest").join("logs"))
}

/// Where [`init`] writes log files, if the platform has a data directory.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}
