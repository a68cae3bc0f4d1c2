//! Logging and tracing initialization.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::LoggingConfig;

/// Open the configured log file for appending, if any.
///
/// The error keeps the path so it can be reported once a subscriber exists.
fn open_log_file(config: &LoggingConfig) -> Result<Option<File>, (PathBuf, std::io::Error)> {
    match &config.file {
        Some(path) => OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(Some)
            .map_err(|e| (path.clone(), e)),
        None => Ok(None),
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs go to stderr unless a log file is configured, keeping stdout free
/// for command output. If the log file cannot be opened, stderr is used
/// and the failure is reported as the first warning on it.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file, open_error) = match open_log_file(config) {
        Ok(file) => (file, None),
        Err(failure) => (None, Some(failure)),
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match (config.json, file) {
        (true, Some(file)) => {
            let subscriber = builder.json().with_writer(Mutex::new(file)).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (true, None) => {
            let subscriber = builder.json().with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, Some(file)) => {
            let subscriber = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, None) => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }

    if let Some((path, e)) = open_error {
        tracing::warn!(
            path = %path.display(),
            error = %e,
            "Failed to open log file, logging to stderr"
        );
    }
}
