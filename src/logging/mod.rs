//! Tracing subscriber initialization.
//!
//! stdout carries the program's answer (the fragment and the query), so
//! diagnostics go to a log file. Follow it with `tail -f`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaults to "info". Reducer steps are logged at
/// `trace`, fragment decode fallbacks at `debug`/`warn`.
///
/// Creates the log directory if it doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the directory cannot be created, the path has
/// no file name, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// Directory and file name of the log. A bare file name lives in `.`.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    if directory.as_os_str().is_empty() {
        Ok((Path::new("."), file_name))
    } else {
        Ok((directory, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial(tracing_init)]
    fn missing_log_directory_is_created() {
        let test_dir = std::env::temp_dir().join("photon_test_logs_create");
        let log_file = test_dir.join("photon.log");

        let _ = fs::remove_dir_all(&test_dir);

        // Directory creation precedes subscriber installation
        let result = init(&log_file);

        assert!(
            test_dir.is_dir(),
            "{:?} missing after init returned {:?}",
            test_dir,
            result
        );

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_succeeds_when_directory_already_exists() {
        let test_dir = std::env::temp_dir().join("photon_test_logs_exists");
        let log_file = test_dir.join("photon.log");

        let _ = fs::create_dir_all(&test_dir);

        let result = init(&log_file);
        assert!(
            !matches!(result, Err(LoggingError::DirectoryCreation { .. })),
            "Existing directory must not fail: {:?}",
            result
        );

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn split_log_path_separates_directory_and_name() {
        let (directory, name) = split_log_path(Path::new("/var/log/photon.log")).unwrap();
        assert_eq!(directory, Path::new("/var/log"));
        assert_eq!(name, "photon.log");
    }

    #[test]
    fn bare_file_name_logs_in_working_directory() {
        let (directory, name) = split_log_path(Path::new("photon.log")).unwrap();
        assert_eq!(directory, Path::new("."));
        assert_eq!(name, "photon.log");
    }

    #[test]
    fn root_has_no_file_name() {
        assert!(matches!(
            split_log_path(Path::new("/")),
            Err(LoggingError::InvalidPath(_))
        ));
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("photon_test_logs_twice");
        let log_file = test_dir.join("photon.log");

        let _ = init(&log_file);
        let second = init(&log_file);
        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));

        let _ = fs::remove_dir_all(&test_dir);
    }
}
