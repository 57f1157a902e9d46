//! File logging. The terminal belongs to the UI, so tracing output goes to a
//! daily rolling file instead of stderr.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "tictactoe.log";

/// Platform data directory for log files.
pub fn default_log_dir() -> Result<PathBuf> {
    let mut path =
        dirs::data_dir().context("Unable to determine data directory for your platform")?;
    path.push("tictactoe");
    path.push("logs");
    Ok(path)
}

/// Returns the directory logs are written to, creating it if needed.
pub fn resolve_log_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir()?,
    };

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    Ok(dir)
}

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_logging(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level: {default_level}"))?,
    };

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

/// Resolves the log directory and installs the subscriber.
///
/// With `required` unset, a directory that cannot be created turns file
/// logging off (`Ok(None)`) instead of failing.
pub fn setup_logging(
    explicit: Option<&Path>,
    default_level: &str,
    required: bool,
) -> Result<Option<WorkerGuard>> {
    let dir = match resolve_log_dir(explicit) {
        Ok(dir) => dir,
        Err(err) if !required => {
            eprintln!("warning: file logging disabled: {err:#}");
            warn!(%err, "file logging disabled");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let guard = init_logging(&dir, default_level)?;
    info!(log_dir = %dir.display(), "logging initialised");
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_log_dir_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let wanted = tmp.path().join("a").join("b");

        let dir = resolve_log_dir(Some(wanted.as_path())).unwrap();

        assert_eq!(dir, wanted);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_resolve_log_dir_accepts_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = resolve_log_dir(Some(tmp.path())).unwrap();
        assert_eq!(dir, tmp.path());
    }

    #[test]
    fn test_unwritable_log_dir_is_optional() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        // A directory cannot be created underneath a regular file.
        let blocked = tmp.path().join("logs");

        let guard = setup_logging(Some(blocked.as_path()), "info", false).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_unwritable_log_dir_is_fatal_when_required() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let blocked = tmp.path().join("logs");

        assert!(setup_logging(Some(blocked.as_path()), "info", true).is_err());
        assert!(resolve_log_dir(Some(blocked.as_path())).is_err());
    }

    #[test]
    fn test_default_log_dir_layout() {
        if let Ok(dir) = default_log_dir() {
            assert!(dir.ends_with("tictactoe/logs"));
        }
    }
}
