//! Logging bootstrap
//!
//! File-based logging initialized once per process. The stores emit
//! data-integrity warnings through the `log` facade; without initialization
//! they are simply discarded, so calling this is optional for library users
//! that install their own logger.

use std::path::{Path, PathBuf};

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "ramen-saver";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initialize file logging under `log_dir` at the given level
///
/// Idempotent for the same directory; re-initialization with a different
/// directory is rejected. Never panics.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(log_dir)
            .map_err(|e| format!("failed to create log directory `{}`: {e}", log_dir.display()))?;

        let logger = Logger::try_with_env_or_str(level)
            .map_err(|e| format!("invalid log level `{level}`: {e}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .start()
            .map_err(|e| format!("failed to start logger: {e}"))?;

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    Ok(())
}

/// Directory of the active log files, if logging has been initialized
pub fn logging_status() -> Option<PathBuf> {
    LOGGING_STATE.get().map(|state| state.log_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_is_idempotent_and_rejects_directory_switch() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();

        init_logging("info", dir.path()).expect("first init should succeed");
        init_logging("info", dir.path()).expect("same directory should be idempotent");

        let err = init_logging("info", other.path())
            .expect_err("directory conflict should be rejected");
        assert!(err.contains("refusing to switch"));

        assert_eq!(logging_status(), Some(dir.path().to_path_buf()));
    }
}
