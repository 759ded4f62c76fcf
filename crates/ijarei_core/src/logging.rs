//! Process logging bootstrap.
//!
//! # Responsibility
//! - Start the rotating file logger once per process.
//! - Log panics with a sanitized, length-capped payload.
//!
//! # Invariants
//! - Repeating `init_logging` with the same level and directory is a no-op.
//! - A different level or directory after initialization is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "ijarei";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 200;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Logging bootstrap errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidLogDir(String),
    AlreadyInitialized { current: String, requested: String },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidLogDir(message) => write!(f, "invalid log directory: {message}"),
            Self::AlreadyInitialized { current, requested } => write!(
                f,
                "logging already initialized with `{current}`; refusing to switch to `{requested}`"
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - `UnsupportedLevel` / `InvalidLogDir` for bad input.
/// - `AlreadyInitialized` when a different configuration is active.
/// - `Backend` when the directory or logger cannot be set up.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, &log_dir))?;
    ensure_same_config(state, level, &log_dir)
}

/// Returns `(level, log_dir)` once logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        LoggingError::Backend(format!("cannot create `{}`: {err}", log_dir.display()))
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook_once();

    info!(
        "event=site_start module=core status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=logging_init module=core status=ok level={} log_dir={}",
        level,
        log_dir.display()
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    })
}

fn ensure_same_config(
    state: &LoggingState,
    level: &'static str,
    log_dir: &Path,
) -> Result<(), LoggingError> {
    if state.log_dir != log_dir {
        return Err(LoggingError::AlreadyInitialized {
            current: state.log_dir.display().to_string(),
            requested: log_dir.display().to_string(),
        });
    }
    if state.level != level {
        return Err(LoggingError::AlreadyInitialized {
            current: state.level.to_string(),
            requested: level.to_string(),
        });
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidLogDir("path is empty".to_string()));
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidLogDir(format!(
            "`{trimmed}` is not absolute"
        )));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, normalize_level, normalize_log_dir, sanitize_message,
        LoggingError,
    };

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level(" WARNING ").unwrap(), "warn");
        assert_eq!(normalize_level("Debug").unwrap(), "debug");
        assert!(matches!(
            normalize_level("verbose"),
            Err(LoggingError::UnsupportedLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn normalize_log_dir_rejects_relative_and_empty_paths() {
        assert!(matches!(
            normalize_log_dir("logs"),
            Err(LoggingError::InvalidLogDir(_))
        ));
        assert!(matches!(
            normalize_log_dir("   "),
            Err(LoggingError::InvalidLogDir(_))
        ));
    }

    #[test]
    fn sanitize_message_flattens_and_truncates() {
        let sanitized = sanitize_message("token\nleak\rhere", 6);
        assert_eq!(sanitized, "token ...");
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_reconfiguration() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let first_dir = first.path().to_str().unwrap().to_string();
        let second_dir = second.path().to_str().unwrap().to_string();

        init_logging("info", &first_dir).unwrap();
        init_logging("INFO", &first_dir).unwrap();

        assert!(matches!(
            init_logging("debug", &first_dir),
            Err(LoggingError::AlreadyInitialized { .. })
        ));
        assert!(matches!(
            init_logging("info", &second_dir),
            Err(LoggingError::AlreadyInitialized { .. })
        ));

        let (level, dir) = logging_status().unwrap();
        assert_eq!(level, "info");
        assert_eq!(dir, first.path());
    }
}
