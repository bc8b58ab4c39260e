//! File-based logging bootstrap.
//!
//! stdout belongs to the terminal UI, so log records go to a size-rotated
//! file. Initialization is idempotent for the same directory and level, and
//! never panics.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "tubetasker";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("unsupported log level `{0}`; expected off|trace|debug|info|warn|error")]
    UnsupportedLevel(String),
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
    #[error("logging already initialized at {existing}; refusing to switch to {requested}")]
    AlreadyInitialized {
        existing: PathBuf,
        requested: PathBuf,
    },
}

/// Start logging at `level` into `log_dir`.
///
/// Returns `Ok(false)` when the level is `off` and nothing was started.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<bool, LogError> {
    let Some(level) = normalize_level(level)? else {
        return Ok(false);
    };

    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == log_dir && state.level == level {
            return Ok(true);
        }
        return Err(LogError::AlreadyInitialized {
            existing: state.log_dir.clone(),
            requested: log_dir.to_path_buf(),
        });
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LogError> {
        std::fs::create_dir_all(log_dir).map_err(|e| LogError::CreateDir {
            path: log_dir.to_path_buf(),
            source: e,
        })?;

        let logger = Logger::try_with_str(level)?
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
            .start()?;

        install_panic_hook_once();

        info!(
            "event=app_start status=ok platform={} version={} level={} log_dir={}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(LogError::AlreadyInitialized {
            existing: state.log_dir.clone(),
            requested: log_dir.to_path_buf(),
        });
    }
    Ok(true)
}

/// `None` means logging is switched off
fn normalize_level(level: &str) -> Result<Option<&'static str>, LogError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "trace" => Ok(Some("trace")),
        "debug" => Ok(Some("debug")),
        "info" => Ok(Some("info")),
        "warn" | "warning" => Ok(Some("warn")),
        "error" => Ok(Some("error")),
        other => Err(LogError::UnsupportedLevel(other.to_string())),
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!("event=panic_captured location={location} payload={payload}");
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
