//! Logging bootstrap for processes embedding the SIFR core.
//!
//! # Responsibility
//! - Start the `flexi_logger` file backend once per process.
//! - Keep library events on the `log` facade as `key=value` lines.
//!
//! # Invariants
//! - Initialization is idempotent for the same level and directory.
//! - A second initialization with a different level or directory is
//!   rejected, never silently applied.
//! - Initialization never panics.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::table::TABLE_VERSION;

const LOG_FILE_BASENAME: &str = "sifr";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 4 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn check_matches(&self, level: LevelFilter, log_dir: &Path) -> Result<(), String> {
        if self.log_dir != log_dir {
            return Err(format!(
                "logging already writes to `{}`; refusing `{}`",
                self.log_dir.display(),
                log_dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already runs at `{}`; refusing `{}`",
                self.level, level
            ));
        }
        Ok(())
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// `level` is a case-insensitive `log` level name; `warning` is accepted
/// as `warn`.
///
/// # Errors
/// - `level` is not a level name, or is `off`.
/// - `log_dir` is empty, relative, names a file, or cannot be created.
/// - Logging is already active with another level or directory.
/// - The backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = parse_log_dir(log_dir)?;

    if let Some(active) = ACTIVE_LOGGER.get() {
        return active.check_matches(level, &log_dir);
    }

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &log_dir))?;
    // A concurrent caller may have won the race with other settings.
    active.check_matches(level, &log_dir)
}

fn start_logger(level: LevelFilter, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::with(LogSpecification::builder().default(level).build())
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
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} core_version={} table_version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION"),
        TABLE_VERSION
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

/// Active `(level, log_dir)`, or `None` before initialization.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// Level used when the embedder has no preference: debug builds trace the
/// registry and allocation events, release builds keep to `info`.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    let name = match level.trim() {
        name if name.eq_ignore_ascii_case("warning") => "warn",
        name => name,
    };
    match name.parse::<LevelFilter>() {
        Ok(LevelFilter::Off) => {
            Err("log level `off` disables logging; skip init_logging instead".to_string())
        }
        Ok(filter) => Ok(filter),
        Err(_) => Err(format!(
            "unknown log level `{name}`; expected one of trace, debug, info, warn, error"
        )),
    }
}

fn parse_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(log_dir.trim());
    if path.as_os_str().is_empty() {
        return Err("log directory is empty".to_string());
    }
    if path.is_relative() {
        return Err(format!(
            "log directory `{}` is relative; an absolute path is required",
            path.display()
        ));
    }
    if path.is_file() {
        return Err(format!(
            "log directory `{}` is an existing file",
            path.display()
        ));
    }
    Ok(path)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
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
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

/// Flattens newlines and caps length so one event stays on one log line.
fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut capped: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, init_logging, logging_status, parse_level, parse_log_dir, single_line,
    };
    use log::LevelFilter;

    #[test]
    fn parse_level_accepts_known_values() {
        assert_eq!(
            parse_level("DEBUG").expect("DEBUG should parse"),
            LevelFilter::Debug
        );
        assert_eq!(
            parse_level(" warning ").expect("warning should parse"),
            LevelFilter::Warn
        );
        assert!(parse_level("verbose").is_err());
        let off = parse_level("off").expect_err("off is not a logging level");
        assert!(off.contains("off"));
    }

    #[test]
    fn default_level_round_trips_through_parse() {
        let level = default_log_level();
        assert_eq!(
            parse_level(level.as_str()).expect("default level should parse"),
            level
        );
    }

    #[test]
    fn parse_log_dir_rejects_relative_and_empty_paths() {
        let err = parse_log_dir("logs/sifr").expect_err("relative paths must be rejected");
        assert!(err.contains("absolute"));
        assert!(parse_log_dir("   ").is_err());
    }

    #[test]
    fn parse_log_dir_rejects_existing_file() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let path = file.path().to_str().expect("utf-8 temp path");
        let err = parse_log_dir(path).expect_err("a file is not a log directory");
        assert!(err.contains("existing file"));
    }

    #[test]
    fn single_line_flattens_and_caps() {
        let flattened = single_line("one\ntwo\rthree", 7);
        assert_eq!(flattened, "one two...");
        assert_eq!(single_line("short", 10), "short");
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dir_str = dir.path().to_str().expect("utf-8 temp dir").to_string();
        let other = tempfile::tempdir().expect("temp dir");
        let other_str = other.path().to_str().expect("utf-8 temp dir").to_string();

        init_logging("info", &dir_str).expect("first init should succeed");
        init_logging("INFO", &dir_str).expect("same config should be idempotent");

        let level_err = init_logging("debug", &dir_str).expect_err("level conflict should fail");
        assert!(level_err.contains("refusing"));
        let dir_err = init_logging("info", &other_str).expect_err("dir conflict should fail");
        assert!(dir_err.contains("refusing"));

        let (level, active_dir) = logging_status().expect("logging should be active");
        assert_eq!(level, LevelFilter::Info);
        assert_eq!(active_dir, dir.path());
    }
}
