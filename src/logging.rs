use std::io;
use std::fs;
use std::path::{Path, PathBuf};

use time::macros::format_description;
use time::UtcOffset;
use tracing_subscriber::{self, fmt, prelude::*};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_RETENTION_DAYS: u64 = 7;

/// Get the log directory path in the user-specific OS cache directory
/// - Linux: ~/.cache/fcs/fcs-language-server/
/// - macOS: ~/Library/Caches/fcs/fcs-language-server/
/// - Windows: %LOCALAPPDATA%\fcs\fcs-language-server\
fn get_log_dir() -> io::Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .ok_or_else(|| io::Error::new(
            io::ErrorKind::NotFound,
            "Unable to determine user cache directory"
        ))?;

    let log_dir = cache_dir.join("fcs").join("fcs-language-server");
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}

fn is_session_log(name: &str) -> bool {
    name.starts_with("session-") && name.ends_with(".log")
}

/// Remove session logs older than LOG_RETENTION_DAYS
fn cleanup_old_logs(log_dir: &Path) {
    let now = std::time::SystemTime::now();
    let retention = std::time::Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let is_stale = metadata.is_file()
            && entry.file_name().to_str().is_some_and(is_session_log)
            && metadata
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .is_some_and(|age| age > retention);
        if is_stale {
            if let Err(e) = fs::remove_file(entry.path()) {
                eprintln!("Failed to remove old log file {:?}: {}", entry.path(), e);
            }
        }
    }
}

fn session_id() -> String {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(format_description!("[year][month][day]-[hour][minute][second]"))
        .unwrap_or_else(|_| "unknown".to_string());
    format!("{}-{}", timestamp, std::process::id())
}

/// Initialization only fails when a global subscriber or logger is already set; that one is kept.
fn tolerate_existing(result: Result<(), tracing_subscriber::util::TryInitError>) {
    if let Err(e) = result {
        tracing::debug!("Keeping the existing subscriber: {}", e);
    }
}

/// Initialize logger with stderr and optional file output
/// Returns a WorkerGuard that must be kept alive for the duration of the program
///
/// # Arguments
/// * `no_color` - Disable ANSI colors in stderr output
/// * `log_level` - Override log level (otherwise uses RUST_LOG or defaults to "info")
/// * `enable_file_logging` - Write a DEBUG session log to the cache directory (disable for tests)
pub fn init_logger(no_color: bool, log_level: Option<&str>, enable_file_logging: bool) -> io::Result<WorkerGuard> {
    let timer = fmt::time::OffsetTime::new(
        UtcOffset::UTC,
        format_description!("[[[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z]"),
    );

    let stderr_filter = match log_level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(timer.clone())
        .with_ansi(!no_color)
        .with_filter(stderr_filter);

    if !enable_file_logging {
        let (_, guard) = tracing_appender::non_blocking(std::io::sink());
        tolerate_existing(tracing_subscriber::registry().with(stderr_layer).try_init());
        return Ok(guard);
    }

    let log_dir = get_log_dir()?;
    cleanup_old_logs(&log_dir);

    let log_path = log_dir.join(format!("session-{}.log", session_id()));
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_timer(timer)
        .with_ansi(false)
        .with_filter(tracing_subscriber::EnvFilter::new("debug"));

    tolerate_existing(
        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .try_init(),
    );
    eprintln!("Logging to file: {:?}", log_path);
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_log_names() {
        assert!(is_session_log("session-20240101-120000-42.log"));
        assert!(!is_session_log("wire-20240101-120000-42.log"));
        assert!(!is_session_log("session-20240101.txt"));
    }

    #[test]
    fn test_cleanup_keeps_recent_logs() {
        let dir = tempfile::tempdir().unwrap();
        let recent = dir.path().join("session-recent.log");
        let other = dir.path().join("notes.txt");
        fs::write(&recent, "log").unwrap();
        fs::write(&other, "notes").unwrap();

        cleanup_old_logs(dir.path());

        assert!(recent.exists());
        assert!(other.exists());
    }

    #[test]
    fn test_init_without_file_logging_is_repeatable() {
        assert!(init_logger(true, Some("warn"), false).is_ok());
        assert!(init_logger(true, Some("warn"), false).is_ok());
    }
}
