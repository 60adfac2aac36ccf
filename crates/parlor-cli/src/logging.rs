//! File logging setup.
//!
//! Logs go to `${PARLOR_HOME}/logs/` so the alternate screen and command
//! output stay clean. Credentials and tokens are never logged.

use parlor_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file logging. Returns the guard that flushes pending log
/// lines on drop; keep it alive for the process lifetime.
///
/// Returns `None` (and logs nothing) when the log directory cannot be
/// created. Logging is never a reason to fail a command.
pub fn init() -> Option<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(logs_dir, "parlor.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Some(guard)
}
