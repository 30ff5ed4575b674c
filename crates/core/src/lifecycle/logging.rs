//! Logging initialization with optional file-based daily rotation.

use crate::pool::Pool;
use std::io::IsTerminal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// - `to_file=true` → daily rotating `<pool>.log` under `log_dir`
/// - `to_file=false` → stderr, leaving stdout to the startup line
///
/// `RUST_LOG` takes precedence over `level`. The returned guard must be held
/// for the lifetime of the process so buffered lines are flushed on exit.
pub fn init_logging(
    pool: Pool,
    level: &str,
    to_file: bool,
    log_dir: Option<&str>,
) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if to_file {
        let dir = log_dir.unwrap_or("./logs");
        let file_appender = tracing_appender::rolling::daily(dir, log_file_name(pool));
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(non_blocking)
            .with_ansi(false)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .init();

        None
    }
}

fn log_file_name(pool: Pool) -> String {
    format!("{}.log", pool.name())
}
