use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ZOSMF_LOG";
const DEFAULT_FILTER: &str = "zosmf=info";

/// Keeps the file writer flushing until dropped.
pub struct Guard(#[allow(dead_code)] Option<WorkerGuard>);

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// JSON lines into a daily rolling file under `log_dir`, or plain text on
/// stderr when no directory is given.
pub fn init_tracing(log_dir: Option<PathBuf>) -> anyhow::Result<Guard> {
    let guard = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let append = tracing_appender::rolling::daily(&dir, "zosmf.log");
            let (writer, guard) = tracing_appender::non_blocking(append);
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter())
                .with_timer(tracing_subscriber::fmt::time::uptime())
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .init();
            debug!(path = %dir.display(), "JSON logging initialized");
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
            None
        }
    };
    Ok(Guard(guard))
}
