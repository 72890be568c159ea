use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file-based logging
/// Logs are written to ~/.config/farmgate/logs/farmgate-YYYY-MM-DD-HH-MM-SS.log
///
/// Nothing is written to stdout/stderr, which belong to the terminal UI.
pub fn init_logging() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("farmgate");

    init_logging_in(&config_dir.join("logs"))
}

/// Same as [`init_logging`] with an explicit log directory
pub fn init_logging_in(logs_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(logs_dir)?;

    let log_filename = log_file_name(Local::now());
    let log_path = logs_dir.join(&log_filename);

    // Non-blocking so slow disks never stall the render loop
    let file_appender = tracing_appender::rolling::never(logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // Default to INFO, can be overridden with RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    // The writer must outlive every log call
    std::mem::forget(guard);

    Ok(log_path)
}

fn log_file_name(now: chrono::DateTime<Local>) -> String {
    format!("farmgate-{}.log", now.format("%Y-%m-%d-%H-%M-%S"))
}
