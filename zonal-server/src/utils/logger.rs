//! Logging Infrastructure
//!
//! Structured logging for development and production. Console output is
//! filtered through `RUST_LOG` (falling back to the configured level);
//! deployments additionally write a daily-rolling JSON log file.

use std::fs;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console-only logging at the default level
pub fn init_logger() {
    let _ = init_logger_with_file("info", None);
}

/// Initialize logging with an optional daily-rolling file
///
/// `RUST_LOG` takes precedence over `level` when set. With a `log_dir`
/// the directory is created and `zonal-server.YYYY-MM-DD` JSON logs are
/// written alongside the console output.
pub fn init_logger_with_file(level: &str, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "zonal-server");
            let file_layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(file_appender);
            registry.with(file_layer).try_init()?;
        }
        None => registry.try_init()?,
    }

    Ok(())
}
