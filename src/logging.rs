//! File logging setup.
//!
//! Log lines go to daily-rolling files under ~/.skyward/logs/ rather than
//! stderr: the terminal is the game surface and writing to it would tear
//! the alternate screen. `RUST_LOG` overrides the default `info` filter.

use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config;

/// Install the file logger. The returned guard flushes buffered lines on
/// drop, so it must live until the process exits.
pub fn init() -> io::Result<WorkerGuard> {
    let log_dir = config::config_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, "skyward.log"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}
