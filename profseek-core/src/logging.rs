//! src/logging.rs
//! ============================================================================
//! # Logger: Tracing Initialization
//!
//! Structured logging for the whole client. Events go to a daily-rolling file
//! under the log directory; stdout stays untouched because the terminal is
//! owned by the TUI. Filtering follows `RUST_LOG` with an `info` default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: CompactString,
    pub log_level: CompactString,
    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            log_file_prefix: CompactString::const_new("profseek"),
            log_level: CompactString::const_new("info"),
            rotation: LogRotation::Daily,
        }
    }
}

pub struct Logger;

impl Logger {
    /// Initialize the global tracing subscriber with the default config.
    ///
    /// The returned guard must stay alive for the duration of the program,
    /// otherwise buffered log lines are dropped on exit.
    pub fn init_tracing() -> Result<WorkerGuard> {
        Self::init_with_config(&LoggerConfig::default())
    }

    /// Initialize the global tracing subscriber with an explicit config.
    pub fn init_with_config(config: &LoggerConfig) -> Result<WorkerGuard> {
        std::fs::create_dir_all(&config.log_dir).with_context(|| {
            format!("Failed to create log directory {}", config.log_dir.display())
        })?;

        let appender: RollingFileAppender = match config.rotation {
            LogRotation::Daily => RollingFileAppender::new(
                Rotation::DAILY,
                &config.log_dir,
                config.log_file_prefix.as_str(),
            ),
            LogRotation::Never => RollingFileAppender::new(
                Rotation::NEVER,
                &config.log_dir,
                config.log_file_prefix.as_str(),
            ),
        };

        let (writer, guard): (NonBlocking, WorkerGuard) = tracing_appender::non_blocking(appender);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_ansi(false),
            )
            .try_init()
            .context("Tracing subscriber already initialized")?;

        Ok(guard)
    }
}
