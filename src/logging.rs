//! Logging configuration and initialization.
//!
//! The terminal belongs to the TUI, so log lines go to a file. Logging stays off
//! unless a log file is requested or `RUST_LOG` is set.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app_dirs::AppDirs;
use crate::error::Result;

/// Logging preset levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogPreset {
    /// Session lifecycle only
    #[default]
    Production,
    /// Debug: ignored calls and config fallbacks too
    Debug,
    /// Quiet: warnings and errors only
    Quiet,
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub preset: LogPreset,
    /// Destination file; `None` leaves logging off unless `RUST_LOG` is set
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_cli(debug: bool, quiet: bool, log: bool, log_file: Option<PathBuf>) -> Self {
        let preset = if quiet {
            LogPreset::Quiet
        } else if debug {
            LogPreset::Debug
        } else {
            LogPreset::Production
        };

        let file = match log_file {
            Some(path) => Some(path),
            None if log || std::env::var_os("RUST_LOG").is_some() => Some(AppDirs::log_path()),
            None => None,
        };

        Self { preset, file }
    }

    /// Build an EnvFilter from this configuration.
    pub fn build_filter(&self) -> EnvFilter {
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return env_filter;
        }
        EnvFilter::try_new(self.directives()).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn directives(&self) -> &'static str {
        match self.preset {
            LogPreset::Production => "dactylo=info",
            LogPreset::Debug => "dactylo=debug",
            LogPreset::Quiet => "dactylo=warn",
        }
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber. Returns the log file in use, if any.
/// Fails if a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.file.clone() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(config.build_filter())
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    Ok(Some(path))
}
