//! Logging setup: human-readable logs on stderr, optional JSONL file logs.
//!
//! stdout is reserved for command output (and the MCP protocol), so nothing
//! here ever writes to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_PATH_ENV: &str = "READABILITY_SCORES_LOG_PATH";
const LOG_DIR_ENV: &str = "READABILITY_SCORES_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "readability-scores.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory for the daily rolling log file.
    pub log_dir: Option<PathBuf>,
    /// File name prefix inside `log_dir`.
    pub file_name: Option<String>,
}

impl ObservabilityConfig {
    /// Read the log location from the environment, falling back to the
    /// configured directory.
    ///
    /// `READABILITY_SCORES_LOG_PATH` wins over `READABILITY_SCORES_LOG_DIR`,
    /// which wins over `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path.filter(|p| !p.as_os_str().is_empty()) {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned());
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name,
            };
        }

        Self {
            log_dir: env_dir
                .filter(|p| !p.as_os_str().is_empty())
                .or(config_dir),
            file_name: None,
        }
    }

    fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` shows errors only, `-v`
/// shows debug and `-vv` trace; without flags the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, default_level))
}

fn level_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match config.log_dir {
        Some(ref dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, config.file_name());
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_splits_into_dir_and_file() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/rs/scores.jsonl")),
            Some(PathBuf::from("/ignored")),
            None,
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/rs")));
        assert_eq!(config.file_name(), "scores.jsonl");
    }

    #[test]
    fn bare_log_file_name_uses_current_dir() {
        let config = ObservabilityConfig::resolve(Some(PathBuf::from("scores.jsonl")), None, None);
        assert_eq!(config.log_dir, Some(PathBuf::from(".")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/env")));
        assert_eq!(config.file_name(), DEFAULT_LOG_FILE);
    }

    #[test]
    fn no_sources_means_no_file_logging() {
        assert_eq!(
            ObservabilityConfig::resolve(None, None, None),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn verbosity_flags_pick_level() {
        assert_eq!(level_directive(true, 2, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "info"), "debug");
        assert_eq!(level_directive(false, 3, "info"), "trace");
    }
}
