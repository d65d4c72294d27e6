//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `readability-scores.<ext>` in current directory or any parent
//! - `.readability-scores.<ext>` in current directory or any parent
//! - `~/.config/readability-scores/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use readability_scores_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::options::ScoreOptions;

/// The configuration for readability-scores.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and from `READABILITY_SCORES_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs in both CLI and MCP server.
    /// Omit to use the default (5 MiB). Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    /// Default: `false`.
    #[serde(default)]
    pub disable_input_limit: bool,
    /// Strip markdown before scoring. Unset means "strip `.md` files only".
    pub strip_markdown: Option<bool>,
    /// Default score options. Command-line flags are added on top.
    ///
    /// Keys may be written in snake_case (`only_smog`) or camelCase
    /// (`onlySMOG`), but not both for the same option.
    #[serde(skip_serializing_if = "ScoreOptions::is_default")]
    pub scores: ScoreOptions,
}

impl Config {
    /// The input size limit in effect, if any.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            self.max_input_bytes.or(Some(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "readability-scores";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "READABILITY_SCORES_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/readability-scores/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`READABILITY_SCORES_LOG_LEVEL=debug`,
    ///    `READABILITY_SCORES_SCORES__ONLY_SMOG=true`)
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/readability-scores/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // Start with user config (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        // Add project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            source = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, dotfiles before regular files (low-to-high precedence).
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            // Dotfiles first (lower precedence), then regular files
            let search_dir = dir.as_path();
            let found: Vec<Utf8PathBuf> = [format!(".{APP_NAME}"), APP_NAME.to_string()]
                .iter()
                .flat_map(|stem| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| search_dir.join(format!("{stem}.{ext}")))
                })
                .filter(|path| path.is_file())
                .collect();

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/readability-scores/` on Linux,
/// `~/Library/Application Support/readability-scores/` on macOS, and
/// equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load_file(name: &str, contents: &str) -> Config {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, contents).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.strip_markdown.is_none());
        assert_eq!(config.scores, ScoreOptions::default());
        assert_eq!(config.input_limit(), Some(crate::DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = env_lock();
        let loader = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker();

        let (config, sources) = loader.load().unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let _lock = env_lock();
        let config = load_file(
            "config.toml",
            "log_level = \"debug\"\nlog_dir = \"/tmp/readability-scores\"\n",
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/readability-scores")
        );
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();

        let base_config = tmp.path().join("base.toml");
        fs::write(&base_config, r#"log_level = "warn""#).unwrap();

        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let base_config = Utf8PathBuf::try_from(base_config).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base_config)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.primary_file(), Some(override_config.as_path()));
    }

    #[test]
    fn test_project_config_discovery() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("docs").join("chapters");
        fs::create_dir_all(&sub_dir).unwrap();

        fs::write(
            project_dir.join(".readability-scores.toml"),
            r#"log_level = "debug""#,
        )
        .unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();

        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        fs::write(parent.join(".readability-scores.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();

        let project_config = tmp.path().join(".readability-scores.toml");
        fs::write(&project_config, r#"log_level = "warn""#).unwrap();

        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(!sources.project_files.is_empty());
        assert_eq!(sources.explicit_files.len(), 1);
    }

    #[test]
    fn dotfile_before_regular_file() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".readability-scores.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("readability-scores.toml"), r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();

        fs::write(parent.join("readability-scores.toml"), r#"log_level = "warn""#).unwrap();
        fs::write(child.join(".readability-scores.yaml"), "log_level: error\n").unwrap();

        let child_path = Utf8PathBuf::try_from(child).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&child_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let _lock = env_lock();
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();

        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_or_error_succeeds_with_explicit_file() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, r#"log_level = "debug""#).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load_or_error()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("readability-scores"));
        }
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let _lock = env_lock();
        let config = load_file(
            "config.toml",
            "max_input_bytes = 1024\ndisable_input_limit = true\n",
        );
        assert!(config.disable_input_limit);
        assert_eq!(config.max_input_bytes, Some(1024));
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn max_input_bytes_sets_limit() {
        let _lock = env_lock();
        let config = load_file("config.toml", "max_input_bytes = 2048\n");
        assert_eq!(config.input_limit(), Some(2048));
    }

    #[test]
    fn scores_from_toml() {
        let _lock = env_lock();
        let config = load_file(
            "config.toml",
            "strip_markdown = false\n\n[scores]\nskip_ari = true\ncaps_as_names = true\n",
        );
        assert_eq!(config.strip_markdown, Some(false));
        assert!(config.scores.skip_ari);
        assert!(config.scores.caps_as_names);
        assert!(!config.scores.only_spache);
    }

    #[test]
    fn scores_accept_camel_case_keys() {
        let _lock = env_lock();
        let config = load_file(
            "config.json",
            r#"{"scores": {"onlySMOG": true, "difficultWords": true}}"#,
        );
        assert!(config.scores.only_smog);
        assert!(config.scores.difficult_words);
    }

    #[test]
    fn scores_from_yaml() {
        let _lock = env_lock();
        let config = load_file("config.yaml", "scores:\n  only_dale_chall: true\n");
        assert!(config.scores.only_dale_chall);
    }

    #[test]
    fn non_boolean_score_option_is_off() {
        let _lock = env_lock();
        let config = load_file(
            "config.toml",
            "[scores]\nskip_ari = \"maybe\"\nskip_smog = true\n",
        );
        assert!(!config.scores.skip_ari);
        assert!(config.scores.skip_smog);
    }

    #[test]
    fn default_scores_are_not_serialized() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("scores"));
        assert!(yaml.contains("log_level: info"));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = env_lock();

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "log_level = \"warn\"\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        // SAFETY: test-only; the env mutex serializes env access across tests.
        unsafe {
            std::env::set_var("READABILITY_SCORES_LOG_LEVEL", "error");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("READABILITY_SCORES_LOG_LEVEL");
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_sets_nested_score_option() {
        let _lock = env_lock();

        // SAFETY: test-only; the env mutex serializes env access across tests.
        unsafe {
            std::env::set_var("READABILITY_SCORES_SCORES__ONLY_SMOG", "true");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();

        assert!(config.scores.only_smog);

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("READABILITY_SCORES_SCORES__ONLY_SMOG");
        }
    }
}
