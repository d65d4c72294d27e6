//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use readability_scores_core::config::{Config, ConfigSources};
use readability_scores_core::{Metric, ResolvedConfig};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// `None` when the limit is disabled.
    input_limit_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strip_markdown: Option<bool>,
    metrics: Vec<Metric>,
    difficult_words: bool,
    caps_as_names: bool,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let resolved = ResolvedConfig::resolve(Some(&config.scores));
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            input_limit_bytes: config.input_limit(),
            strip_markdown: config.strip_markdown,
            metrics: resolved.enabled_metrics().collect(),
            difficult_words: resolved.difficult_words,
            caps_as_names: resolved.caps_as_names,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        print!("{}", render_text(&full_info));
    }

    Ok(())
}

fn render_text(info: &FullInfo) -> String {
    let label = |s: &'static str| s.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string();
    let heading =
        |s: &'static str| s.if_supports_color(Stream::Stdout, |t| t.bold()).to_string();

    let package = &info.package;
    let mut lines = vec![format!(
        "{} {}",
        package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        package.version.if_supports_color(Stream::Stdout, |t| t.green())
    )];
    if !package.description.is_empty() {
        lines.push(package.description.to_string());
    }
    if !package.license.is_empty() {
        lines.push(format!("{}: {}", label("License"), package.license));
    }
    if !package.repository.is_empty() {
        lines.push(format!("{}: {}", label("Repository"), package.repository));
    }

    let config = &info.config;
    lines.push(String::new());
    lines.push(heading("Configuration"));
    lines.push(format!(
        "{}: {}",
        label("Config file"),
        config.config_file.as_deref().unwrap_or("none loaded")
    ));
    lines.push(format!("{}: {}", label("Log level"), config.log_level));
    if let Some(ref dir) = config.log_dir {
        lines.push(format!("{}: {dir}", label("Log directory")));
    }
    lines.push(format!(
        "{}: {}",
        label("Input limit"),
        config
            .input_limit_bytes
            .map_or_else(|| "disabled".to_string(), |n| format!("{n} bytes"))
    ));
    lines.push(format!(
        "{}: {}",
        label("Strip markdown"),
        config
            .strip_markdown
            .map_or("by file extension", |s| if s { "always" } else { "never" })
    ));

    lines.push(String::new());
    lines.push(heading("Scores"));
    let metrics: Vec<&str> = config.metrics.iter().map(|m| m.label()).collect();
    lines.push(format!("{}: {}", label("Metrics"), metrics.join(", ")));
    lines.push(format!(
        "{}: {}",
        label("Difficult words"),
        config.difficult_words
    ));
    lines.push(format!("{}: {}", label("Caps as names"), config.caps_as_names));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
