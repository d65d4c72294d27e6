//! Score command: every enabled readability metric for one input.

use std::fmt::Write as _;

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use readability_scores_core::config::Config;
use readability_scores_core::{Metric, ReadabilityScores, ScoreOptions, markdown};

use super::read_input;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// File to score (`-` reads standard input).
    pub file: Utf8PathBuf,

    /// Compute only this metric.
    #[arg(long, value_enum, value_name = "METRIC")]
    pub only: Option<Metric>,

    /// Leave out a metric (repeatable). Ignored with --only.
    #[arg(long, value_enum, value_name = "METRIC")]
    pub skip: Vec<Metric>,

    /// List the polysyllabic, unfamiliar, and difficult words.
    #[arg(long)]
    pub difficult_words: bool,

    /// Treat capitalized words as proper nouns.
    #[arg(long)]
    pub caps_as_names: bool,

    /// Strip markdown before scoring (default for .md files).
    #[arg(long, overrides_with = "no_strip_markdown")]
    pub strip_markdown: bool,

    /// Score the raw text even for markdown files.
    #[arg(long, overrides_with = "strip_markdown")]
    pub no_strip_markdown: bool,
}

impl ScoreArgs {
    /// Combine these flags with the configured defaults.
    ///
    /// `--only` replaces any metric selection from config; `--skip` and the
    /// word-list flags add to it.
    pub fn options(&self, defaults: &ScoreOptions) -> ScoreOptions {
        let mut options = match self.only {
            Some(metric) => ScoreOptions {
                difficult_words: defaults.difficult_words,
                caps_as_names: defaults.caps_as_names,
                ..ScoreOptions::only(metric)
            },
            None => defaults.clone(),
        };
        for metric in &self.skip {
            options.set_skip(*metric);
        }
        options.difficult_words |= self.difficult_words;
        options.caps_as_names |= self.caps_as_names;
        options
    }

    /// Whether to strip markdown, given the configured default.
    pub fn strip_markdown(&self, configured: Option<bool>) -> bool {
        if self.strip_markdown {
            true
        } else if self.no_strip_markdown {
            false
        } else {
            configured.unwrap_or_else(|| markdown::is_markdown_path(self.file.as_str()))
        }
    }
}

/// Score a file and print the result.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.options(&config.scores);
    let strip_md = args.strip_markdown(config.strip_markdown);
    debug!(?options, strip_md, "executing score command");

    let content = read_input(&args.file, max_input_bytes)?;
    let prose = if strip_md {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let Some(scores) = readability_scores_core::readability_scores(Some(&prose), Some(&options))
    else {
        if global_json {
            println!("null");
        } else {
            println!(
                "{} {}: no text to score",
                "NOTE:".if_supports_color(Stream::Stdout, |t| t.yellow()),
                args.file
            );
        }
        return Ok(());
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        print!("{}", render_text(args.file.as_str(), &scores));
    }
    Ok(())
}

fn format_score(score: f64) -> String {
    if score.is_finite() {
        format!("{score:.2}")
    } else {
        "n/a".to_string()
    }
}

/// Human-readable table of counts, scores, and word lists.
pub fn render_text(title: &str, scores: &ReadabilityScores) -> String {
    let mut out = String::new();
    let mut row = |label: &str, value: String| {
        let _ = writeln!(
            out,
            "  {:<28} {}",
            label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
            value
        );
    };

    row("Sentences", scores.sentence_count.to_string());
    row("Words", scores.word_count.to_string());
    row("Syllables", scores.syllable_count.to_string());
    row("Letters", scores.letter_count.to_string());
    row("Polysyllabic words", scores.polysyllabic_word_count.to_string());
    if let Some(n) = scores.spache_unique_unfamiliar_word_count {
        row("Spache unfamiliar words", n.to_string());
    }
    if let Some(n) = scores.dale_chall_difficult_word_count {
        row("Dale-Chall difficult words", n.to_string());
    }

    let metrics = [
        (Metric::Spache, scores.spache),
        (Metric::DaleChall, scores.dale_chall.map(f64::from)),
        (Metric::Ari, scores.ari),
        (Metric::ColemanLiau, scores.coleman_liau),
        (Metric::FleschKincaid, scores.flesch_kincaid),
        (Metric::Smog, scores.smog),
        (Metric::GunningFog, scores.gunning_fog),
    ];
    for (metric, value) in metrics {
        let Some(value) = value else { continue };
        let shown = if metric == Metric::DaleChall {
            format!("{value:.0}")
        } else {
            format_score(value)
        };
        row(metric.label(), shown);
    }

    let lists = [
        ("Polysyllabic", &scores.polysyllabic_words),
        ("Spache unfamiliar", &scores.spache_unique_unfamiliar_words),
        ("Dale-Chall difficult", &scores.dale_chall_difficult_words),
    ];
    for (label, words) in lists {
        if let Some(words) = words
            && !words.is_empty()
        {
            row(label, words.join(", "));
        }
    }

    format!(
        "{}\n{out}",
        title.if_supports_color(Stream::Stdout, |t| t.bold())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: &str) -> ScoreArgs {
        ScoreArgs {
            file: Utf8PathBuf::from(file),
            ..ScoreArgs::default()
        }
    }

    #[test]
    fn only_replaces_configured_selection() {
        let defaults = ScoreOptions {
            only_smog: true,
            caps_as_names: true,
            ..ScoreOptions::default()
        };
        let cli = ScoreArgs {
            only: Some(Metric::GunningFog),
            ..args("a.txt")
        };
        let options = cli.options(&defaults);
        assert!(!options.only_smog);
        assert!(options.only_gunning_fog);
        assert!(options.caps_as_names);
    }

    #[test]
    fn skip_adds_to_configured_selection() {
        let defaults = ScoreOptions::skipping([Metric::Smog]);
        let cli = ScoreArgs {
            skip: vec![Metric::Ari],
            difficult_words: true,
            ..args("a.txt")
        };
        let options = cli.options(&defaults);
        assert!(options.skip_smog);
        assert!(options.skip_ari);
        assert!(options.difficult_words);
    }

    #[test]
    fn markdown_stripping_defaults_by_extension() {
        assert!(args("README.md").strip_markdown(None));
        assert!(!args("notes.txt").strip_markdown(None));
        assert!(!args("README.md").strip_markdown(Some(false)));
        assert!(args("notes.txt").strip_markdown(Some(true)));

        let forced = ScoreArgs {
            no_strip_markdown: true,
            ..args("README.md")
        };
        assert!(!forced.strip_markdown(Some(true)));
    }

    #[test]
    fn text_table_lists_enabled_metrics() {
        let options = ScoreOptions {
            difficult_words: true,
            ..ScoreOptions::default()
        };
        let scores = readability_scores_core::readability_scores(
            Some("The cat sat on the mat. A dog ran fast."),
            Some(&options),
        )
        .unwrap();
        let text = render_text("sample.txt", &scores);
        assert!(text.contains("sample.txt"));
        assert!(text.contains("Words"));
        assert!(text.contains("Flesch-Kincaid"));
        assert!(text.contains("Gunning Fog"));
        assert!(text.contains("2.00"));
        assert!(!text.contains("Spache"));
    }

    #[test]
    fn non_finite_scores_show_as_na() {
        assert_eq!(format_score(f64::NAN), "n/a");
        assert_eq!(format_score(4.5678), "4.57");
    }
}
