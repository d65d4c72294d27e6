//! Score options and their resolution into the set of metrics to compute.
//!
//! Callers pass a sparse [`ScoreOptions`] record (every flag defaults to
//! off). [`ResolvedConfig::resolve`] turns it into one flag per metric:
//!
//! 1. No options at all: every metric except Spache.
//! 2. Any `only_*` flag: exactly that metric, the first one set in
//!    [`Metric::ALL`] order. Skip flags are ignored.
//! 3. Otherwise every metric whose `skip_*` flag is unset, except Spache,
//!    which is opt-in through `only_spache`.
//!
//! `difficult_words` and `caps_as_names` are independent of the metric
//! selection.

use std::collections::BTreeSet;
use std::fmt;

use schemars::JsonSchema;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A readability metric, in selection priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Metric {
    /// Spache readability formula (primary grades).
    Spache,
    /// New Dale-Chall formula.
    DaleChall,
    /// Automated Readability Index.
    Ari,
    /// Coleman-Liau index.
    ColemanLiau,
    /// Flesch-Kincaid grade level.
    FleschKincaid,
    /// SMOG grade.
    Smog,
    /// Gunning Fog index.
    GunningFog,
}

impl Metric {
    /// All metrics in priority order.
    pub const ALL: [Self; 7] = [
        Self::Spache,
        Self::DaleChall,
        Self::Ari,
        Self::ColemanLiau,
        Self::FleschKincaid,
        Self::Smog,
        Self::GunningFog,
    ];

    /// Kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spache => "spache",
            Self::DaleChall => "dale-chall",
            Self::Ari => "ari",
            Self::ColemanLiau => "coleman-liau",
            Self::FleschKincaid => "flesch-kincaid",
            Self::Smog => "smog",
            Self::GunningFog => "gunning-fog",
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Spache => "Spache",
            Self::DaleChall => "Dale-Chall",
            Self::Ari => "Automated Readability Index",
            Self::ColemanLiau => "Coleman-Liau",
            Self::FleschKincaid => "Flesch-Kincaid",
            Self::Smog => "SMOG",
            Self::GunningFog => "Gunning Fog",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse, user-facing scoring options.
///
/// Field names accept the camelCase spelling (`onlySMOG`, `skipARI`,
/// `difficultWords`) as well as snake_case, so JSON produced for other
/// readability tools deserializes unchanged. A value that is not a boolean
/// (`null`, `"yes"`, `1`) counts as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoreOptions {
    /// Include the lists of polysyllabic, unfamiliar, and difficult words.
    #[serde(alias = "difficultWords", deserialize_with = "lenient_bool")]
    pub difficult_words: bool,
    /// Treat any word starting with a capital letter as a proper noun.
    #[serde(alias = "capsAsNames", deserialize_with = "lenient_bool")]
    pub caps_as_names: bool,

    /// Compute only the Spache score.
    #[serde(alias = "onlySpache", deserialize_with = "lenient_bool")]
    pub only_spache: bool,
    /// Compute only the Dale-Chall score.
    #[serde(alias = "onlyDaleChall", deserialize_with = "lenient_bool")]
    pub only_dale_chall: bool,
    /// Compute only the Automated Readability Index.
    #[serde(alias = "onlyARI", deserialize_with = "lenient_bool")]
    pub only_ari: bool,
    /// Compute only the Coleman-Liau index.
    #[serde(alias = "onlyColemanLiau", deserialize_with = "lenient_bool")]
    pub only_coleman_liau: bool,
    /// Compute only the Flesch-Kincaid grade.
    #[serde(alias = "onlyFleschKincaid", deserialize_with = "lenient_bool")]
    pub only_flesch_kincaid: bool,
    /// Compute only the SMOG grade.
    #[serde(alias = "onlySMOG", deserialize_with = "lenient_bool")]
    pub only_smog: bool,
    /// Compute only the Gunning Fog index.
    #[serde(alias = "onlyGunningFog", deserialize_with = "lenient_bool")]
    pub only_gunning_fog: bool,

    /// Leave out the Dale-Chall score.
    #[serde(alias = "skipDaleChall", deserialize_with = "lenient_bool")]
    pub skip_dale_chall: bool,
    /// Leave out the Automated Readability Index.
    #[serde(alias = "skipARI", deserialize_with = "lenient_bool")]
    pub skip_ari: bool,
    /// Leave out the Coleman-Liau index.
    #[serde(alias = "skipColemanLiau", deserialize_with = "lenient_bool")]
    pub skip_coleman_liau: bool,
    /// Leave out the Flesch-Kincaid grade.
    #[serde(alias = "skipFleschKincaid", deserialize_with = "lenient_bool")]
    pub skip_flesch_kincaid: bool,
    /// Leave out the SMOG grade.
    #[serde(alias = "skipSMOG", deserialize_with = "lenient_bool")]
    pub skip_smog: bool,
    /// Leave out the Gunning Fog index.
    #[serde(alias = "skipGunningFog", deserialize_with = "lenient_bool")]
    pub skip_gunning_fog: bool,
}

/// Only a literal `true` turns an option on. `null`, strings, numbers, and
/// any other value leave it off instead of failing the whole record.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Bool(bool),
        Other(IgnoredAny),
    }

    Ok(matches!(Lenient::deserialize(deserializer)?, Lenient::Bool(true)))
}

impl ScoreOptions {
    /// Options selecting a single metric.
    pub fn only(metric: Metric) -> Self {
        let mut options = Self::default();
        options.set_only(metric);
        options
    }

    /// Options leaving out each of `metrics`.
    pub fn skipping(metrics: impl IntoIterator<Item = Metric>) -> Self {
        let mut options = Self::default();
        for metric in metrics {
            options.set_skip(metric);
        }
        options
    }

    /// Whether no flag is set.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Turn on the `only_*` flag for `metric`.
    pub const fn set_only(&mut self, metric: Metric) {
        match metric {
            Metric::Spache => self.only_spache = true,
            Metric::DaleChall => self.only_dale_chall = true,
            Metric::Ari => self.only_ari = true,
            Metric::ColemanLiau => self.only_coleman_liau = true,
            Metric::FleschKincaid => self.only_flesch_kincaid = true,
            Metric::Smog => self.only_smog = true,
            Metric::GunningFog => self.only_gunning_fog = true,
        }
    }

    /// Turn on the `skip_*` flag for `metric`. Spache has no skip flag.
    pub const fn set_skip(&mut self, metric: Metric) {
        match metric {
            Metric::Spache => {}
            Metric::DaleChall => self.skip_dale_chall = true,
            Metric::Ari => self.skip_ari = true,
            Metric::ColemanLiau => self.skip_coleman_liau = true,
            Metric::FleschKincaid => self.skip_flesch_kincaid = true,
            Metric::Smog => self.skip_smog = true,
            Metric::GunningFog => self.skip_gunning_fog = true,
        }
    }

    const fn only_flag(&self, metric: Metric) -> bool {
        match metric {
            Metric::Spache => self.only_spache,
            Metric::DaleChall => self.only_dale_chall,
            Metric::Ari => self.only_ari,
            Metric::ColemanLiau => self.only_coleman_liau,
            Metric::FleschKincaid => self.only_flesch_kincaid,
            Metric::Smog => self.only_smog,
            Metric::GunningFog => self.only_gunning_fog,
        }
    }

    const fn skip_flag(&self, metric: Metric) -> bool {
        match metric {
            Metric::Spache => false,
            Metric::DaleChall => self.skip_dale_chall,
            Metric::Ari => self.skip_ari,
            Metric::ColemanLiau => self.skip_coleman_liau,
            Metric::FleschKincaid => self.skip_flesch_kincaid,
            Metric::Smog => self.skip_smog,
            Metric::GunningFog => self.skip_gunning_fog,
        }
    }

    /// How these options select metrics.
    pub fn selection(&self) -> Selection {
        Metric::ALL
            .into_iter()
            .find(|m| self.only_flag(*m))
            .map_or_else(
                || {
                    Selection::AllExcept(
                        Metric::ALL
                            .into_iter()
                            .filter(|m| self.skip_flag(*m))
                            .collect(),
                    )
                },
                Selection::Only,
            )
    }

    /// Combine two option sets, keeping every flag either one turns on.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            difficult_words: self.difficult_words || other.difficult_words,
            caps_as_names: self.caps_as_names || other.caps_as_names,
            only_spache: self.only_spache || other.only_spache,
            only_dale_chall: self.only_dale_chall || other.only_dale_chall,
            only_ari: self.only_ari || other.only_ari,
            only_coleman_liau: self.only_coleman_liau || other.only_coleman_liau,
            only_flesch_kincaid: self.only_flesch_kincaid || other.only_flesch_kincaid,
            only_smog: self.only_smog || other.only_smog,
            only_gunning_fog: self.only_gunning_fog || other.only_gunning_fog,
            skip_dale_chall: self.skip_dale_chall || other.skip_dale_chall,
            skip_ari: self.skip_ari || other.skip_ari,
            skip_coleman_liau: self.skip_coleman_liau || other.skip_coleman_liau,
            skip_flesch_kincaid: self.skip_flesch_kincaid || other.skip_flesch_kincaid,
            skip_smog: self.skip_smog || other.skip_smog,
            skip_gunning_fog: self.skip_gunning_fog || other.skip_gunning_fog,
        }
    }
}

/// Metric selection mode derived from [`ScoreOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A single metric; every other metric is off.
    Only(Metric),
    /// Every metric except Spache and the skipped ones.
    AllExcept(BTreeSet<Metric>),
}

impl Selection {
    /// Whether this selection turns `metric` on.
    pub fn includes(&self, metric: Metric) -> bool {
        match self {
            Self::Only(only) => *only == metric,
            Self::AllExcept(skipped) => metric != Metric::Spache && !skipped.contains(&metric),
        }
    }
}

/// Fully resolved flags for one scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ResolvedConfig {
    /// Collect word lists alongside counts.
    pub difficult_words: bool,
    /// Capitalized words are proper nouns.
    pub caps_as_names: bool,
    /// Compute Spache.
    pub spache: bool,
    /// Compute Dale-Chall.
    pub dale_chall: bool,
    /// Compute ARI.
    pub ari: bool,
    /// Compute Coleman-Liau.
    pub coleman_liau: bool,
    /// Compute Flesch-Kincaid.
    pub flesch_kincaid: bool,
    /// Compute SMOG.
    pub smog: bool,
    /// Compute Gunning Fog.
    pub gunning_fog: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl ResolvedConfig {
    /// Resolve sparse options. `None` means "use the defaults".
    pub fn resolve(options: Option<&ScoreOptions>) -> Self {
        let defaults = ScoreOptions::default();
        let options = options.unwrap_or(&defaults);
        let selection = options.selection();

        Self {
            difficult_words: options.difficult_words,
            caps_as_names: options.caps_as_names,
            spache: selection.includes(Metric::Spache),
            dale_chall: selection.includes(Metric::DaleChall),
            ari: selection.includes(Metric::Ari),
            coleman_liau: selection.includes(Metric::ColemanLiau),
            flesch_kincaid: selection.includes(Metric::FleschKincaid),
            smog: selection.includes(Metric::Smog),
            gunning_fog: selection.includes(Metric::GunningFog),
        }
    }

    /// Whether `metric` is turned on.
    pub const fn is_enabled(&self, metric: Metric) -> bool {
        match metric {
            Metric::Spache => self.spache,
            Metric::DaleChall => self.dale_chall,
            Metric::Ari => self.ari,
            Metric::ColemanLiau => self.coleman_liau,
            Metric::FleschKincaid => self.flesch_kincaid,
            Metric::Smog => self.smog,
            Metric::GunningFog => self.gunning_fog,
        }
    }

    /// Enabled metrics in priority order.
    pub fn enabled_metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        Metric::ALL.into_iter().filter(|m| self.is_enabled(*m))
    }
}
