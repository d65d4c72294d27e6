//! Score calculation and the result record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::{Counts, Tally};
use crate::formulas::{self, SmogCounts, SpacheCounts};
use crate::options::ResolvedConfig;

/// Highest Dale-Chall grade reported.
pub const DALE_CHALL_MAX_GRADE: u8 = 17;

/// Round to two decimal places, nudging by epsilon so that values like
/// `1.005` land on the intended side. Never returns negative zero.
pub fn round_to_2_decimals(n: f64) -> f64 {
    ((n + f64::EPSILON) * 100.0).round() / 100.0 + 0.0
}

/// Dale-Chall grade for a raw score, capped at [`DALE_CHALL_MAX_GRADE`].
pub fn dale_chall_grade(raw: f64) -> u8 {
    formulas::dale_chall_grade_upper(raw)
        .map_or(DALE_CHALL_MAX_GRADE, |grade| grade.min(DALE_CHALL_MAX_GRADE))
}

/// Readability metrics and the counts behind them.
///
/// The five counts are always present. Every other field is present only
/// when the metric (or word-list collection) it belongs to was requested.
/// Scores that cannot be computed (no words) serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScores {
    /// Characters across all words.
    pub letter_count: usize,
    /// Syllables across all words.
    pub syllable_count: usize,
    /// Words.
    pub word_count: usize,
    /// Sentences.
    pub sentence_count: usize,
    /// Words of three or more syllables, excluding proper nouns.
    pub polysyllabic_word_count: usize,

    /// The polysyllabic words, in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polysyllabic_words: Option<Vec<String>>,

    /// Distinct words not on the Spache list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spache_unique_unfamiliar_word_count: Option<usize>,
    /// Those words, first occurrence only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spache_unique_unfamiliar_words: Option<Vec<String>>,
    /// Spache grade level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spache: Option<f64>,

    /// Occurrences of words not on the Dale-Chall list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dale_chall_difficult_word_count: Option<usize>,
    /// Those words, every occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dale_chall_difficult_words: Option<Vec<String>>,
    /// Dale-Chall grade, 0 to 17.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dale_chall: Option<u8>,

    /// Automated Readability Index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ari: Option<f64>,
    /// Coleman-Liau index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coleman_liau: Option<f64>,
    /// Flesch-Kincaid grade level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flesch_kincaid: Option<f64>,
    /// SMOG grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smog: Option<f64>,
    /// Gunning Fog index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gunning_fog: Option<f64>,
}

impl ReadabilityScores {
    /// Apply the enabled formulas to an aggregated tally.
    #[tracing::instrument(skip_all)]
    pub fn calculate(tally: Tally, config: &ResolvedConfig) -> Self {
        let counts = tally.counts;
        let lists = config.difficult_words;
        let metric = |enabled: bool, score: fn(&Counts) -> f64| {
            enabled.then(|| round_to_2_decimals(score(&counts)))
        };

        Self {
            letter_count: counts.letter,
            syllable_count: counts.syllable,
            word_count: counts.word,
            sentence_count: counts.sentence,
            polysyllabic_word_count: counts.complex_polysyllabic_word,
            polysyllabic_words: lists.then_some(tally.polysyllabic_words),

            spache_unique_unfamiliar_word_count: config.spache.then_some(counts.unfamiliar_word),
            spache_unique_unfamiliar_words: (config.spache && lists)
                .then_some(tally.spache_unfamiliar_words),
            spache: config
                .spache
                .then(|| round_to_2_decimals(formulas::spache(SpacheCounts::from(&counts)))),

            dale_chall_difficult_word_count: config.dale_chall.then_some(counts.difficult_word),
            dale_chall_difficult_words: (config.dale_chall && lists)
                .then_some(tally.dale_chall_difficult_words),
            dale_chall: config
                .dale_chall
                .then(|| dale_chall_grade(formulas::dale_chall(&counts))),

            ari: metric(config.ari, formulas::automated_readability),
            coleman_liau: metric(config.coleman_liau, formulas::coleman_liau),
            flesch_kincaid: metric(config.flesch_kincaid, formulas::flesch_kincaid),
            smog: config
                .smog
                .then(|| round_to_2_decimals(formulas::smog(SmogCounts::from(&counts)))),
            gunning_fog: metric(config.gunning_fog, formulas::gunning_fog),
        }
    }
}
