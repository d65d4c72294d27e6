//! Readability scoring entry point.
//!
//! [`readability_scores`] resolves the options, tokenizes the text,
//! classifies and tallies every word, then applies the requested formulas.
//! Only the stem indexes of the enabled vocabularies are ever built.
//!
//! ```
//! use readability_scores_core::{Metric, ScoreOptions, readability_scores};
//!
//! let scores = readability_scores(
//!     Some("The cat sat on the mat. A dog ran fast."),
//!     Some(&ScoreOptions::only(Metric::FleschKincaid)),
//! )
//! .expect("text is not empty");
//!
//! assert_eq!(scores.word_count, 10);
//! assert_eq!(scores.sentence_count, 2);
//! assert!(scores.flesch_kincaid.is_some());
//! assert!(scores.smog.is_none());
//! ```

use crate::aggregate::Tally;
use crate::classify::Classifier;
use crate::options::{ResolvedConfig, ScoreOptions};
use crate::scores::ReadabilityScores;
use crate::text;
use crate::word_lists::WordLists;

/// Score `text` against the built-in word lists.
///
/// Returns `None` when `text` is absent or empty. Text that contains no
/// words (only whitespace or punctuation) still returns a result, with zero
/// counts and `null` scores.
pub fn readability_scores(
    text: Option<&str>,
    options: Option<&ScoreOptions>,
) -> Option<ReadabilityScores> {
    readability_scores_with(text, options, WordLists::builtin())
}

/// Score `text` against the given word lists.
#[tracing::instrument(skip(text, options, lists), fields(text_len = text.map_or(0, str::len)))]
pub fn readability_scores_with(
    text: Option<&str>,
    options: Option<&ScoreOptions>,
    lists: WordLists<'_>,
) -> Option<ReadabilityScores> {
    let text = text.filter(|t| !t.is_empty())?;
    let config = ResolvedConfig::resolve(options);
    tracing::debug!(
        metrics = ?config.enabled_metrics().collect::<Vec<_>>(),
        difficult_words = config.difficult_words,
        caps_as_names = config.caps_as_names,
        "resolved score options"
    );

    if config.spache {
        lists.spache.stem_index();
    }
    if config.dale_chall {
        lists.dale_chall.stem_index();
    }

    let sentences = text::tokenize(text);
    let classifier = Classifier::new(config, lists);
    let tally = Tally::collect(&sentences, &classifier);
    Some(ReadabilityScores::calculate(tally, &config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Metric;
    use crate::word_lists::Vocabulary;

    const PLAIN: &str = "The cat sat on the mat. A dog ran fast.";

    static SPACHE_FIXTURE: &[&str] = &["the", "a", "cat", "sat", "on", "dog", "ran"];
    static DALE_FIXTURE: &[&str] = &["the", "a", "cat", "sat", "on", "dog", "ran", "lively"];

    fn score_with_fixtures(
        text: &str,
        options: &ScoreOptions,
    ) -> (ReadabilityScores, Vocabulary, Vocabulary) {
        let spache = Vocabulary::new("spache-fixture", SPACHE_FIXTURE);
        let dale = Vocabulary::new("dale-fixture", DALE_FIXTURE);
        let lists = WordLists {
            spache: &spache,
            dale_chall: &dale,
        };
        let scores = readability_scores_with(Some(text), Some(options), lists).unwrap();
        (scores, spache, dale)
    }

    fn has_two_decimals(score: f64) -> bool {
        let scaled = score * 100.0;
        (scaled - scaled.round()).abs() < 1e-6
    }

    #[test]
    fn absent_or_empty_text_has_no_result() {
        assert_eq!(readability_scores(None, None), None);
        assert_eq!(readability_scores(Some(""), None), None);
    }

    #[test]
    fn whitespace_only_text_has_zero_counts() {
        let scores = readability_scores(Some("  \n "), None).unwrap();
        assert_eq!(scores.word_count, 0);
        assert_eq!(scores.sentence_count, 0);
        assert!(scores.ari.unwrap().is_nan());
        assert_eq!(scores.dale_chall, Some(0));
    }

    #[test]
    fn plain_two_sentence_text() {
        let scores = readability_scores(Some(PLAIN), None).unwrap();
        assert_eq!(scores.word_count, 10);
        assert_eq!(scores.sentence_count, 2);
        assert_eq!(scores.syllable_count, 10);
        assert_eq!(scores.letter_count, 28);
        assert_eq!(scores.polysyllabic_word_count, 0);
        assert_eq!(scores.smog, Some(3.13));
        assert_eq!(scores.gunning_fog, Some(2.0));
        assert_eq!(scores.spache, None);
    }

    #[test]
    fn counts_match_tokenizer() {
        let text = "Dr. Smith arrived at 3.15 p.m. today. Nobody expected him! Why?";
        let sentences = text::tokenize(text);
        let words: usize = sentences.iter().map(|s| s.words().len()).sum();
        let scores = readability_scores(Some(text), None).unwrap();
        assert_eq!(scores.sentence_count, sentences.len());
        assert_eq!(scores.word_count, words);
        assert!(scores.polysyllabic_word_count <= scores.word_count);
    }

    #[test]
    fn caps_as_names_excludes_proper_nouns_from_polysyllables() {
        let text = "Yesterday Jennifer visited Washington.";
        let plain = readability_scores(Some(text), None).unwrap();
        let names = ScoreOptions {
            caps_as_names: true,
            ..ScoreOptions::default()
        };
        let with_names = readability_scores(Some(text), Some(&names)).unwrap();

        assert_eq!(plain.polysyllabic_word_count, 4);
        assert_eq!(with_names.polysyllabic_word_count, 1);
        assert_eq!(plain.syllable_count, with_names.syllable_count);
        assert_eq!(plain.letter_count, with_names.letter_count);
        // SMOG counts every polysyllable, names included
        assert_eq!(plain.smog, with_names.smog);
        assert!(with_names.gunning_fog < plain.gunning_fog);
    }

    #[test]
    fn spache_list_is_unique_and_dale_chall_list_is_not() {
        let text = "The zebra sat on the zebra. A zebra ran.";
        let spache_opts = ScoreOptions {
            difficult_words: true,
            only_spache: true,
            ..ScoreOptions::default()
        };
        let (spache, _, dale) = score_with_fixtures(text, &spache_opts);
        assert_eq!(
            spache.spache_unique_unfamiliar_words,
            Some(vec!["zebra".to_string()])
        );
        assert_eq!(spache.spache_unique_unfamiliar_word_count, Some(1));
        assert!(!dale.is_indexed());

        let dale_opts = ScoreOptions {
            difficult_words: true,
            only_dale_chall: true,
            ..ScoreOptions::default()
        };
        let (dale_scores, spache_vocab, _) = score_with_fixtures(text, &dale_opts);
        assert_eq!(
            dale_scores.dale_chall_difficult_words,
            Some(vec!["zebra".to_string(); 3])
        );
        assert_eq!(dale_scores.dale_chall_difficult_word_count, Some(3));
        assert!(!spache_vocab.is_indexed());
    }

    #[test]
    fn familiar_inflections_are_not_difficult() {
        let options = ScoreOptions {
            difficult_words: true,
            only_dale_chall: true,
            ..ScoreOptions::default()
        };
        let (scores, ..) = score_with_fixtures("The dogs sat. A livelier cat ran.", &options);
        assert_eq!(scores.dale_chall_difficult_words, Some(Vec::new()));
    }

    #[test]
    fn dale_chall_is_capped_at_17() {
        let text = "Mitochondria photosynthesis chlorophyll galaxy.";
        let scores = readability_scores(Some(text), None).unwrap();
        assert_eq!(scores.dale_chall_difficult_word_count, Some(4));
        assert_eq!(scores.dale_chall, Some(17));
    }

    #[test]
    fn scores_are_rounded_to_two_decimals() {
        let text = "Readability formulas estimate the schooling a reader needs. \
                    They combine sentence length with word difficulty.";
        let options = ScoreOptions::default();
        let scores = readability_scores(Some(text), Some(&options)).unwrap();
        for score in [
            scores.ari,
            scores.coleman_liau,
            scores.flesch_kincaid,
            scores.smog,
            scores.gunning_fog,
        ] {
            assert!(has_two_decimals(score.unwrap()), "{score:?}");
        }
        let spache = readability_scores(Some(text), Some(&ScoreOptions::only(Metric::Spache)))
            .unwrap()
            .spache
            .unwrap();
        assert!(has_two_decimals(spache));
    }

    #[test]
    fn only_smog_leaves_other_metrics_out() {
        let scores =
            readability_scores(Some(PLAIN), Some(&ScoreOptions::only(Metric::Smog))).unwrap();
        assert!(scores.smog.is_some());
        assert_eq!(scores.ari, None);
        assert_eq!(scores.coleman_liau, None);
        assert_eq!(scores.flesch_kincaid, None);
        assert_eq!(scores.gunning_fog, None);
        assert_eq!(scores.spache, None);
        assert_eq!(scores.dale_chall, None);
        assert_eq!(scores.dale_chall_difficult_word_count, None);
        assert_eq!(scores.word_count, 10);
    }

    #[test]
    fn skip_ari_keeps_the_rest() {
        let options = ScoreOptions::skipping([Metric::Ari]);
        let scores = readability_scores(Some(PLAIN), Some(&options)).unwrap();
        assert_eq!(scores.ari, None);
        assert_eq!(scores.spache, None);
        assert!(scores.dale_chall.is_some());
        assert!(scores.coleman_liau.is_some());
        assert!(scores.flesch_kincaid.is_some());
        assert!(scores.smog.is_some());
        assert!(scores.gunning_fog.is_some());
    }

    #[test]
    fn numbers_are_familiar() {
        let options = ScoreOptions {
            difficult_words: true,
            only_dale_chall: true,
            ..ScoreOptions::default()
        };
        let (scores, ..) = score_with_fixtures("The cat ran 1,200 laps.", &options);
        assert_eq!(
            scores.dale_chall_difficult_words,
            Some(vec!["laps".to_string()])
        );
    }
}
