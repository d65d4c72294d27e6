//! One pass over the tokens, accumulating counts and flagged words.

use std::collections::HashSet;

use serde::Serialize;

use crate::classify::{Classifier, WordClass};
use crate::text::Sentence;

/// Scalar tallies every formula reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Characters across all words.
    pub letter: usize,
    /// Syllables across all words.
    pub syllable: usize,
    /// Words.
    pub word: usize,
    /// Sentences containing at least one word.
    pub sentence: usize,
    /// Words with three or more syllables, proper nouns included.
    pub polysyllabic_word: usize,
    /// Words with three or more syllables that are not proper nouns.
    pub complex_polysyllabic_word: usize,
    /// Distinct words unfamiliar to Spache.
    pub unfamiliar_word: usize,
    /// Every occurrence of a word difficult for Dale-Chall.
    pub difficult_word: usize,
}

/// Counts plus the words behind them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// The scalar tallies.
    pub counts: Counts,
    /// Complex polysyllabic words in document order, filled only when word
    /// lists are requested.
    pub polysyllabic_words: Vec<String>,
    /// Spache unfamiliar words, first occurrence only.
    pub spache_unfamiliar_words: Vec<String>,
    /// Dale-Chall difficult words, every occurrence.
    pub dale_chall_difficult_words: Vec<String>,
    seen_unfamiliar: HashSet<String>,
}

impl Tally {
    /// Walk every sentence and word once.
    #[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
    pub fn collect(sentences: &[Sentence<'_>], classifier: &Classifier<'_>) -> Self {
        let mut tally = Self::default();
        for sentence in sentences {
            tally.counts.sentence += 1;
            for word in sentence.words() {
                let class = classifier.classify(word);
                tally.add(word.surface(), &class, classifier.collects_word_lists());
            }
        }
        tracing::debug!(counts = ?tally.counts, "aggregated text");
        tally
    }

    /// Record one classified word.
    pub fn add(&mut self, surface: &str, class: &WordClass, collect_polysyllabic: bool) {
        let counts = &mut self.counts;
        counts.word += 1;
        counts.syllable += class.syllables;
        counts.letter += class.letters;

        if class.polysyllabic {
            counts.polysyllabic_word += 1;
            if class.is_complex() {
                counts.complex_polysyllabic_word += 1;
                if collect_polysyllabic {
                    self.polysyllabic_words.push(surface.to_owned());
                }
            }
        }

        if class.is_spache_unfamiliar() && self.seen_unfamiliar.insert(surface.to_owned()) {
            self.spache_unfamiliar_words.push(surface.to_owned());
            counts.unfamiliar_word += 1;
        }

        if class.is_dale_chall_difficult() {
            self.dale_chall_difficult_words.push(surface.to_owned());
            counts.difficult_word += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(syllables: usize, name: bool) -> WordClass {
        WordClass {
            letters: 5,
            syllables,
            polysyllabic: syllables >= 3,
            name,
            spache_familiar: None,
            dale_chall_familiar: None,
        }
    }

    #[test]
    fn scalar_totals() {
        let mut tally = Tally::default();
        tally.add("cat", &class(1, false), true);
        tally.add("banana", &class(3, false), true);
        tally.add("Jefferson", &class(3, true), true);

        let counts = tally.counts;
        assert_eq!(counts.word, 3);
        assert_eq!(counts.syllable, 7);
        assert_eq!(counts.letter, 15);
        assert_eq!(counts.polysyllabic_word, 2);
        assert_eq!(counts.complex_polysyllabic_word, 1);
        assert_eq!(tally.polysyllabic_words, vec!["banana"]);
    }

    #[test]
    fn polysyllabic_list_only_when_requested() {
        let mut tally = Tally::default();
        tally.add("banana", &class(3, false), false);
        assert_eq!(tally.counts.complex_polysyllabic_word, 1);
        assert!(tally.polysyllabic_words.is_empty());
    }

    #[test]
    fn spache_words_are_deduplicated_in_order() {
        let unfamiliar = WordClass {
            spache_familiar: Some(false),
            ..class(2, false)
        };
        let mut tally = Tally::default();
        for word in ["zebra", "quartz", "zebra", "Zebra", "quartz"] {
            tally.add(word, &unfamiliar, false);
        }
        assert_eq!(tally.spache_unfamiliar_words, vec!["zebra", "quartz", "Zebra"]);
        assert_eq!(tally.counts.unfamiliar_word, 3);
    }

    #[test]
    fn dale_chall_words_keep_every_occurrence() {
        let difficult = WordClass {
            dale_chall_familiar: Some(false),
            ..class(2, false)
        };
        let mut tally = Tally::default();
        for word in ["zebra", "zebra", "quartz"] {
            tally.add(word, &difficult, false);
        }
        assert_eq!(tally.dale_chall_difficult_words, vec!["zebra", "zebra", "quartz"]);
        assert_eq!(tally.counts.difficult_word, 3);
    }

    #[test]
    fn familiar_words_are_not_listed() {
        let familiar = WordClass {
            spache_familiar: Some(true),
            dale_chall_familiar: Some(true),
            ..class(1, false)
        };
        let mut tally = Tally::default();
        tally.add("dog", &familiar, true);
        assert_eq!(tally.counts.unfamiliar_word, 0);
        assert_eq!(tally.counts.difficult_word, 0);
    }
}
