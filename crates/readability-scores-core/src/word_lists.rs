//! Familiar-word vocabularies and their stem indexes.
//!
//! A [`Vocabulary`] wraps one fixed word list with an exact-match set and a
//! [`StemIndex`] that is built on first use and then shared for the life of
//! the process. Building the index is thread-safe and happens at most once
//! per vocabulary; callers that never score Spache never pay for its index.

use std::collections::HashSet;
use std::sync::{LazyLock, OnceLock};

use crate::dictionaries::{dale_chall, spache};
use crate::stemmer;

/// The built-in Spache vocabulary.
pub static SPACHE: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("spache", spache::SPACHE_WORDS));

/// The built-in Dale-Chall vocabulary.
pub static DALE_CHALL: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("dale-chall", dale_chall::DALE_CHALL_WORDS));

/// Set of Porter stems derived from a vocabulary.
#[derive(Debug, Default)]
pub struct StemIndex {
    stems: HashSet<String>,
}

impl StemIndex {
    /// Stem every entry without an apostrophe.
    ///
    /// Contractions are skipped; stemming "can't" or "he'll" produces
    /// fragments that would make unrelated words look familiar.
    pub fn build(words: &[&str]) -> Self {
        let stems = words
            .iter()
            .filter(|w| !w.contains('\''))
            .map(|w| stemmer::stem(w))
            .collect();
        Self { stems }
    }

    /// Whether `stem` came from some entry of the vocabulary.
    pub fn contains(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    /// Number of distinct stems.
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    /// Whether the index holds no stems.
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

/// An immutable familiar-word list.
#[derive(Debug)]
pub struct Vocabulary {
    name: &'static str,
    words: &'static [&'static str],
    lookup: HashSet<&'static str>,
    stems: OnceLock<StemIndex>,
}

impl Vocabulary {
    /// Wrap a static word list. Entries are expected in lowercase.
    pub fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self {
            name,
            words,
            lookup: words.iter().copied().collect(),
            stems: OnceLock::new(),
        }
    }

    /// Short name used in logs.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The entries in list order.
    pub const fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Exact match against a normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// The stem index, building it on the first call.
    pub fn stem_index(&self) -> &StemIndex {
        self.stems.get_or_init(|| {
            let index = StemIndex::build(self.words);
            tracing::debug!(
                vocabulary = self.name,
                entries = self.words.len(),
                stems = index.len(),
                "built stem index"
            );
            index
        })
    }

    /// Whether the stem of `word` matches the stem of some entry.
    pub fn contains_stem_of(&self, word: &str) -> bool {
        self.stem_index().contains(&stemmer::stem(word))
    }

    /// Whether the stem index has been built yet.
    pub fn is_indexed(&self) -> bool {
        self.stems.get().is_some()
    }
}

/// The pair of vocabularies a scoring run classifies against.
#[derive(Debug, Clone, Copy)]
pub struct WordLists<'v> {
    /// Vocabulary for the Spache formula.
    pub spache: &'v Vocabulary,
    /// Vocabulary for the Dale-Chall formula.
    pub dale_chall: &'v Vocabulary,
}

impl WordLists<'static> {
    /// The built-in Spache and Dale-Chall lists.
    pub fn builtin() -> Self {
        Self {
            spache: &SPACHE,
            dale_chall: &DALE_CHALL,
        }
    }
}

impl Default for WordLists<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIXTURE: &[&str] = &["walk", "happy", "can't", "lively"];

    #[test]
    fn exact_lookup() {
        let vocab = Vocabulary::new("fixture", FIXTURE);
        assert!(vocab.contains("walk"));
        assert!(vocab.contains("can't"));
        assert!(!vocab.contains("walked"));
        assert!(!vocab.contains("Walk"));
    }

    #[test]
    fn stem_index_is_lazy_and_built_once() {
        let vocab = Vocabulary::new("fixture", FIXTURE);
        assert!(!vocab.is_indexed());

        let first: *const StemIndex = vocab.stem_index();
        assert!(vocab.is_indexed());
        let second: *const StemIndex = vocab.stem_index();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_first_use_builds_one_index() {
        let vocab = Vocabulary::new("fixture", FIXTURE);
        let shared = &vocab;
        let addrs: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || std::ptr::from_ref(shared.stem_index()) as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addrs.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(addrs[0], std::ptr::from_ref(vocab.stem_index()) as usize);
        assert!(vocab.contains_stem_of("walking"));
    }

    #[test]
    fn contractions_are_not_stemmed() {
        let index = StemIndex::build(FIXTURE);
        assert_eq!(index.len(), 3);
        assert!(index.contains("walk"));
        assert!(index.contains("happi"));
        assert!(index.contains("live"));
        assert!(!index.contains("can't"));
    }

    #[test]
    fn inflections_match_through_stems() {
        let vocab = Vocabulary::new("fixture", FIXTURE);
        assert!(vocab.contains_stem_of("walking"));
        assert!(vocab.contains_stem_of("walks"));
        assert!(!vocab.contains_stem_of("running"));
    }

    #[test]
    fn builtin_lists_are_loaded() {
        let lists = WordLists::builtin();
        assert_eq!(lists.spache.name(), "spache");
        assert_eq!(lists.dale_chall.name(), "dale-chall");
        assert!(lists.spache.contains("the"));
        assert!(lists.dale_chall.contains("the"));
        assert!(lists.dale_chall.words().len() > lists.spache.words().len());
        assert!(lists.dale_chall.contains("lively"));
        assert!(!lists.dale_chall.contains("prickly"));
    }
}
