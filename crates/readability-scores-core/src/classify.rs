//! Per-word classification.
//!
//! Each rule is a small predicate over a literal word so it can be checked
//! on its own. [`Classifier`] composes them for one scoring run.

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::syllables;
use crate::options::ResolvedConfig;
use crate::text::Word;
use crate::word_lists::{Vocabulary, WordLists};

/// Minimum syllables for a word to count as polysyllabic.
pub const POLYSYLLABIC_MIN: usize = 3;

/// Whole numbers such as `7`, `250`, `1000`, or `12,500`.
static INTEGER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{0,2}(?:,?[0-9]{3})*$").expect("valid regex"));

/// Endings stripped before the Dale-Chall stem lookup.
static DALE_CHALL_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:n|ly|(?:l?i)?er|(?:l?i)?est)$").expect("valid regex"));

/// Comparative and superlative forms of `-ly` adjectives.
static LIER_LIEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:lier|liest)$").expect("valid regex"));

const SPACHE_SUFFIXES: &[&str] = &["s", "ing", "ed"];
const DALE_CHALL_SUFFIXES: &[&str] = &["s", "ing", "n", "ed", "ly", "er", "est"];

/// Whether a syllable count makes a word polysyllabic.
pub const fn is_polysyllabic(syllables: usize) -> bool {
    syllables >= POLYSYLLABIC_MIN
}

/// Whether the surface text begins with an uppercase ASCII letter.
pub fn starts_uppercase(surface: &str) -> bool {
    surface.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Whether a word is taken to be a proper noun.
pub fn is_treated_as_name(surface: &str, caps_as_names: bool) -> bool {
    caps_as_names && starts_uppercase(surface)
}

/// Whether a normalized word is a whole number with optional thousands separators.
pub fn is_integer_literal(normalized: &str) -> bool {
    INTEGER_LITERAL.is_match(normalized)
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

/// Whether a word carries an inflection the Spache stem lookup covers.
pub fn has_spache_suffix(normalized: &str) -> bool {
    ends_with_any(normalized, SPACHE_SUFFIXES)
}

/// Whether a word carries an inflection the Dale-Chall suffix test covers.
pub fn has_dale_chall_suffix(normalized: &str) -> bool {
    ends_with_any(normalized, DALE_CHALL_SUFFIXES)
}

/// Spache familiarity, ignoring the proper-noun rule.
pub fn is_spache_familiar(normalized: &str, vocabulary: &Vocabulary) -> bool {
    vocabulary.contains(normalized)
        || is_integer_literal(normalized)
        || (has_spache_suffix(normalized) && vocabulary.contains_stem_of(normalized))
}

/// Dale-Chall familiarity, ignoring the proper-noun rule.
pub fn is_dale_chall_familiar(normalized: &str, vocabulary: &Vocabulary) -> bool {
    vocabulary.contains(normalized)
        || is_integer_literal(normalized)
        || passes_dale_chall_suffix_test(normalized, vocabulary)
}

/// Inflected forms of listed Dale-Chall words.
///
/// Strips `n`, `ly`, `er`, `est`, `ier`, `iest`, `lier`, or `liest` and looks
/// the stem of the rest up in the index. A `-lier`/`-liest` word passes only
/// when its `-ly` form is itself listed, so "livelier" inherits from
/// "lively" while "pricklier" does not inherit from "prick".
pub fn passes_dale_chall_suffix_test(normalized: &str, vocabulary: &Vocabulary) -> bool {
    if !has_dale_chall_suffix(normalized) {
        return false;
    }

    let base = DALE_CHALL_STRIP.replace(normalized, "");
    if !vocabulary.contains_stem_of(&base) {
        return false;
    }

    let ly_form = LIER_LIEST.replace(normalized, "ly");
    ly_form == normalized || vocabulary.contains(&ly_form)
}

/// Everything the aggregator needs to know about one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordClass {
    /// Characters in the surface text.
    pub letters: usize,
    /// Estimated syllables.
    pub syllables: usize,
    /// Three or more syllables.
    pub polysyllabic: bool,
    /// Treated as a proper noun.
    pub name: bool,
    /// Familiar to Spache; `None` when Spache is off.
    pub spache_familiar: Option<bool>,
    /// Familiar to Dale-Chall; `None` when Dale-Chall is off.
    pub dale_chall_familiar: Option<bool>,
}

impl WordClass {
    /// Polysyllabic and not a proper noun.
    pub const fn is_complex(&self) -> bool {
        self.polysyllabic && !self.name
    }

    /// Counts against Spache.
    pub const fn is_spache_unfamiliar(&self) -> bool {
        matches!(self.spache_familiar, Some(false))
    }

    /// Counts against Dale-Chall.
    pub const fn is_dale_chall_difficult(&self) -> bool {
        matches!(self.dale_chall_familiar, Some(false))
    }
}

/// Classifies words for one scoring run.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'v> {
    config: ResolvedConfig,
    lists: WordLists<'v>,
}

impl<'v> Classifier<'v> {
    /// Create a classifier for `config` over `lists`.
    pub const fn new(config: ResolvedConfig, lists: WordLists<'v>) -> Self {
        Self { config, lists }
    }

    /// Whether flagged words should be collected into lists.
    pub const fn collects_word_lists(&self) -> bool {
        self.config.difficult_words
    }

    /// Classify one word.
    pub fn classify(&self, word: &Word<'_>) -> WordClass {
        let surface = word.surface();
        let syllables = syllables::count_syllables(surface);
        let name = is_treated_as_name(surface, self.config.caps_as_names);

        let needs_familiarity = self.config.spache || self.config.dale_chall;
        let normalized = if needs_familiarity && !name {
            word.normalized()
        } else {
            String::new()
        };

        let spache_familiar = self
            .config
            .spache
            .then(|| name || is_spache_familiar(&normalized, self.lists.spache));
        let dale_chall_familiar = self
            .config
            .dale_chall
            .then(|| name || is_dale_chall_familiar(&normalized, self.lists.dale_chall));

        WordClass {
            letters: word.letter_count(),
            syllables,
            polysyllabic: is_polysyllabic(syllables),
            name,
            spache_familiar,
            dale_chall_familiar,
        }
    }
}
