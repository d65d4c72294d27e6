//! Tokenization into sentences and words.
//!
//! Sentences are found with a character scan that looks at the context around
//! each terminator (abbreviations, initials, decimals, URLs, what follows).
//! Words are runs of letters and digits that may be joined by an inner
//! apostrophe, a hyphen, or a separator between digits, so `don't`,
//! `battle-field`, and `1,000` each count once.
//!
//! Tokens borrow from the input text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Regex for a decimal number at the end of the scanned text (3.14).
static TRAILING_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]*$").expect("valid regex"));

/// Regex for a URL or email address at the end of the scanned text.
static TRAILING_URL_OR_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:https?://|www\.)\S+|[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+)$")
        .expect("valid regex")
});

/// Regex for initials (J.K., U.S.A.).
static INITIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+[A-Z]?$").expect("valid regex"));

/// A sentence and the words inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    text: &'a str,
    words: Vec<Word<'a>>,
}

impl<'a> Sentence<'a> {
    /// The sentence text, trimmed.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Words in document order.
    pub fn words(&self) -> &[Word<'a>] {
        &self.words
    }
}

/// A single word as it appears in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    surface: &'a str,
}

impl<'a> Word<'a> {
    /// Wrap a literal word. Used by callers that tokenize on their own.
    pub const fn new(surface: &'a str) -> Self {
        Self { surface }
    }

    /// The literal text of the word.
    pub const fn surface(&self) -> &'a str {
        self.surface
    }

    /// Lowercased form with curly apostrophes folded to `'` and hyphens removed.
    pub fn normalized(&self) -> String {
        normalize(self.surface)
    }

    /// Character count of the surface text. Combining marks belong to the
    /// letter before them, so decomposed and precomposed spellings agree.
    pub fn letter_count(&self) -> usize {
        self.surface.chars().filter(|c| !is_combining_mark(*c)).count()
    }
}

/// Lowercase a word, fold `’` into `'`, and drop hyphens.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| !is_hyphen(*c))
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split text into sentences of words. Sentences without words are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<Sentence<'_>> {
    sentence_spans(text)
        .into_iter()
        .filter_map(|span| {
            let slice = text[span].trim();
            let words = split_words(slice);
            (!words.is_empty()).then_some(Sentence {
                text: slice,
                words,
            })
        })
        .collect()
}

/// Split text into sentence strings.
pub fn split_sentences(text: &str) -> Vec<&str> {
    tokenize(text).into_iter().map(|s| s.text).collect()
}

/// Split a run of text into words, ignoring sentence boundaries.
pub fn split_words(text: &str) -> Vec<Word<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].1.is_alphanumeric() {
            i += 1;
            continue;
        }

        let start = chars[i].0;
        let mut last = i;
        let mut j = i + 1;
        while j < chars.len() {
            let ch = chars[j].1;
            if ch.is_alphanumeric() || is_combining_mark(ch) {
                last = j;
                j += 1;
            } else if j + 1 < chars.len()
                && chars[j + 1].1.is_alphanumeric()
                && joins(chars[j - 1].1, ch, chars[j + 1].1)
            {
                last = j + 1;
                j += 2;
            } else {
                break;
            }
        }

        let end = chars[last].0 + chars[last].1.len_utf8();
        words.push(Word::new(&text[start..end]));
        i = j;
    }

    words
}

/// Combining diacritical marks, as found in decomposed (NFD) text.
fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Whether `sep` joins the characters on either side into one word.
fn joins(before: char, sep: char, after: char) -> bool {
    match sep {
        '\'' | '\u{2019}' => true,
        ',' | '.' => before.is_ascii_digit() && after.is_ascii_digit(),
        c => is_hyphen(c),
    }
}

const fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}')
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Byte ranges of candidate sentences, covering the whole input.
fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start = 0;

    for (i, &(offset, ch)) in chars.iter().enumerate() {
        let boundary_end = if is_sentence_terminator(ch) {
            let context = SentenceContext::at(text, &chars, i);
            context
                .is_boundary(&text[start..offset + 1])
                .then_some(offset + 1)
        } else if ch == '\n' && text[offset + 1..].starts_with('\n') {
            // blank line ends a paragraph, and with it any open sentence
            Some(offset + 1)
        } else {
            None
        };

        if let Some(end) = boundary_end {
            spans.push(start..end);
            start = end;
        }
    }

    if start < text.len() {
        spans.push(start..text.len());
    }
    spans
}

/// Context around a potential sentence boundary.
struct SentenceContext<'a> {
    punctuation: char,
    word_before: &'a str,
    next_char: Option<char>,
    char_after: Option<char>,
    second_after: Option<char>,
    is_end_of_text: bool,
}

impl<'a> SentenceContext<'a> {
    fn at(text: &'a str, chars: &[(usize, char)], pos: usize) -> Self {
        let (offset, punctuation) = chars[pos];

        // The token right before the terminator, periods included (U.S, e.g)
        let head = &text[..offset];
        let word_start = head
            .rfind(|c: char| c.is_whitespace() || matches!(c, '(' | '"' | '\u{201C}'))
            .map_or(0, |p| p + head[p..].chars().next().map_or(1, char::len_utf8));
        let word_before = &head[word_start..];

        let mut after = chars[pos + 1..]
            .iter()
            .map(|&(_, c)| c)
            .skip_while(|c| c.is_whitespace());

        SentenceContext {
            punctuation,
            word_before,
            next_char: chars.get(pos + 1).map(|&(_, c)| c),
            char_after: after.next(),
            second_after: after.next(),
            is_end_of_text: pos + 1 == chars.len(),
        }
    }

    fn is_boundary(&self, current: &str) -> bool {
        if self.is_end_of_text {
            return true;
        }
        // runs like "?!" and "..." are decided at their last character
        if self.next_char.is_some_and(is_sentence_terminator) {
            return false;
        }

        // ! and ? are boundaries unless a lowercase word carries on
        if self.punctuation != '.' {
            return !self.char_after.is_some_and(char::is_lowercase);
        }

        if is_abbreviation(self.word_before) || is_initial(self.word_before) {
            return false;
        }
        if current.ends_with("...") {
            return !self.char_after.is_some_and(char::is_lowercase);
        }
        if TRAILING_URL_OR_EMAIL.is_match(current.trim_end_matches('.')) {
            return false;
        }
        if TRAILING_DECIMAL.is_match(current) && self.char_after.is_some_and(|c| c.is_ascii_digit())
        {
            return false;
        }

        match self.char_after {
            Some(c) if c.is_uppercase() || c.is_ascii_digit() => true,
            Some(c) if c.is_lowercase() => false,
            // closing quote or bracket: look one further
            Some('"' | '\'' | '\u{201D}' | '\u{2019}' | ')') => {
                !self.second_after.is_some_and(char::is_lowercase)
            }
            _ => true,
        }
    }
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    let single_capital =
        chars.next().is_some_and(char::is_uppercase) && chars.next().is_none();
    single_capital || INITIALS.is_match(word)
}
