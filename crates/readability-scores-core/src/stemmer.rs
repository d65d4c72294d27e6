//! Porter stemmer.
//!
//! An implementation of M.F. Porter's 1980 suffix-stripping algorithm, used to
//! reduce vocabulary entries and inflected words to a shared root so that
//! "walked", "walking", and "walks" all meet "walk" in the stem indexes.
//!
//! The stemmer works on lowercase ASCII. Words of two letters or fewer, and
//! words containing non-ASCII characters, are returned lowercased but
//! otherwise unchanged.

/// Step 2 suffix rewrites, applied when the remaining stem has measure > 0.
const STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

/// Step 3 suffix rewrites, applied when the remaining stem has measure > 0.
const STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 suffixes, removed when the remaining stem has measure > 1.
const STEP4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ou", "ism",
    "ate", "iti", "ous", "ive", "ize",
];

/// Reduce a word to its Porter stem.
///
/// ```
/// use readability_scores_core::stemmer::stem;
///
/// assert_eq!(stem("caresses"), "caress");
/// assert_eq!(stem("relational"), "relat");
/// assert_eq!(stem("Hopping"), "hop");
/// ```
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.len() <= 2 || !lower.is_ascii() {
        return lower;
    }

    let mut word = Word {
        b: lower.into_bytes(),
    };
    word.step1a();
    word.step1b();
    word.step1c();
    word.step2();
    word.step3();
    word.step4();
    word.step5();

    String::from_utf8(word.b).unwrap_or_default()
}

struct Word {
    b: Vec<u8>,
}

impl Word {
    fn len(&self) -> usize {
        self.b.len()
    }

    /// `y` is a consonant at the start of a word or after a vowel.
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `b[..end]`.
    fn measure(&self, end: usize) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < end && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < end && !self.is_consonant(i) {
                i += 1;
            }
            if i >= end {
                return n;
            }
            while i < end && self.is_consonant(i) {
                i += 1;
            }
            n += 1;
            if i >= end {
                return n;
            }
        }
    }

    fn has_vowel(&self, end: usize) -> bool {
        (0..end).any(|i| !self.is_consonant(i))
    }

    fn ends_double_consonant(&self, end: usize) -> bool {
        end >= 2 && self.b[end - 1] == self.b[end - 2] && self.is_consonant(end - 1)
    }

    /// consonant-vowel-consonant ending `b[..end]`, last consonant not w, x or y.
    fn ends_cvc(&self, end: usize) -> bool {
        end >= 3
            && self.is_consonant(end - 3)
            && !self.is_consonant(end - 2)
            && self.is_consonant(end - 1)
            && !matches!(self.b[end - 1], b'w' | b'x' | b'y')
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.b.ends_with(suffix.as_bytes())
    }

    fn replace_suffix(&mut self, suffix_len: usize, replacement: &str) {
        self.b.truncate(self.len() - suffix_len);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    /// Longest entry of `table` that ends the word.
    fn longest_suffix<'t>(&self, table: &'t [(&'t str, &'t str)]) -> Option<(&'t str, &'t str)> {
        table
            .iter()
            .filter(|(suffix, _)| self.len() > suffix.len() && self.ends_with(suffix))
            .max_by_key(|(suffix, _)| suffix.len())
            .copied()
    }

    fn step1a(&mut self) {
        if self.ends_with("sses") || self.ends_with("ies") {
            self.replace_suffix(2, "");
        } else if !self.ends_with("ss") && self.ends_with("s") {
            self.replace_suffix(1, "");
        }
    }

    fn step1b(&mut self) {
        if self.ends_with("eed") {
            if self.measure(self.len() - 3) > 0 {
                self.replace_suffix(1, "");
            }
            return;
        }

        let removed = if self.ends_with("ed") && self.has_vowel(self.len() - 2) {
            2
        } else if self.ends_with("ing") && self.has_vowel(self.len() - 3) {
            3
        } else {
            return;
        };
        self.replace_suffix(removed, "");

        if self.ends_with("at") || self.ends_with("bl") || self.ends_with("iz") {
            self.b.push(b'e');
        } else if self.ends_double_consonant(self.len())
            && !matches!(self.b[self.len() - 1], b'l' | b's' | b'z')
        {
            self.b.pop();
        } else if self.measure(self.len()) == 1 && self.ends_cvc(self.len()) {
            self.b.push(b'e');
        }
    }

    fn step1c(&mut self) {
        if self.ends_with("y") && self.has_vowel(self.len() - 1) {
            let last = self.len() - 1;
            self.b[last] = b'i';
        }
    }

    fn step2(&mut self) {
        self.rewrite_with(STEP2);
    }

    fn step3(&mut self) {
        self.rewrite_with(STEP3);
    }

    fn rewrite_with(&mut self, table: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = self.longest_suffix(table)
            && self.measure(self.len() - suffix.len()) > 0
        {
            self.replace_suffix(suffix.len(), replacement);
        }
    }

    fn step4(&mut self) {
        let longest = STEP4
            .iter()
            .filter(|suffix| self.len() > suffix.len() && self.ends_with(suffix))
            .max_by_key(|suffix| suffix.len());

        if let Some(suffix) = longest {
            if self.measure(self.len() - suffix.len()) > 1 {
                self.replace_suffix(suffix.len(), "");
            }
            return;
        }

        // -ion only goes when it follows s or t
        if self.ends_with("ion") && self.len() > 3 {
            let stem_end = self.len() - 3;
            if matches!(self.b[stem_end - 1], b's' | b't') && self.measure(stem_end) > 1 {
                self.replace_suffix(3, "");
            }
        }
    }

    fn step5(&mut self) {
        if self.ends_with("e") {
            let stem_end = self.len() - 1;
            let m = self.measure(stem_end);
            if m > 1 || (m == 1 && !self.ends_cvc(stem_end)) {
                self.b.pop();
            }
        }

        if self.measure(self.len()) > 1
            && self.ends_with("l")
            && self.ends_double_consonant(self.len())
        {
            self.b.pop();
        }
    }
}
