//! Syllable counting for English words.
//!
//! A small table of words the vowel-group heuristic gets wrong, followed by
//! the heuristic itself: count vowel groups, then correct for silent endings
//! (-e, -ed, -es), inner silent e before common suffixes, and vowel pairs
//! that are pronounced as two syllables.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Words whose syllable count the heuristic misses.
static EXCEPTIONS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    HashMap::from([
        ("abalone", 4),
        ("anyone", 3),
        ("apostrophe", 4),
        ("area", 3),
        ("business", 2),
        ("cafe", 2),
        ("catastrophe", 4),
        ("colonel", 2),
        ("coyote", 3),
        ("create", 2),
        ("every", 2),
        ("everyone", 3),
        ("evening", 2),
        ("facade", 2),
        ("forever", 3),
        ("hyperbole", 4),
        ("idea", 3),
        ("jewel", 2),
        ("karate", 3),
        ("maybe", 2),
        ("naive", 2),
        ("people", 2),
        ("poem", 2),
        ("poet", 2),
        ("quiet", 2),
        ("recipe", 3),
        ("sesame", 3),
        ("simile", 3),
        ("someone", 2),
        ("something", 2),
        ("sometimes", 2),
        ("somewhere", 2),
        ("wednesday", 2),
        ("whatever", 3),
        ("whenever", 3),
        ("wherever", 3),
        ("vehicle", 3),
    ])
});

const VOWELS: &[u8] = b"aeiouy";

/// Count syllables in a word.
///
/// Apostrophes are dropped and hyphenated words are counted part by part.
/// Any non-empty word counts at least one syllable, so numbers and
/// abbreviations without vowels still contribute.
pub fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .flat_map(char::to_lowercase)
        .collect();

    if cleaned.contains('-') {
        return cleaned
            .split('-')
            .filter(|part| !part.is_empty())
            .map(count_part)
            .sum();
    }

    count_part(&cleaned)
}

fn count_part(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    if word.chars().count() < 3 {
        return 1;
    }
    if let Some(&known) = EXCEPTIONS.get(word) {
        return known;
    }
    // Plurals and possessives of listed words
    if let Some(base) = word.strip_suffix('s')
        && let Some(&known) = EXCEPTIONS.get(base)
    {
        return known;
    }

    estimate_syllables(word).max(1)
}

/// Vowel-group estimate for a lowercase word.
fn estimate_syllables(word: &str) -> usize {
    let bytes = word.as_bytes();
    let is_vowel = |i: usize| -> bool {
        let b = bytes[i];
        // Leading y is a consonant (yes, young)
        if b == b'y' && i == 0 {
            return false;
        }
        VOWELS.contains(&b)
    };

    let mut groups = 0usize;
    let mut previous_was_vowel = false;
    for i in 0..bytes.len() {
        let vowel = is_vowel(i);
        if vowel && !previous_was_vowel {
            groups += 1;
        }
        previous_was_vowel = vowel;
    }
    if groups == 0 {
        return 1;
    }

    let mut count = groups as isize;
    let len = bytes.len();
    let consonant_at = |i: usize| -> bool { bytes[i].is_ascii_alphabetic() && !is_vowel(i) };

    if groups > 1 {
        let consonant_le = word.ends_with("le") && consonant_at(len - 3);
        if word.ends_with('e') && consonant_at(len - 2) && !consonant_le {
            // make, hope, whole; table keeps its -le
            count -= 1;
        } else if word.ends_with("ed")
            && len > 3
            && consonant_at(len - 3)
            && !matches!(bytes[len - 3], b't' | b'd')
        {
            // loved, walked; wanted keeps its syllable
            count -= 1;
        } else if word.ends_with("es")
            && len > 3
            && consonant_at(len - 3)
            && !matches!(bytes[len - 3], b's' | b'x' | b'z' | b'c' | b'g')
            && !word.ends_with("ches")
            && !word.ends_with("shes")
            && !(word.ends_with("les") && len > 4 && consonant_at(len - 4))
        {
            // makes, whales; boxes, pages, tables keep it
            count -= 1;
        }
    }

    count += inner_silent_e_adjustment(word);
    count += split_vowel_pairs(word);

    count.max(1) as usize
}

/// Silent e before -ly, -ment, -ful, -ness, -less (lovely, statement, careful).
fn inner_silent_e_adjustment(word: &str) -> isize {
    const SUFFIXES: &[&str] = &["ly", "ment", "ments", "ful", "ness", "less"];
    let bytes = word.as_bytes();

    for suffix in SUFFIXES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        let n = stem.len();
        if n >= 3
            && bytes[n - 1] == b'e'
            && !VOWELS.contains(&bytes[n - 2])
            && VOWELS.contains(&bytes[n - 3])
            && !stem.ends_with("le")
        {
            return -1;
        }
    }
    0
}

/// Adjacent vowels that belong to separate syllables (media, lion, actual,
/// video, being).
fn split_vowel_pairs(word: &str) -> isize {
    let mut extra = 0;

    for (i, window) in word.as_bytes().windows(2).enumerate() {
        let before = i.checked_sub(1).map(|p| word.as_bytes()[p]);
        let soft = matches!(before, Some(b'c' | b't' | b's' | b'g'));
        match window {
            [b'i', b'a'] | [b'i', b'o'] if !soft => extra += 1,
            [b'u', b'a'] if !matches!(before, Some(b'q' | b'g')) => extra += 1,
            [b'e', b'o'] => extra += 1,
            _ => {}
        }
    }

    // being, going, seeing, saying
    if let Some(stem) = word.strip_suffix("ing")
        && stem.len() > 1
        && stem
            .as_bytes()
            .last()
            .is_some_and(|b| VOWELS.contains(b) && *b != b'u')
    {
        extra += 1;
    }

    extra
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceptions_table() {
        assert_eq!(count_syllables("people"), 2);
        assert_eq!(count_syllables("area"), 3);
        assert_eq!(count_syllables("ideas"), 3);
    }

    #[test]
    fn simple_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("world"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("yes"), 1);
    }

    #[test]
    fn silent_endings() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("makes"), 1);
        assert_eq!(count_syllables("played"), 1);
        assert_eq!(count_syllables("wanted"), 2);
        assert_eq!(count_syllables("boxes"), 2);
        assert_eq!(count_syllables("pages"), 2);
    }

    #[test]
    fn consonant_le() {
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("little"), 2);
        assert_eq!(count_syllables("whole"), 1);
    }

    #[test]
    fn inner_silent_e() {
        assert_eq!(count_syllables("lovely"), 2);
        assert_eq!(count_syllables("statement"), 2);
        assert_eq!(count_syllables("careful"), 2);
        assert_eq!(count_syllables("freely"), 2);
    }

    #[test]
    fn split_vowels() {
        assert_eq!(count_syllables("media"), 3);
        assert_eq!(count_syllables("lion"), 2);
        assert_eq!(count_syllables("nation"), 2);
        assert_eq!(count_syllables("actual"), 3);
        assert_eq!(count_syllables("being"), 2);
        assert_eq!(count_syllables("going"), 2);
    }

    #[test]
    fn long_words() {
        assert_eq!(count_syllables("communication"), 5);
        assert_eq!(count_syllables("organization"), 5);
        assert_eq!(count_syllables("comprehensive"), 4);
    }

    #[test]
    fn hyphens_and_apostrophes() {
        assert_eq!(count_syllables("battle-field"), 3);
        assert_eq!(count_syllables("don't"), 1);
    }

    #[test]
    fn edge_cases() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("1,000"), 1);
        assert_eq!(count_syllables("TV"), 1);
    }
}
