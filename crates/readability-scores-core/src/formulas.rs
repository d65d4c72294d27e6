//! The seven published readability formulas.
//!
//! Each function takes the counts it reads and returns the raw score. A
//! zero denominator yields NaN rather than a panic or an error.

use crate::aggregate::Counts;

/// The counts the Spache formula reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacheCounts {
    /// Sentences.
    pub sentence: usize,
    /// Words.
    pub word: usize,
    /// Distinct unfamiliar words.
    pub unfamiliar_word: usize,
}

impl From<&Counts> for SpacheCounts {
    fn from(counts: &Counts) -> Self {
        Self {
            sentence: counts.sentence,
            word: counts.word,
            unfamiliar_word: counts.unfamiliar_word,
        }
    }
}

/// The counts the SMOG formula reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmogCounts {
    /// Sentences.
    pub sentence: usize,
    /// Words of three or more syllables, proper nouns included.
    pub polysyllabic_word: usize,
}

impl From<&Counts> for SmogCounts {
    fn from(counts: &Counts) -> Self {
        Self {
            sentence: counts.sentence,
            polysyllabic_word: counts.polysyllabic_word,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
const fn f(n: usize) -> f64 {
    n as f64
}

/// `numerator / denominator`, or NaN when the denominator is zero.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        f64::NAN
    } else {
        f(numerator) / f(denominator)
    }
}

/// Revised Spache formula (1974).
pub fn spache(counts: SpacheCounts) -> f64 {
    let words_per_sentence = ratio(counts.word, counts.sentence);
    let unfamiliar_percent = 100.0 * ratio(counts.unfamiliar_word, counts.word);
    0.121f64.mul_add(words_per_sentence, 0.082 * unfamiliar_percent) + 0.659
}

/// New Dale-Chall raw score.
pub fn dale_chall(counts: &Counts) -> f64 {
    let difficult_percent = 100.0 * ratio(counts.difficult_word, counts.word);
    let words_per_sentence = ratio(counts.word, counts.sentence);
    let score = 0.1579f64.mul_add(difficult_percent, 0.0496 * words_per_sentence);
    if difficult_percent > 5.0 {
        score + 3.6365
    } else {
        score
    }
}

/// Upper bound of the grade range a Dale-Chall raw score maps to.
///
/// Scores of 10 and above map to an open-ended range ("college graduate"),
/// reported as `None`. NaN maps to grade 0.
pub fn dale_chall_grade_upper(score: f64) -> Option<u8> {
    if score.is_nan() {
        return Some(0);
    }
    match score.floor() {
        s if s <= 4.0 => Some(4),
        s if s < 6.0 => Some(6),
        s if s < 7.0 => Some(8),
        s if s < 8.0 => Some(10),
        s if s < 9.0 => Some(12),
        s if s < 10.0 => Some(15),
        _ => None,
    }
}

/// Automated Readability Index.
pub fn automated_readability(counts: &Counts) -> f64 {
    4.71f64.mul_add(
        ratio(counts.letter, counts.word),
        0.5 * ratio(counts.word, counts.sentence),
    ) - 21.43
}

/// Coleman-Liau index.
pub fn coleman_liau(counts: &Counts) -> f64 {
    let letters_per_100 = 100.0 * ratio(counts.letter, counts.word);
    let sentences_per_100 = 100.0 * ratio(counts.sentence, counts.word);
    0.0588f64.mul_add(letters_per_100, -0.296 * sentences_per_100) - 15.8
}

/// Flesch-Kincaid grade level.
pub fn flesch_kincaid(counts: &Counts) -> f64 {
    0.39f64.mul_add(
        ratio(counts.word, counts.sentence),
        11.8 * ratio(counts.syllable, counts.word),
    ) - 15.59
}

/// SMOG grade.
pub fn smog(counts: SmogCounts) -> f64 {
    let per_30 = 30.0 * ratio(counts.polysyllabic_word, counts.sentence);
    1.043f64.mul_add(per_30.sqrt(), 3.1291)
}

/// Gunning Fog index.
pub fn gunning_fog(counts: &Counts) -> f64 {
    let words_per_sentence = ratio(counts.word, counts.sentence);
    let complex_percent = 100.0 * ratio(counts.complex_polysyllabic_word, counts.word);
    0.4 * (words_per_sentence + complex_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Counts {
        Counts {
            letter: 400,
            syllable: 150,
            word: 100,
            sentence: 5,
            polysyllabic_word: 10,
            complex_polysyllabic_word: 8,
            unfamiliar_word: 10,
            difficult_word: 20,
        }
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn spache_score() {
        // 0.121 * 20 + 0.082 * 10 + 0.659
        assert!(close(spache(SpacheCounts::from(&counts())), 3.899));
    }

    #[test]
    fn dale_chall_adds_constant_above_five_percent() {
        // 0.1579 * 20 + 0.0496 * 20 + 3.6365
        assert!(close(dale_chall(&counts()), 7.7865));
        let easy = Counts {
            difficult_word: 5,
            ..counts()
        };
        // 0.1579 * 5 + 0.0496 * 20
        assert!(close(dale_chall(&easy), 1.7815));
    }

    #[test]
    fn dale_chall_grade_buckets() {
        assert_eq!(dale_chall_grade_upper(1.2), Some(4));
        assert_eq!(dale_chall_grade_upper(4.9), Some(4));
        assert_eq!(dale_chall_grade_upper(5.0), Some(6));
        assert_eq!(dale_chall_grade_upper(6.5), Some(8));
        assert_eq!(dale_chall_grade_upper(7.7865), Some(10));
        assert_eq!(dale_chall_grade_upper(8.0), Some(12));
        assert_eq!(dale_chall_grade_upper(9.99), Some(15));
        assert_eq!(dale_chall_grade_upper(10.0), None);
        assert_eq!(dale_chall_grade_upper(f64::NAN), Some(0));
    }

    #[test]
    fn ari_score() {
        // 4.71 * 4 + 0.5 * 20 - 21.43
        assert!(close(automated_readability(&counts()), 7.41));
    }

    #[test]
    fn coleman_liau_score() {
        // 0.0588 * 400 - 0.296 * 5 - 15.8
        assert!(close(coleman_liau(&counts()), 6.24));
    }

    #[test]
    fn flesch_kincaid_score() {
        // 0.39 * 20 + 11.8 * 1.5 - 15.59
        assert!(close(flesch_kincaid(&counts()), 9.91));
    }

    #[test]
    fn smog_uses_all_polysyllables() {
        // 1.043 * sqrt(60) + 3.1291
        let expected = 1.043f64.mul_add(60f64.sqrt(), 3.1291);
        assert!(close(smog(SmogCounts::from(&counts())), expected));
    }

    #[test]
    fn smog_without_polysyllables() {
        let none = SmogCounts {
            sentence: 2,
            polysyllabic_word: 0,
        };
        assert!(close(smog(none), 3.1291));
    }

    #[test]
    fn gunning_fog_uses_complex_words() {
        // 0.4 * (20 + 8)
        assert!(close(gunning_fog(&counts()), 11.2));
    }

    #[test]
    fn zero_counts_are_nan() {
        let empty = Counts::default();
        assert!(automated_readability(&empty).is_nan());
        assert!(coleman_liau(&empty).is_nan());
        assert!(flesch_kincaid(&empty).is_nan());
        assert!(gunning_fog(&empty).is_nan());
        assert!(dale_chall(&empty).is_nan());
        assert!(smog(SmogCounts::from(&empty)).is_nan());
        assert!(spache(SpacheCounts::from(&empty)).is_nan());
    }
}
