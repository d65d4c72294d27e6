//! Abbreviations that end in a period without ending a sentence.
//!
//! Deliberately excludes abbreviations that are also ordinary words ("in",
//! "no", "sat", "sun", "fig") so that "The cat sat." still closes its
//! sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase abbreviations, stored without their trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "hon", "esq", "capt",
        "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen", "gov", "supt",
    ]);

    // Degrees and Latin shorthand
    set.extend([
        "ph.d", "m.d", "b.a", "b.s", "m.a", "m.s", "d.d.s", "e.g", "i.e", "etc", "vs", "cf",
        "viz", "ibid", "al", "n.b", "p.s",
    ]);

    // Calendar and clock
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "jan", "feb", "apr", "jun", "jul", "aug", "sept", "oct",
        "nov", "dec", "tues", "thurs",
    ]);

    // Addresses and organizations
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "dept", "bldg", "u.s", "u.k", "inc", "corp", "ltd",
        "co", "bros", "assn",
    ]);

    // Units and references
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "mph", "approx",
        "vol", "nos", "pp", "ch", "eq",
    ]);

    set
});

/// Check if a word (with or without its periods) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_end_matches('.'))
}
