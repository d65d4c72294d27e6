//! Dictionaries for readability scoring.
//!
//! The two familiar-word vocabularies, the syllable counter, and the
//! abbreviation set used when splitting sentences.

pub mod abbreviations;
pub mod dale_chall;
pub mod spache;
pub mod syllables;
