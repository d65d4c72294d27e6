//! Core library for readability-scores.
//!
//! Computes the Spache, Dale-Chall, Automated Readability Index,
//! Coleman-Liau, Flesch-Kincaid, SMOG, and Gunning Fog readability metrics
//! for English text, along with the counts those formulas are built on.
//!
//! # Modules
//!
//! - [`readability`] - Scoring entry point
//! - [`options`] - Metric selection and option resolution
//! - [`text`] - Sentence and word tokenization
//! - [`classify`] - Per-word syllable and familiarity rules
//! - [`aggregate`] - Count accumulation
//! - [`formulas`] - The seven formulas
//! - [`scores`] - Rounding, capping, and the result record
//! - [`word_lists`] - Familiar-word vocabularies and stem indexes
//! - [`stemmer`] - Porter stemmer
//! - [`markdown`] - Markdown stripping
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readability_scores_core::{ScoreOptions, readability_scores};
//!
//! let options = ScoreOptions {
//!     difficult_words: true,
//!     ..ScoreOptions::default()
//! };
//! let scores = readability_scores(Some("The quick brown fox jumps over the lazy dog."), Some(&options))
//!     .expect("text is not empty");
//!
//! println!("Flesch-Kincaid grade: {:?}", scores.flesch_kincaid);
//! println!("Dale-Chall difficult words: {:?}", scores.dale_chall_difficult_words);
//! ```
#![deny(unsafe_code)]

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod formulas;
pub mod markdown;
pub mod options;
pub mod readability;
pub mod scores;
pub mod stemmer;
pub mod text;
pub mod word_lists;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use options::{Metric, ResolvedConfig, ScoreOptions, Selection};
pub use readability::{readability_scores, readability_scores_with};
pub use scores::ReadabilityScores;
pub use word_lists::{Vocabulary, WordLists};
