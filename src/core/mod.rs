//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: validated words, feedback
//! patterns with the pattern simulator, and guess records.
//! All types here are pure, testable, and immutable once built.

mod pattern;
mod record;
mod word;

pub use pattern::{LetterState, Pattern, PatternError};
pub use record::GuessRecord;
pub use word::{ALPHABET_SIZE, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, Word, WordError};
