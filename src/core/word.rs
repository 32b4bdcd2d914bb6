//! Wordle word representation
//!
//! A Word stores a validated uppercase word along with its per-letter counts for
//! pattern calculation. The puzzle length is a parameter; five is the canonical value.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical Wordle puzzle length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Longest word the pattern encoding can represent (3^16 fits in a `u32`)
pub const MAX_WORD_LENGTH: usize = 16;

/// Number of letters in the supported alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// A validated puzzle word
///
/// Immutable once constructed. Ordering is lexicographic on the text, which the
/// ranking code relies on for deterministic tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word '{text}' must be exactly {expected} letters, got {actual}")]
    InvalidLength {
        text: String,
        expected: usize,
        actual: usize,
    },
    #[error("word '{text}' is longer than the supported maximum of {} letters", MAX_WORD_LENGTH)]
    TooLong { text: String },
    #[error("word '{text}' contains invalid character {ch:?} (only A-Z allowed)")]
    InvalidCharacter { text: String, ch: char },
}

impl Word {
    /// Create a new Word of the canonical length (5)
    ///
    /// Input is trimmed and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the word is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` if the length differs or a character is outside A-Z.
    pub fn with_length(text: &str, length: usize) -> Result<Self, WordError> {
        let word = Self::parse(text)?;
        if word.length() != length {
            return Err(WordError::InvalidLength {
                actual: word.length(),
                text: word.text,
                expected: length,
            });
        }
        Ok(word)
    }

    /// Create a new Word of any supported length (1 to `MAX_WORD_LENGTH`)
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, too long, or has invalid characters.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(ch) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter {
                text: trimmed.to_string(),
                ch,
            });
        }

        let text = trimmed.to_ascii_uppercase();
        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong { text });
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for &byte in text.as_bytes() {
            counts[letter_index(byte)] += 1;
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.counts[letter_index(letter)] > 0
    }

    /// Occurrences of each letter, indexed 0 (A) to 25 (Z)
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

/// Map an uppercase ASCII letter to its alphabet slot
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
