//! Word list loading utilities
//!
//! Loads word lists from files or from the embedded constants. Entries that are
//! not valid words of the requested length are skipped, as are repeats.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `length` letters from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    let words = parse_words(lines, length);

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
/// use wordle_helper::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    parse_words(slice.iter().copied(), length)
}

fn parse_words<'s>(entries: impl Iterator<Item = &'s str>, length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;
    let mut words = Vec::new();

    for entry in entries {
        match Word::with_length(entry, length) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                }
            }
            Err(e) => {
                log::trace!("skipping word list entry: {e}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }
    words
}

/// Embedded answer pool
#[must_use]
pub fn default_answers() -> Vec<Word> {
    words_from_slice(super::ANSWERS, 5)
}

/// Embedded guess pool
#[must_use]
pub fn default_guesses() -> Vec<Word> {
    words_from_slice(super::GUESSES, 5)
}
