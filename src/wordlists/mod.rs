//! Word lists for Wordle solving
//!
//! Embedded sample lists compiled into the binary, and loading of external lists.
//! The engine itself only ever sees already-loaded `Word` slices.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn guesses_cover_answers() {
        assert!(GUESSES_COUNT >= ANSWERS_COUNT);
        for &word in ANSWERS {
            assert!(GUESSES.contains(&word), "answer '{word}' is not a valid guess");
        }
    }

    #[test]
    fn opening_words_are_guessable() {
        for word in crate::solver::OPENING_BOOK {
            let lower = word.to_ascii_lowercase();
            assert!(GUESSES.contains(&lower.as_str()), "{word}");
        }
    }
}
