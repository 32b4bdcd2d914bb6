//! Guess history entries

use super::{Pattern, PatternError, Word};

/// One entry of a solving session's history: a guessed word and the feedback it got
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: Word,
    pattern: Pattern,
}

impl GuessRecord {
    /// Pair a guess with its feedback
    ///
    /// # Errors
    /// Returns `PatternError::InvalidLength` if the feedback length differs from the guess.
    pub fn new(guess: Word, pattern: Pattern) -> Result<Self, PatternError> {
        if guess.length() != pattern.length() {
            return Err(PatternError::InvalidLength {
                code: pattern.to_string(),
                expected: guess.length(),
                actual: pattern.length(),
            });
        }
        Ok(Self { guess, pattern })
    }

    /// Record the feedback `guess` would receive if `target` were the answer
    #[must_use]
    pub fn observed(guess: Word, target: &Word) -> Self {
        let pattern = Pattern::calculate(&guess, target);
        Self { guess, pattern }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback received
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Check whether `candidate` would have produced this exact feedback
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        candidate.length() == self.guess.length()
            && Pattern::calculate(&self.guess, candidate) == self.pattern
    }
}
