//! Caller-owned game state
//!
//! The solver keeps nothing between calls; a `Session` is the history a host
//! accumulates while a game is played, plus the state it is in.

use super::engine::{EngineError, Solver, Suggestion};
use crate::core::{GuessRecord, Pattern, Word};
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No guesses yet
    Fresh,
    /// Guesses made, answer not found, turns left
    InProgress,
    /// Last guess was all correct
    Solved,
    /// Turn budget spent without a solve
    Exhausted,
    /// The feedback contradicts every answer
    Impossible,
}

impl SessionState {
    /// Whether the game can continue
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Fresh | Self::InProgress)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fresh => "fresh",
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::Impossible => "impossible",
        };
        f.write_str(name)
    }
}

/// Guess history of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    history: Vec<GuessRecord>,
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Resume from an existing history
    #[must_use]
    pub const fn from_history(history: Vec<GuessRecord>) -> Self {
        Self { history }
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Append a guess with the feedback it received
    ///
    /// # Errors
    /// Returns an error if the pattern length differs from the guess length.
    pub fn record(&mut self, guess: Word, pattern: Pattern) -> Result<(), EngineError> {
        self.history.push(GuessRecord::new(guess, pattern)?);
        Ok(())
    }

    /// Append a guess scored against a known target
    pub fn play(&mut self, guess: Word, target: &Word) -> Pattern {
        let record = GuessRecord::observed(guess, target);
        let pattern = record.pattern();
        self.history.push(record);
        pattern
    }

    /// Drop the most recent guess, e.g. after a feedback entry mistake
    pub fn undo(&mut self) -> Option<GuessRecord> {
        self.history.pop()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Current state against `solver`'s answer pool and turn budget
    ///
    /// # Errors
    /// Returns an error if the history does not match the solver's word length.
    pub fn state(&self, solver: &Solver<'_>) -> Result<SessionState, EngineError> {
        if self.history.is_empty() {
            return Ok(SessionState::Fresh);
        }
        Ok(match solver.next_guess(&self.history)? {
            Suggestion::Guess(_) => SessionState::InProgress,
            Suggestion::Solved(_) => SessionState::Solved,
            Suggestion::Impossible => SessionState::Impossible,
            Suggestion::Exhausted => SessionState::Exhausted,
        })
    }

    /// Next suggestion for this session
    ///
    /// # Errors
    /// Returns an error if the history does not match the solver's word length.
    pub fn suggest(&self, solver: &Solver<'_>) -> Result<Suggestion, EngineError> {
        solver.next_guess(&self.history)
    }
}
