//! Command implementations
//!
//! Each command computes a plain result struct; printing lives in `output`.

pub mod analyze;
pub mod filter;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use filter::{FilterResult, filter_command};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use suggest::{SuggestResult, suggest_next};

use crate::core::{GuessRecord, Pattern, PatternError, Word, WordError};
use crate::solver::EngineError;
use thiserror::Error;

/// Error type for command input
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("'{0}' is not in the answer list")]
    UnknownTarget(String),
    #[error("'{0}' is not in the guess list")]
    UnknownWord(String),
    #[error("expected GUESS=CODE, got '{0}'")]
    MalformedRecord(String),
}

/// Parse `GUESS=CODE` arguments into a history
///
/// # Errors
/// Returns an error for a missing `=`, an invalid word or an invalid code.
///
/// # Examples
/// ```
/// use wordle_helper::commands::parse_history;
///
/// let history = parse_history(&["crane=YGGXG"], 5).unwrap();
/// assert_eq!(history[0].guess().text(), "CRANE");
/// ```
pub fn parse_history<S: AsRef<str>>(
    args: &[S],
    length: usize,
) -> Result<Vec<GuessRecord>, CommandError> {
    args.iter()
        .map(|arg| -> Result<GuessRecord, CommandError> {
            let arg = arg.as_ref();
            let (guess, code) = arg
                .split_once('=')
                .ok_or_else(|| CommandError::MalformedRecord(arg.to_string()))?;
            let guess = Word::with_length(guess, length)?;
            let pattern = Pattern::parse(code, length)?;
            Ok(GuessRecord::new(guess, pattern)?)
        })
        .collect()
}
