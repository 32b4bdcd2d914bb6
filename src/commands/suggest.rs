//! Next-guess suggestion command

use super::CommandError;
use crate::core::{GuessRecord, Word};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{Solver, Suggestion};
use std::time::{Duration, Instant};

/// Candidates listed alongside a suggestion
const CANDIDATE_PREVIEW: usize = 10;

/// Result of asking for the next guess
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub suggestion: Suggestion,
    /// Metrics of the suggested word against the candidates, when one was suggested
    pub metrics: Option<GuessMetrics>,
    pub candidates: Vec<Word>,
    pub total_candidates: usize,
    pub elapsed: Duration,
}

/// Suggest the next guess for `history`
///
/// # Errors
///
/// Returns an error if the history does not match the solver's word length.
pub fn suggest_next(
    solver: &Solver<'_>,
    history: &[GuessRecord],
) -> Result<SuggestResult, CommandError> {
    let start = Instant::now();
    let suggestion = solver.next_guess(history)?;
    let elapsed = start.elapsed();

    let candidates = solver.candidates(history)?;
    let metrics = suggestion
        .word()
        .map(|word| calculate_metrics(word, &candidates));

    Ok(SuggestResult {
        suggestion,
        metrics,
        total_candidates: candidates.len(),
        candidates: candidates
            .into_iter()
            .take(CANDIDATE_PREVIEW)
            .cloned()
            .collect(),
        elapsed,
    })
}
