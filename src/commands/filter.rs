//! Candidate listing command

use super::CommandError;
use crate::core::{GuessRecord, Word};
use crate::solver::Solver;

/// Answers still possible after a history
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub candidates: Vec<Word>,
    /// Size of the unfiltered answer pool
    pub pool_size: usize,
}

impl FilterResult {
    /// Bits of information the history has revealed so far
    #[must_use]
    pub fn information_gained(&self) -> f64 {
        if self.candidates.is_empty() {
            return 0.0;
        }
        (self.pool_size as f64 / self.candidates.len() as f64).log2()
    }
}

/// List the answers consistent with `history`, in answer-list order
///
/// # Errors
///
/// Returns an error if the history does not match the solver's word length.
pub fn filter_command(
    solver: &Solver<'_>,
    history: &[GuessRecord],
) -> Result<FilterResult, CommandError> {
    let candidates = solver
        .candidates(history)?
        .into_iter()
        .cloned()
        .collect();

    Ok(FilterResult {
        candidates,
        pool_size: solver.answers().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    #[test]
    fn lists_remaining_answers() {
        let pool: Vec<Word> = ["crane", "slate", "trace", "grate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let solver = Solver::new(&pool, &pool, SolverConfig::default()).unwrap();
        let history = [GuessRecord::observed(
            Word::new("crane").unwrap(),
            &Word::new("trace").unwrap(),
        )];

        let result = filter_command(&solver, &history).unwrap();
        assert_eq!(result.candidates, [Word::new("trace").unwrap()]);
        assert!((result.information_gained() - 2.0).abs() < 1e-12);

        let everything = filter_command(&solver, &[]).unwrap();
        assert_eq!(everything.candidates.len(), 4);
        assert!(everything.information_gained().abs() < f64::EPSILON);
    }
}
