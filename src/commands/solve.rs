//! Word solving command
//!
//! Plays a full game against a known target and returns the solution path.

use super::CommandError;
use crate::core::{Pattern, Word};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Phase, Session, SessionState, Solver, Suggestion};

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub target: Word,
    pub guesses: Vec<GuessStep>,
    pub outcome: SessionState,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == SessionState::Solved
    }
}

/// A single guess step in the solution
#[derive(Debug)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub phase: Phase,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess against the candidates it was played into
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Solve `target` with `solver`, within its configured turn budget
///
/// # Errors
///
/// Returns an error if the target is not a valid word in the answer list.
pub fn solve_word(target: &str, solver: &Solver<'_>) -> Result<SolveResult, CommandError> {
    let target = Word::with_length(target, solver.config().word_length())?;
    if !solver.answers().contains(&target) {
        return Err(CommandError::UnknownTarget(target.text().to_string()));
    }

    let mut session = Session::new();
    let mut guesses = Vec::new();

    while let Suggestion::Guess(rec) = session.suggest(solver)? {
        let candidates = solver.candidates(session.history())?;
        let metrics = calculate_metrics(&rec.word, &candidates);

        let pattern = session.play(rec.word.clone(), &target);
        let candidates_after = solver.count_candidates(session.history())?;

        guesses.push(GuessStep {
            word: rec.word,
            pattern,
            phase: rec.phase,
            candidates_before: candidates.len(),
            candidates_after,
            entropy: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
        });
    }

    let outcome = session.state(solver)?;
    log::debug!("{target}: {outcome} after {} guesses", guesses.len());

    Ok(SolveResult {
        target,
        guesses,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{ANSWERS, GUESSES};

    fn pools() -> (Vec<Word>, Vec<Word>) {
        (
            words_from_slice(&ANSWERS[..60], 5),
            words_from_slice(&GUESSES[..120], 5),
        )
    }

    #[test]
    fn solve_word_succeeds() {
        let (answers, guesses) = pools();
        let solver = Solver::new(&answers, &guesses, SolverConfig::default()).unwrap();

        let target = ANSWERS[0];
        let result = solve_word(target, &solver).unwrap();

        assert!(result.success());
        assert_eq!(result.guesses.last().unwrap().word.text(), target.to_ascii_uppercase());
        assert!(result.guesses.len() <= 6);
    }

    #[test]
    fn solve_records_history() {
        let (answers, guesses) = pools();
        let solver = Solver::new(&answers, &guesses, SolverConfig::default()).unwrap();

        let result = solve_word(ANSWERS[7], &solver).unwrap();
        assert!(!result.guesses.is_empty());

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
            assert!(step.entropy >= 0.0);
        }
    }

    #[test]
    fn solve_every_sample_answer() {
        let (answers, guesses) = pools();
        let solver = Solver::new(&answers, &guesses, SolverConfig::default()).unwrap();

        for target in &answers {
            let result = solve_word(target.text(), &solver).unwrap();
            assert!(result.success(), "failed on {target}");
        }
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let (answers, guesses) = pools();
        let solver = Solver::new(&answers, &guesses, SolverConfig::default()).unwrap();

        assert!(matches!(
            solve_word("zzzzz", &solver),
            Err(CommandError::UnknownTarget(_))
        ));
        assert!(matches!(
            solve_word("zz", &solver),
            Err(CommandError::Word(_))
        ));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let (answers, guesses) = pools();
        let config = SolverConfig::builder().max_guesses(2).build().unwrap();
        let solver = Solver::new(&answers, &guesses, config).unwrap();

        let result = solve_word(ANSWERS[30], &solver).unwrap();
        assert!(result.guesses.len() <= 2);
        assert!(matches!(
            result.outcome,
            SessionState::Solved | SessionState::Exhausted
        ));
    }
}
