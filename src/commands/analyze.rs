//! Word analysis command
//!
//! Analyzes the information content of a guess against the current candidates.

use super::CommandError;
use crate::core::{GuessRecord, Word};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{ScoringStrategy, Solver, score};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// Letter-frequency score against the same candidates
    pub statistical: f64,
    /// Effective number of equally likely outcomes, 2^entropy
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub is_candidate: bool,
}

/// Analyze `word` against the answers consistent with `history`
///
/// # Errors
///
/// Returns an error if the word is invalid or not in the guess list.
pub fn analyze_word(
    word: &str,
    solver: &Solver<'_>,
    history: &[GuessRecord],
) -> Result<AnalysisResult, CommandError> {
    let word = Word::with_length(word, solver.config().word_length())?;
    if !solver.is_valid_guess(&word) {
        return Err(CommandError::UnknownWord(word.text().to_string()));
    }

    let candidates = solver.candidates(history)?;
    let metrics = calculate_metrics(&word, &candidates);

    Ok(AnalysisResult {
        statistical: score(&word, &candidates, ScoringStrategy::Statistical),
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&&word),
        metrics,
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    fn pool() -> Vec<Word> {
        words_from_slice(&ANSWERS[..100], 5)
    }

    #[test]
    fn analyze_valid_word() {
        let words = pool();
        let solver = Solver::new(&words, &words, SolverConfig::default()).unwrap();

        let result = analyze_word(ANSWERS[0], &solver, &[]).unwrap();

        assert_eq!(result.word.text(), ANSWERS[0].to_ascii_uppercase());
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 100);
        assert!(result.is_candidate);
    }

    #[test]
    fn analyze_unknown_word() {
        let words = pool();
        let solver = Solver::new(&words, &words, SolverConfig::default()).unwrap();

        assert!(matches!(
            analyze_word("zzzzz", &solver, &[]),
            Err(CommandError::UnknownWord(_))
        ));
    }

    #[test]
    fn metrics_properties() {
        let words = pool();
        let solver = Solver::new(&words, &words, SolverConfig::default()).unwrap();

        let result = analyze_word(ANSWERS[3], &solver, &[]).unwrap();
        let metrics = result.metrics;

        assert!(metrics.entropy >= 0.0);
        assert!(metrics.entropy <= (words.len() as f64).log2());
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= words.len() as f64);
        assert!(metrics.max_partition <= words.len());
    }

    #[test]
    fn analyze_after_history_narrows_candidates() {
        let words = pool();
        let solver = Solver::new(&words, &words, SolverConfig::default()).unwrap();
        let target = &words[42];
        let history = [GuessRecord::observed(words[0].clone(), target)];

        let result = analyze_word(target.text(), &solver, &history).unwrap();
        assert!(result.total_candidates < 100);
        assert!(result.is_candidate);
    }
}
