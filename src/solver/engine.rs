//! Main Wordle solver interface
//!
//! [`Solver`] is a long-lived, caller-owned handle over borrowed word pools. It
//! holds no mutable state, so one handle can serve any number of sessions (and
//! threads) at once. Each call recomputes the candidates from the answer pool
//! and the history it is given.

use super::config::{ConfigError, Fallback, ScoringStrategy, SolverConfig};
use super::filter::filter_candidates;
use super::lookahead;
use super::phase::Phase;
use super::scoring::{self, CandidateSet, ScanLimits, ScoredGuess, Scorer};
use crate::core::{GuessRecord, PatternError, Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::Instant;
use thiserror::Error;

/// Opening guesses tried in order when the history is empty
pub const OPENING_BOOK: [&str; 5] = ["TARES", "SLATE", "CRANE", "CRATE", "SLANT"];

/// Error type for malformed engine input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("guess pool is empty")]
    EmptyGuessPool,
    #[error("answer pool is empty")]
    EmptyAnswerPool,
    #[error("{what} '{text}' has length {actual}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        text: String,
        expected: usize,
        actual: usize,
    },
}

/// A suggested guess with how it was chosen
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub word: Word,
    /// Score under the strategy that chose the word, `None` when nothing was scored
    pub score: Option<f64>,
    pub candidates_remaining: usize,
    pub phase: Phase,
    /// False when a time budget or early exit cut the scan short
    pub complete: bool,
}

/// Outcome of one selection
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// Play this word next
    Guess(Recommendation),
    /// The last recorded guess was all correct
    Solved(Word),
    /// No word in the answer pool matches the history
    Impossible,
    /// The turn budget is spent without a solve
    Exhausted,
}

impl Suggestion {
    /// The suggested word, if there is one to play
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Guess(rec) => Some(&rec.word),
            Self::Solved(_) | Self::Impossible | Self::Exhausted => None,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess(rec) => write!(f, "{}", rec.word),
            Self::Solved(word) => write!(f, "solved: {word}"),
            Self::Impossible => f.write_str("no candidates match the feedback"),
            Self::Exhausted => f.write_str("out of guesses"),
        }
    }
}

/// Main Wordle solver
///
/// # Examples
/// ```
/// use wordle_helper::core::{GuessRecord, Word};
/// use wordle_helper::solver::{Solver, SolverConfig, Suggestion};
///
/// let pool: Vec<Word> = ["crane", "slate", "trace", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let solver = Solver::new(&pool, &pool, SolverConfig::default()).unwrap();
///
/// let history = [GuessRecord::observed(Word::new("crane").unwrap(), &Word::new("trace").unwrap())];
/// let suggestion = solver.next_guess(&history).unwrap();
/// assert_eq!(suggestion.word().map(Word::text), Some("TRACE"));
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    answers: &'a [Word],
    guesses: &'a [Word],
    config: SolverConfig,
    opening: Option<&'a Word>,
    guess_index: FxHashSet<&'a str>,
}

impl<'a> Solver<'a> {
    /// Create a solver over an answer pool and a guess pool
    ///
    /// # Errors
    /// Returns an error if either pool is empty or holds a word whose length
    /// differs from the configured word length.
    pub fn new(
        answers: &'a [Word],
        guesses: &'a [Word],
        config: SolverConfig,
    ) -> Result<Self, EngineError> {
        if answers.is_empty() {
            return Err(EngineError::EmptyAnswerPool);
        }
        if guesses.is_empty() {
            return Err(EngineError::EmptyGuessPool);
        }
        check_lengths("answer", answers, config.word_length())?;
        check_lengths("guess", guesses, config.word_length())?;

        let guess_index: FxHashSet<&str> = guesses.iter().map(Word::text).collect();
        let opening = OPENING_BOOK
            .iter()
            .find_map(|&text| guesses.iter().find(|w| w.text() == text));

        log::debug!(
            "solver ready: {} answers, {} guesses, opening {}",
            answers.len(),
            guesses.len(),
            opening.map_or("none", Word::text)
        );

        Ok(Self {
            answers,
            guesses,
            config,
            opening,
            guess_index,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Swap the configuration, keeping the pools
    ///
    /// # Errors
    /// Returns an error if the pools do not match the new word length.
    pub fn set_config(&mut self, config: SolverConfig) -> Result<(), EngineError> {
        if config.word_length() != self.config.word_length() {
            check_lengths("answer", self.answers, config.word_length())?;
            check_lengths("guess", self.guesses, config.word_length())?;
        }
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub const fn answers(&self) -> &'a [Word] {
        self.answers
    }

    #[must_use]
    pub const fn guesses(&self) -> &'a [Word] {
        self.guesses
    }

    /// The first guess when the history is empty, if the opening book applies
    #[must_use]
    pub fn opening_guess(&self) -> Option<&'a Word> {
        self.opening.filter(|_| self.config.use_opening_book())
    }

    /// Whether `word` is in the guess pool
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guess_index.contains(word.text())
    }

    /// Answers consistent with the history
    ///
    /// # Errors
    /// Returns an error if a record has the wrong word length.
    pub fn candidates(&self, history: &[GuessRecord]) -> Result<Vec<&'a Word>, EngineError> {
        check_history(history, self.config.word_length())?;
        Ok(filter_candidates(self.answers, history))
    }

    /// Pick the next guess for `history`
    ///
    /// # Errors
    /// Returns an error only for malformed history (wrong word length).
    /// Contradictory feedback and a spent turn budget are reported as
    /// [`Suggestion::Impossible`] and [`Suggestion::Exhausted`].
    pub fn next_guess(&self, history: &[GuessRecord]) -> Result<Suggestion, EngineError> {
        let start = Instant::now();
        let candidates = self.candidates(history)?;

        if candidates.is_empty() {
            log::warn!("no candidates match {} recorded guesses", history.len());
            return Ok(Suggestion::Impossible);
        }
        if let Some(last) = history.last()
            && last.pattern().is_perfect()
        {
            return Ok(Suggestion::Solved(last.guess().clone()));
        }
        if history.len() >= self.config.max_guesses() {
            return Ok(Suggestion::Exhausted);
        }

        let opening = self.opening_guess();
        let phase = Phase::classify(
            &self.config,
            candidates.len(),
            history.len(),
            opening.is_some(),
        );

        let (word, score, complete) = match (phase, opening) {
            (Phase::Opening, Some(word)) => (word, None, true),
            (Phase::SingleCandidate, _) => (candidates[0], None, true),
            _ => {
                let (best, complete) = self.rank(phase, &candidates, start);
                match best {
                    Some(best) => (best.word, Some(best.score), complete),
                    None => (candidates[0], None, complete),
                }
            }
        };

        log::debug!(
            "turn {}: {} candidates, {phase} phase, chose {word} in {:.1?}",
            history.len() + 1,
            candidates.len(),
            start.elapsed()
        );

        Ok(Suggestion::Guess(Recommendation {
            word: word.clone(),
            score,
            candidates_remaining: candidates.len(),
            phase,
            complete,
        }))
    }

    /// Number of answers consistent with the history
    ///
    /// # Errors
    /// Returns an error if a record has the wrong word length.
    pub fn count_candidates(&self, history: &[GuessRecord]) -> Result<usize, EngineError> {
        self.candidates(history).map(|c| c.len())
    }

    fn rank(
        &self,
        phase: Phase,
        candidates: &[&'a Word],
        start: Instant,
    ) -> (Option<ScoredGuess<'a>>, bool) {
        let config = &self.config;
        let limits = ScanLimits {
            deadline: config.time_budget().map(|budget| start + budget),
            early_exit: config.early_exit_entropy(),
            parallel: config.parallel(),
        };
        let set = CandidateSet::new(candidates);
        let epsilon = config.candidate_epsilon();

        if phase.candidates_only() {
            return self.rank_candidates(candidates, &set, &limits);
        }

        let guess_refs: Vec<&'a Word> = self.guesses.iter().collect();

        let (pool, strategy, prefilter_complete) = match (phase, config.fallback()) {
            (Phase::Degraded, Fallback::Statistical) => {
                (guess_refs, ScoringStrategy::Statistical, true)
            }
            (Phase::Degraded, Fallback::Prefilter) => {
                let (shortlist, complete) = self.prefilter(&guess_refs, candidates, &set, &limits);
                (shortlist, ScoringStrategy::Entropy, complete)
            }
            _ => (guess_refs, config.strategy(), true),
        };

        let scorer = Scorer::new(strategy, candidates);
        let mut scan = scoring::scan(&pool, &scorer, &set, &limits);
        scan.complete &= prefilter_complete;

        if config.lookahead_depth() > 0
            && strategy == ScoringStrategy::Entropy
            && phase == Phase::Full
            && scan.complete
        {
            let shortlist = scoring::top_n(scan.scored, config.lookahead_width());
            let refined = lookahead::refine(&shortlist, candidates);
            return (scoring::pick_best(&refined, epsilon), true);
        }

        if log::log_enabled!(log::Level::Trace) {
            for entry in scoring::top_n(scan.scored.clone(), 5) {
                log::trace!(
                    "{} {:.4}{}",
                    entry.word,
                    entry.score,
                    if entry.is_candidate { " *" } else { "" }
                );
            }
        }

        (scoring::pick_best(&scan.scored, epsilon), scan.complete)
    }

    /// Rank the candidates themselves, degrading above `candidate_pool_cap`
    ///
    /// Every candidate is equally likely to win outright, so an oversize pool
    /// only needs a cheap order, not a full candidates × candidates entropy pass.
    fn rank_candidates(
        &self,
        candidates: &[&'a Word],
        set: &CandidateSet<'_>,
        limits: &ScanLimits,
    ) -> (Option<ScoredGuess<'a>>, bool) {
        let config = &self.config;

        if candidates.len() <= config.candidate_pool_cap() {
            let scorer = Scorer::new(config.strategy(), candidates);
            let scan = scoring::scan(candidates, &scorer, set, limits);
            return (scoring::pick_best(&scan.scored, 0.0), scan.complete);
        }

        log::debug!(
            "{} candidates over cap {}, {:?} fallback",
            candidates.len(),
            config.candidate_pool_cap(),
            config.fallback()
        );

        match config.fallback() {
            Fallback::Statistical => {
                let scorer = Scorer::new(ScoringStrategy::Statistical, candidates);
                let scan = scoring::scan(candidates, &scorer, set, limits);
                (scoring::pick_best(&scan.scored, 0.0), scan.complete)
            }
            Fallback::Prefilter => {
                let (shortlist, prefilter_complete) =
                    self.prefilter(candidates, candidates, set, limits);
                let scorer = Scorer::new(ScoringStrategy::Entropy, candidates);
                let scan = scoring::scan(&shortlist, &scorer, set, limits);
                (
                    scoring::pick_best(&scan.scored, 0.0),
                    prefilter_complete && scan.complete,
                )
            }
        }
    }

    /// Statistical pass over `pool`, keeping the top `max_candidates_scored`
    fn prefilter(
        &self,
        pool: &[&'a Word],
        candidates: &[&'a Word],
        set: &CandidateSet<'_>,
        limits: &ScanLimits,
    ) -> (Vec<&'a Word>, bool) {
        let scorer = Scorer::new(ScoringStrategy::Statistical, candidates);
        let scan = scoring::scan(pool, &scorer, set, limits);
        let shortlist: Vec<&'a Word> =
            scoring::top_n(scan.scored, self.config.max_candidates_scored())
                .into_iter()
                .map(|s| s.word)
                .collect();
        log::debug!("prefiltered {} words down to {}", pool.len(), shortlist.len());
        (shortlist, scan.complete)
    }
}

/// Select the next guess without building a [`Solver`] handle
///
/// Returns `Ok(None)` when no suggestion exists (contradictory history, solved
/// or out of turns); use [`Solver::next_guess`] to tell those apart.
///
/// # Errors
/// Returns an error for empty pools or length mismatches.
pub fn select_next_guess(
    answer_pool: &[Word],
    guess_pool: &[Word],
    history: &[GuessRecord],
    config: &SolverConfig,
) -> Result<Option<Word>, EngineError> {
    let solver = Solver::new(answer_pool, guess_pool, config.clone())?;
    Ok(solver.next_guess(history)?.word().cloned())
}

fn check_lengths(what: &'static str, words: &[Word], expected: usize) -> Result<(), EngineError> {
    match words.iter().find(|w| w.length() != expected) {
        Some(word) => Err(EngineError::LengthMismatch {
            what,
            text: word.text().to_string(),
            expected,
            actual: word.length(),
        }),
        None => Ok(()),
    }
}

fn check_history(history: &[GuessRecord], expected: usize) -> Result<(), EngineError> {
    match history.iter().find(|r| r.guess().length() != expected) {
        Some(record) => Err(EngineError::LengthMismatch {
            what: "guess",
            text: record.guess().text().to_string(),
            expected,
            actual: record.guess().length(),
        }),
        None => Ok(()),
    }
}
