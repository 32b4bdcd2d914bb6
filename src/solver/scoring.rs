//! Guess scoring and ranking
//!
//! Scores every guess of a pool against the remaining candidates with either
//! strategy, then picks a winner deterministically:
//! 1. highest score
//! 2. a candidate word within `epsilon` of the top score beats a pure probe
//! 3. lexicographic word order
//!
//! Scanning runs in chunks. Each chunk is scored independently (on the rayon pool
//! when enabled) into its own result slots, and the deadline and early-exit checks
//! happen between chunks, so a best-so-far answer always exists.

use super::config::ScoringStrategy;
use super::entropy::calculate_entropy;
use super::statistical::LetterStats;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::time::Instant;

/// Guesses scored between two deadline checks
const SCAN_CHUNK: usize = 256;

/// A guess with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub score: f64,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
}

/// Score one guess against the candidates with the given strategy
///
/// Higher is better. Entropy scores are in bits.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::{ScoringStrategy, score};
///
/// let pool: Vec<Word> = ["slate", "crate", "zzzzz"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let refs: Vec<&Word> = pool.iter().collect();
///
/// let bits = score(&Word::new("crane").unwrap(), &refs, ScoringStrategy::Entropy);
/// assert!(bits > 1.5);
/// ```
#[must_use]
pub fn score(guess: &Word, candidates: &[&Word], strategy: ScoringStrategy) -> f64 {
    Scorer::new(strategy, candidates).score(guess)
}

/// Strategy-specific scoring state built once per candidate set
pub enum Scorer<'c> {
    Entropy { candidates: &'c [&'c Word] },
    Statistical(LetterStats),
}

impl<'c> Scorer<'c> {
    #[must_use]
    pub fn new(strategy: ScoringStrategy, candidates: &'c [&'c Word]) -> Self {
        match strategy {
            ScoringStrategy::Entropy => Self::Entropy { candidates },
            ScoringStrategy::Statistical => Self::Statistical(LetterStats::new(candidates)),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> ScoringStrategy {
        match self {
            Self::Entropy { .. } => ScoringStrategy::Entropy,
            Self::Statistical(_) => ScoringStrategy::Statistical,
        }
    }

    #[must_use]
    pub fn score(&self, guess: &Word) -> f64 {
        match self {
            Self::Entropy { candidates } => calculate_entropy(guess, candidates),
            Self::Statistical(stats) => stats.score(guess),
        }
    }
}

/// Stopping rules for a scan
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanLimits {
    /// Stop scoring once this instant has passed
    pub deadline: Option<Instant>,
    /// Stop scoring once any guess reaches this score
    pub early_exit: Option<f64>,
    /// Score each chunk on the rayon pool
    pub parallel: bool,
}

/// Result of scoring a guess pool
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    /// Guesses scored, in pool order
    pub scored: Vec<ScoredGuess<'a>>,
    /// False when the deadline or early exit stopped the scan
    pub complete: bool,
}

/// Lookup for "is this word a candidate"
pub struct CandidateSet<'c>(FxHashSet<&'c str>);

impl<'c> CandidateSet<'c> {
    #[must_use]
    pub fn new(candidates: &[&'c Word]) -> Self {
        Self(candidates.iter().map(|w| w.text()).collect())
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word.text())
    }
}

/// Score `guesses` in chunks, honoring `limits`
///
/// At least the first chunk is always scored, so a non-empty pool yields a
/// non-empty scan even with an expired deadline.
#[must_use]
pub fn scan<'a>(
    guesses: &[&'a Word],
    scorer: &Scorer<'_>,
    candidates: &CandidateSet<'_>,
    limits: &ScanLimits,
) -> Scan<'a> {
    let mut scored = Vec::with_capacity(guesses.len());
    let mut best = f64::NEG_INFINITY;

    for (index, chunk) in guesses.chunks(SCAN_CHUNK).enumerate() {
        if index > 0 {
            if let Some(threshold) = limits.early_exit
                && best >= threshold
            {
                log::debug!("early exit at {best:.3} after {} guesses", scored.len());
                return Scan {
                    scored,
                    complete: false,
                };
            }
            if limits.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                log::warn!(
                    "time budget reached after scoring {} of {} guesses",
                    scored.len(),
                    guesses.len()
                );
                return Scan {
                    scored,
                    complete: false,
                };
            }
        }

        let score_one = |&word: &&'a Word| ScoredGuess {
            word,
            score: scorer.score(word),
            is_candidate: candidates.contains(word),
        };
        let chunk_scores: Vec<ScoredGuess<'a>> = if limits.parallel {
            chunk.par_iter().map(score_one).collect()
        } else {
            chunk.iter().map(score_one).collect()
        };

        best = chunk_scores.iter().map(|s| s.score).fold(best, f64::max);
        scored.extend(chunk_scores);
    }

    Scan {
        scored,
        complete: true,
    }
}

/// Strict ranking order: score descending, candidates first, then word ascending
#[must_use]
pub fn rank_order(a: &ScoredGuess<'_>, b: &ScoredGuess<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(b.is_candidate.cmp(&a.is_candidate))
        .then_with(|| a.word.cmp(b.word))
}

/// Sort scored guesses best-first
pub fn rank(scored: &mut [ScoredGuess<'_>]) {
    scored.sort_by(rank_order);
}

/// Pick the winner from scored guesses
///
/// Takes the top-ranked guess; when it is not a candidate, the best candidate
/// whose score is within `epsilon` of it wins instead.
#[must_use]
pub fn pick_best<'a>(scored: &[ScoredGuess<'a>], epsilon: f64) -> Option<ScoredGuess<'a>> {
    let top = scored.iter().min_by(|a, b| rank_order(a, b))?;
    if top.is_candidate {
        return Some(*top);
    }

    let preferred = scored
        .iter()
        .filter(|s| s.is_candidate && top.score - s.score <= epsilon)
        .min_by(|a, b| rank_order(a, b));

    Some(*preferred.unwrap_or(top))
}

/// The `n` best guesses by score (strict order, no epsilon)
#[must_use]
pub fn top_n<'a>(mut scored: Vec<ScoredGuess<'a>>, n: usize) -> Vec<ScoredGuess<'a>> {
    rank(&mut scored);
    scored.truncate(n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn scored<'a>(word: &'a Word, score: f64, is_candidate: bool) -> ScoredGuess<'a> {
        ScoredGuess {
            word,
            score,
            is_candidate,
        }
    }

    #[test]
    fn score_dispatches_on_strategy() {
        let pool = words(&["slate", "crate", "grate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("crane").unwrap();

        let entropy = score(&guess, &refs, ScoringStrategy::Entropy);
        let stats = score(&guess, &refs, ScoringStrategy::Statistical);
        assert!((entropy - calculate_entropy(&guess, &refs)).abs() < 1e-12);
        assert!((stats - LetterStats::new(&refs).score(&guess)).abs() < 1e-12);
    }

    #[test]
    fn ties_break_lexicographically() {
        let pool = words(&["bbbbb", "aaaaa", "ccccc"]);
        let entries: Vec<ScoredGuess> = pool.iter().map(|w| scored(w, 1.0, false)).collect();

        let best = pick_best(&entries, 0.0).unwrap();
        assert_eq!(best.word.text(), "AAAAA");
    }

    #[test]
    fn candidate_preferred_within_epsilon() {
        let pool = words(&["probe", "match"]);
        let entries = [scored(&pool[0], 2.0, false), scored(&pool[1], 1.95, true)];

        assert_eq!(pick_best(&entries, 0.1).unwrap().word.text(), "MATCH");
        assert_eq!(pick_best(&entries, 0.01).unwrap().word.text(), "PROBE");
    }

    #[test]
    fn exact_tie_prefers_candidate_even_without_epsilon() {
        let pool = words(&["aaaaa", "zzzzz"]);
        let entries = [scored(&pool[0], 1.0, false), scored(&pool[1], 1.0, true)];

        assert_eq!(pick_best(&entries, 0.0).unwrap().word.text(), "ZZZZZ");
    }

    #[test]
    fn pick_best_empty() {
        assert!(pick_best(&[], 0.1).is_none());
    }

    #[test]
    fn ranking_is_independent_of_input_order() {
        let pool = words(&["crane", "slate", "zzzzz", "trace", "grate", "irate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let scorer = Scorer::new(ScoringStrategy::Entropy, &refs);
        let set = CandidateSet::new(&refs);

        let forward = scan(&refs, &scorer, &set, &ScanLimits::default());
        let mut reversed_refs = refs.clone();
        reversed_refs.reverse();
        let backward = scan(&reversed_refs, &scorer, &set, &ScanLimits::default());

        assert_eq!(
            pick_best(&forward.scored, 0.05).unwrap().word,
            pick_best(&backward.scored, 0.05).unwrap().word
        );
    }

    #[test]
    fn parallel_scan_matches_sequential() {
        let pool: Vec<Word> = (0..600)
            .map(|i| {
                let a = b'A' + (i % 26) as u8;
                let b = b'A' + (i / 26 % 26) as u8;
                let text: String = [a, b, b'A', b'T', b'E'].iter().map(|&c| c as char).collect();
                Word::new(&text).unwrap()
            })
            .collect();
        let guesses: Vec<&Word> = pool.iter().collect();
        let candidates: Vec<&Word> = pool.iter().take(40).collect();
        let scorer = Scorer::new(ScoringStrategy::Entropy, &candidates);
        let set = CandidateSet::new(&candidates);

        let sequential = scan(&guesses, &scorer, &set, &ScanLimits::default());
        let parallel = scan(
            &guesses,
            &scorer,
            &set,
            &ScanLimits {
                parallel: true,
                ..ScanLimits::default()
            },
        );

        assert!(sequential.complete && parallel.complete);
        assert_eq!(sequential.scored, parallel.scored);
    }

    #[test]
    fn expired_deadline_still_scores_first_chunk() {
        let pool: Vec<Word> = (0..(SCAN_CHUNK * 2))
            .map(|i| {
                let a = b'A' + (i % 26) as u8;
                let b = b'A' + (i / 26 % 26) as u8;
                let text: String = [b'S', a, b, b'O', b'K'].iter().map(|&c| c as char).collect();
                Word::new(&text).unwrap()
            })
            .collect();
        let guesses: Vec<&Word> = pool.iter().collect();
        let candidates: Vec<&Word> = pool.iter().take(5).collect();
        let scorer = Scorer::new(ScoringStrategy::Statistical, &candidates);
        let set = CandidateSet::new(&candidates);

        let limits = ScanLimits {
            deadline: Instant::now().checked_sub(Duration::from_millis(1)),
            ..ScanLimits::default()
        };
        let result = scan(&guesses, &scorer, &set, &limits);

        assert!(!result.complete);
        assert_eq!(result.scored.len(), SCAN_CHUNK);
        assert!(pick_best(&result.scored, 0.0).is_some());
    }

    #[test]
    fn early_exit_stops_after_threshold() {
        let pool: Vec<Word> = (0..(SCAN_CHUNK * 3))
            .map(|i| {
                let a = b'A' + (i % 26) as u8;
                let b = b'A' + (i / 26 % 26) as u8;
                let text: String = [a, b, b'I', b'N', b'T'].iter().map(|&c| c as char).collect();
                Word::new(&text).unwrap()
            })
            .collect();
        let guesses: Vec<&Word> = pool.iter().collect();
        let candidates: Vec<&Word> = pool.iter().take(8).collect();
        let scorer = Scorer::new(ScoringStrategy::Entropy, &candidates);
        let set = CandidateSet::new(&candidates);

        let limits = ScanLimits {
            early_exit: Some(0.5),
            ..ScanLimits::default()
        };
        let result = scan(&guesses, &scorer, &set, &limits);

        assert!(!result.complete);
        assert_eq!(result.scored.len(), SCAN_CHUNK);
    }

    #[test]
    fn top_n_truncates_in_rank_order() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        let entries = vec![
            scored(&pool[0], 0.5, false),
            scored(&pool[1], 2.0, false),
            scored(&pool[2], 1.0, true),
        ];

        let top: Vec<&str> = top_n(entries, 2).iter().map(|s| s.word.text()).collect();
        assert_eq!(top, ["BBBBB", "CCCCC"]);
    }
}
