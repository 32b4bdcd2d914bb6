//! Candidate filtering
//!
//! A word stays possible iff replaying every recorded guess against it reproduces
//! the recorded feedback exactly. Everything that asks "is this word still
//! possible" goes through here.

use crate::core::{GuessRecord, Word};

/// Check a single word against the whole history
///
/// Short-circuits on the first record the word contradicts.
#[inline]
#[must_use]
pub fn is_consistent(word: &Word, history: &[GuessRecord]) -> bool {
    history.iter().all(|record| record.admits(word))
}

/// Filter a pool down to the words consistent with `history`
///
/// Preserves the pool's order. An empty result means the history contradicts
/// every word in the pool.
///
/// # Examples
/// ```
/// use wordle_helper::core::{GuessRecord, Word};
/// use wordle_helper::solver::filter_candidates;
///
/// let pool: Vec<Word> = ["crane", "slate", "trace", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let record = GuessRecord::observed(Word::new("crane").unwrap(), &Word::new("trace").unwrap());
///
/// let remaining = filter_candidates(&pool, &[record]);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "TRACE");
/// ```
#[must_use]
pub fn filter_candidates<'a>(pool: &'a [Word], history: &[GuessRecord]) -> Vec<&'a Word> {
    pool.iter()
        .filter(|&candidate| is_consistent(candidate, history))
        .collect()
}

/// Narrow an already-filtered candidate list by further records
#[must_use]
pub fn refine_candidates<'a>(candidates: &[&'a Word], history: &[GuessRecord]) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| is_consistent(candidate, history))
        .collect()
}
